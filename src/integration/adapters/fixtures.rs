//! Canned provider records used by [`super::MockConnector`].

use crate::import::JsonRecord;
use crate::integration::domain::CrmProvider;
use serde_json::{Value, json};

pub(super) fn records(provider: CrmProvider) -> Vec<JsonRecord> {
    let raw = match provider {
        CrmProvider::Salesforce => salesforce(),
        CrmProvider::HubSpot => hubspot(),
        CrmProvider::Marketo => marketo(),
        CrmProvider::Airtable => airtable(),
    };
    match raw {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn salesforce() -> Value {
    json!([
        {
            "Id": "00Q5e000001AbCdEAK",
            "FirstName": "Maria",
            "LastName": "Gonzalez",
            "Company": "Northwind Traders",
            "Email": "maria.gonzalez@northwind.example",
            "Phone": "+1 415 555 0142",
            "Status": "Open - Not Contacted",
            "Rating": "Hot",
            "Description": "Asked for an enterprise pricing sheet."
        },
        {
            "Id": "00Q5e000001AbCeEAK",
            "FirstName": "Kenji",
            "LastName": "Watanabe",
            "Company": "Sakura Logistics",
            "Email": "k.watanabe@sakura.example",
            "Phone": null,
            "Status": "Working - Contacted",
            "Rating": "Warm",
            "Description": ""
        },
        {
            "Id": "00Q5e000001AbCfEAK",
            "FirstName": "Priya",
            "LastName": "Raman",
            "Company": "Helix Biotech",
            "Email": "priya@helix.example",
            "Phone": "+44 20 7946 0018",
            "Status": "Closed - Converted",
            "Rating": "Cold",
            "Description": "Signed annual plan."
        }
    ])
}

fn hubspot() -> Value {
    json!([
        {
            "id": "51",
            "firstname": "Lena",
            "lastname": "Fischer",
            "company": "Brightpath Learning",
            "email": "lena.fischer@brightpath.example",
            "phone": "+49 30 901820",
            "lifecyclestage": "marketingqualifiedlead",
            "notes": "Downloaded the onboarding guide."
        },
        {
            "id": "52",
            "firstname": "Omar",
            "lastname": "Haddad",
            "company": "Dune Analytics",
            "email": "omar@dune.example",
            "phone": "",
            "lifecyclestage": "subscriber",
            "notes": null
        }
    ])
}

fn marketo() -> Value {
    json!([
        {
            "id": 1001,
            "firstName": "Chloe",
            "lastName": "Martin",
            "company": "Atelier Nord",
            "email": "chloe.martin@ateliernord.example",
            "phone": "+33 1 84 88 12 00",
            "leadStatus": "Sales Qualified Lead",
            "priority": "high"
        },
        {
            "id": 1002,
            "firstName": "Unknown",
            "lastName": "Visitor",
            "company": null,
            "email": "visitor@anon.example",
            "leadStatus": "Lead",
            "priority": null
        },
        {
            "id": 1003,
            "firstName": "Samuel",
            "lastName": "Okafor",
            "company": "Lagos Fintech Hub",
            "email": "samuel@lfh.example",
            "leadStatus": "Disqualified",
            "priority": "low"
        }
    ])
}

fn airtable() -> Value {
    json!([
        {
            "Name": "Grace Liu",
            "Company": "Tidewater Studios",
            "Email": "grace@tidewater.example",
            "Priority": "Medium",
            "Stage": "Contacted",
            "Notes": "Follow up after the demo."
        },
        {
            "Name": "Henrik Berg",
            "Company": "Fjord Outdoor",
            "Email": "henrik@fjord.example",
            "Phone": "+47 22 12 34 56",
            "Priority": "High",
            "Stage": "Qualified",
            "Notes": ""
        }
    ])
}
