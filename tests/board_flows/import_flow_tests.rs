//! CSV and JSON imports flowing into the board.

use std::sync::Arc;

use super::helpers::{open, storage};
use leadboard::board::{
    adapters::memory::InMemoryStorage,
    domain::{LeadSource, LeadStatus, Priority},
};
use leadboard::import::{FieldMapping, LeadField, parse_csv, parse_json, record_keys};
use rstest::rstest;

#[rstest]
fn csv_import_creates_lead_with_defaults(storage: Arc<InMemoryStorage>) {
    let mut store = open(&storage).expect("open board");

    let report = store
        .import_leads(parse_csv("name,company,priority\nJohn Doe,Acme,high\n"))
        .expect("import succeeds");

    assert_eq!(report.created.len(), 1);
    assert!(report.skipped.is_empty());
    let lead = store.leads().next().expect("one lead");
    assert_eq!(lead.name(), "John Doe");
    assert_eq!(lead.company(), "Acme");
    assert_eq!(lead.priority(), Priority::High);
    assert_eq!(lead.status(), LeadStatus::New);
    assert_eq!(lead.notes(), "");
    assert_eq!(store.locate(lead.id()), Some((LeadStatus::New, 0)));
}

#[rstest]
fn csv_import_skips_rows_without_company(storage: Arc<InMemoryStorage>) {
    let mut store = open(&storage).expect("open board");
    let text = concat!(
        "name,company,status,notes\n",
        "Jane,Globex,won,Renewal\n",
        "No Company,,new,\n",
        "\n",
        "Bob,Initech,unknown,\n",
    );

    let report = store.import_leads(parse_csv(text)).expect("import succeeds");

    assert_eq!(report.created.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped.first().map(|skip| skip.position), Some(1));
    let won: Vec<_> = store
        .leads_in_column(LeadStatus::Won)
        .iter()
        .map(|lead| (lead.name().to_owned(), lead.notes().to_owned()))
        .collect();
    assert_eq!(won, [("Jane".to_owned(), "Renewal".to_owned())]);
    assert_eq!(store.leads_in_column(LeadStatus::New).len(), 1);
}

#[rstest]
fn json_import_with_suggested_mapping(storage: Arc<InMemoryStorage>) {
    let mut store = open(&storage).expect("open board");
    let records = parse_json(
        r#"[
            {
                "full_name": "Lena Fischer",
                "organisation": "Brightpath",
                "Email_Address": "lena@brightpath.example",
                "stage": "Qualified",
                "lead_source": "referral"
            },
            {"full_name": "Omar Haddad", "organisation": "Dune", "rating": "hot", "stage": "lead"}
        ]"#,
    );
    let keys = record_keys(&records);
    let mut mapping = FieldMapping::suggest(keys.iter().map(String::as_str));
    mapping.map("organisation", LeadField::Company);

    let report = store
        .import_leads(mapping.apply_all(&records))
        .expect("import succeeds");

    assert_eq!(report.created.len(), 2);
    let lena = store
        .leads()
        .find(|lead| lead.name() == "Lena Fischer")
        .expect("Lena imported");
    assert_eq!(lena.company(), "Brightpath");
    assert_eq!(lena.email(), Some("lena@brightpath.example"));
    assert_eq!(lena.status(), LeadStatus::Qualified);
    assert_eq!(lena.source(), Some(LeadSource::Referral));
    let omar = store
        .leads()
        .find(|lead| lead.name() == "Omar Haddad")
        .expect("Omar imported");
    assert_eq!(omar.priority(), Priority::High);
    assert_eq!(omar.status(), LeadStatus::New);
}

#[rstest]
#[case("{ not json")]
#[case(r#"{"name": "not an array"}"#)]
#[case("[]")]
fn malformed_or_empty_json_imports_nothing(storage: Arc<InMemoryStorage>, #[case] text: &str) {
    let mut store = open(&storage).expect("open board");
    let records = parse_json(text);
    let mapping = FieldMapping::suggest(record_keys(&records).iter().map(String::as_str));

    let report = store
        .import_leads(mapping.apply_all(&records))
        .expect("import succeeds");

    assert!(report.created.is_empty());
    assert!(store.snapshot().leads.is_empty());
}
