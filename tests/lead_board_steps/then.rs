//! Then steps for lead board BDD scenarios.

use super::world::{BoardWorld, parse_column, split_names};
use leadboard::board::domain::{LeadSource, LeadStatus, Priority};
use rstest_bdd_macros::then;

#[then(r#"the "{column}" column lists "{names}""#)]
fn column_lists(world: &BoardWorld, column: String, names: String) -> Result<(), eyre::Report> {
    let status = parse_column(&column)?;
    let expected = split_names(&names);
    let actual = world.column_names(status);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column '{status}' to list {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"lead "{name}" has status "{status}""#)]
fn lead_has_status(world: &BoardWorld, name: String, status: String) -> Result<(), eyre::Report> {
    let expected = parse_column(&status)?;
    let lead = world.lead_named(&name)?;
    if lead.status() != expected {
        return Err(eyre::eyre!(
            "expected '{name}' to be {expected}, found {}",
            lead.status()
        ));
    }
    if world.store.locate(lead.id()).map(|(column, _)| column) != Some(expected) {
        return Err(eyre::eyre!("'{name}' is not listed in its status column"));
    }
    Ok(())
}

#[then(r#"lead "{name}" has priority "{priority}" and empty notes"#)]
fn lead_has_priority(
    world: &BoardWorld,
    name: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let expected = Priority::try_from(priority.as_str()).map_err(|err| eyre::eyre!("{err}"))?;
    let lead = world.lead_named(&name)?;
    if lead.priority() != expected || !lead.notes().is_empty() {
        return Err(eyre::eyre!(
            "unexpected lead '{name}': priority {}, notes {:?}",
            lead.priority(),
            lead.notes()
        ));
    }
    if lead.status() != LeadStatus::New {
        return Err(eyre::eyre!("imported lead should start as new"));
    }
    Ok(())
}

#[then("the board holds {count:usize} leads")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.store.snapshot().leads.len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} leads, found {actual}"));
    }
    world
        .store
        .snapshot()
        .verify()
        .map_err(|err| eyre::eyre!("board is inconsistent: {err}"))
}

#[then(r#"every lead has source "{source}""#)]
fn every_lead_has_source(world: &BoardWorld, source: String) -> Result<(), eyre::Report> {
    let expected = LeadSource::try_from(source.as_str()).map_err(|err| eyre::eyre!("{err}"))?;
    if let Some(lead) = world.store.leads().find(|lead| lead.source() != Some(expected)) {
        return Err(eyre::eyre!(
            "lead '{}' has source {:?}",
            lead.name(),
            lead.source()
        ));
    }
    Ok(())
}

#[then("the last operation failed")]
fn last_operation_failed(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.last_error.is_none() {
        return Err(eyre::eyre!("expected the last operation to fail"));
    }
    Ok(())
}
