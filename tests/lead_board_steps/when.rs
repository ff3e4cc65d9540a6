//! When steps for lead board BDD scenarios.

use super::world::{BoardWorld, open_store, parse_column, parse_provider, run_async};
use eyre::WrapErr;
use leadboard::board::services::MoveLead;
use leadboard::import::parse_csv;
use rstest_bdd_macros::when;

#[when(r#"lead "{name}" is moved to the "{column}" column at position {index:usize}"#)]
fn move_lead(
    world: &mut BoardWorld,
    name: String,
    column: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let destination = parse_column(&column)?;
    let lead_id = world.lead_id(&name)?;
    let (source, source_index) = world
        .store
        .locate(lead_id)
        .ok_or_else(|| eyre::eyre!("lead '{name}' is not on the board"))?;
    let result = world.store.move_lead_between_columns(MoveLead {
        source,
        destination,
        source_index,
        dest_index: index,
        lead_id,
    });
    world.last_error = result.err().map(|err| err.to_string());
    Ok(())
}

#[when(
    r#"the card at position {from:usize} of the "{column}" column is moved to position {to:usize}"#
)]
fn reorder_cards(
    world: &mut BoardWorld,
    from: usize,
    column: String,
    to: usize,
) -> Result<(), eyre::Report> {
    let status = parse_column(&column)?;
    world
        .store
        .reorder_leads_in_column(status, from, to)
        .wrap_err("reorder column")
}

#[when(r#"the CSV row "{row}" is imported under the header "{header}""#)]
fn import_csv_row(world: &mut BoardWorld, row: String, header: String) -> Result<(), eyre::Report> {
    let records = parse_csv(&format!("{header}\n{row}\n"));
    world
        .store
        .import_leads(records)
        .wrap_err("import csv records")?;
    Ok(())
}

#[when("the board is reopened from storage")]
fn reopen_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.store = open_store(&world.storage)?;
    Ok(())
}

#[when(r#""{provider}" is synced"#)]
fn sync_provider(world: &mut BoardWorld, provider: String) -> Result<(), eyre::Report> {
    let crm = parse_provider(&provider)?;
    run_async(world.integrations.sync(&mut world.store, crm, None)).wrap_err("sync provider")?;
    Ok(())
}
