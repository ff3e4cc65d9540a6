//! Given steps for lead board BDD scenarios.

use super::world::{BoardWorld, parse_column, parse_provider, run_async, split_names};
use eyre::WrapErr;
use leadboard::board::domain::NewLead;
use rstest_bdd_macros::given;

#[given(r#"leads "{names}" in the "{column}" column"#)]
fn leads_in_column(
    world: &mut BoardWorld,
    names: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = parse_column(&column)?;
    for name in split_names(&names) {
        world
            .store
            .create_lead(NewLead::new(name, "Acme").with_status(status))
            .wrap_err("seed lead for scenario")?;
    }
    Ok(())
}

#[given("storage rejects writes")]
fn storage_rejects_writes(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .storage
        .set_reject_writes(true)
        .wrap_err("toggle storage writes")
}

#[given(r#"the "{provider}" connector is connected"#)]
fn connector_is_connected(world: &mut BoardWorld, provider: String) -> Result<(), eyre::Report> {
    let crm = parse_provider(&provider)?;
    run_async(world.integrations.connect(crm)).wrap_err("connect provider for scenario")
}
