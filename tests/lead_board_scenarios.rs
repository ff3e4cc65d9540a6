//! Behaviour tests for the lead board.

mod lead_board_steps;

use lead_board_steps::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/lead_board.feature",
    name = "Drag a new lead to the end of the contacted column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drag_new_lead_to_contacted(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lead_board.feature",
    name = "Reorder cards within a column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_within_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lead_board.feature",
    name = "Import a CSV file with defaults"
)]
#[tokio::test(flavor = "multi_thread")]
async fn import_csv_with_defaults(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lead_board.feature",
    name = "The board survives a reload"
)]
#[tokio::test(flavor = "multi_thread")]
async fn board_survives_reload(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lead_board.feature",
    name = "A rejected write leaves the board unchanged"
)]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_write_leaves_board(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/lead_board.feature",
    name = "Sync a connected CRM"
)]
#[tokio::test(flavor = "multi_thread")]
async fn sync_connected_crm(world: BoardWorld) {
    let _ = world;
}
