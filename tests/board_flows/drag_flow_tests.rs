//! Drag gestures applied to a persisted board.

use std::sync::Arc;

use super::helpers::{column_ids, open, seed, storage};
use leadboard::board::{adapters::memory::InMemoryStorage, domain::LeadStatus};
use leadboard::config::BoardConfig;
use leadboard::dnd::{DragController, HoverTarget, Point, SlotRect};
use rstest::rstest;

fn layout(count: i32) -> Vec<SlotRect> {
    (0..count).map(|i| SlotRect::new(i * 60, 50)).collect()
}

#[rstest]
fn drag_from_new_to_contacted_persists(storage: Arc<InMemoryStorage>) {
    let mut store = open(&storage).expect("open board");
    let new_ids = seed(&mut store, LeadStatus::New, 3).expect("seed new");
    let contacted = seed(&mut store, LeadStatus::Contacted, 2).expect("seed contacted");
    let dragged = new_ids.first().copied().expect("seeded lead");
    let mut drag = DragController::default();

    drag.press(dragged, Point::new(10, 10));
    assert!(drag.pointer_moved(Point::new(10, 40)));
    let slots = layout(2);
    drag.release(
        &mut store,
        HoverTarget::Cards {
            column: LeadStatus::Contacted,
            pointer_y: 500,
            slots: &slots,
        },
    )
    .expect("drop applies");

    let reopened = open(&storage).expect("reopen board");
    assert_eq!(column_ids(&reopened, LeadStatus::New), &new_ids[1..]);
    let mut expected = contacted;
    expected.push(dragged);
    assert_eq!(column_ids(&reopened, LeadStatus::Contacted), expected);
    assert_eq!(
        reopened.lead(dragged).map(|lead| lead.status()),
        Some(LeadStatus::Contacted)
    );
    assert_eq!(drag.dragging(), None);
}

#[rstest]
fn small_wiggle_is_a_click_not_a_drag(storage: Arc<InMemoryStorage>) {
    let mut store = open(&storage).expect("open board");
    let ids = seed(&mut store, LeadStatus::New, 2).expect("seed new");
    let pressed = ids.first().copied().expect("seeded lead");
    let mut drag = DragController::default();

    drag.press(pressed, Point::new(0, 0));
    assert!(!drag.pointer_moved(Point::new(2, 3)));
    let plan = drag
        .release(&mut store, HoverTarget::ColumnEnd(LeadStatus::Won))
        .expect("release succeeds");

    assert_eq!(plan, None);
    assert_eq!(column_ids(&store, LeadStatus::New), ids);
    assert!(!drag.is_pending());
}

#[rstest]
fn configured_threshold_governs_drag_start(storage: Arc<InMemoryStorage>) {
    let mut store = open(&storage).expect("open board");
    let ids = seed(&mut store, LeadStatus::New, 1).expect("seed new");
    let pressed = ids.first().copied().expect("seeded lead");
    let config = BoardConfig::from_json(r#"{"drag_threshold_px": 20}"#).expect("valid config");
    let mut drag = config.drag_controller();

    drag.press(pressed, Point::new(0, 0));
    assert!(!drag.pointer_moved(Point::new(12, 15)));
    assert_eq!(drag.dragging(), None);
    assert!(drag.pointer_moved(Point::new(0, 21)));
    assert_eq!(drag.dragging(), Some(pressed));

    let plan = drag.release(&mut store, HoverTarget::ColumnEnd(LeadStatus::Won));
    assert!(plan.is_ok());
    assert_eq!(column_ids(&store, LeadStatus::Won), ids);
}
