//! Drag-and-drop resolution for the lead board.
//!
//! Pointer positions are turned into discrete column/index targets by
//! nearest-midpoint resolution against the rendered card rectangles. The
//! dragged lead's current position is always read back from the board
//! store, so the gesture never keeps its own copy of the order.

mod controller;
mod geometry;
mod plan;

pub use controller::{DEFAULT_DRAG_THRESHOLD_PX, DragController};
pub use geometry::{Point, SlotRect, resolve_insertion_index};
pub use plan::{DragError, DropPlan, HoverTarget, plan_drop};
