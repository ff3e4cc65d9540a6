//! Drag gesture state: pending press, active drag and hover highlighting.

use super::{
    geometry::Point,
    plan::{DragError, DropPlan, HoverTarget, plan_drop},
};
use crate::board::{
    domain::{LeadId, LeadStatus},
    ports::KeyValueStorage,
    services::BoardStore,
};
use mockable::Clock;
use tracing::debug;

/// Pointer travel, in pixels on either axis, that turns a press into a
/// drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingPress {
    lead_id: LeadId,
    start: Point,
}

/// Tracks one drag gesture at a time.
///
/// Only the dragged lead's identifier is kept; its position is re-read from
/// the store on every hover. Every hover that changes the position is
/// applied to the store immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragController {
    threshold_px: i32,
    pending: Option<PendingPress>,
    dragging: Option<LeadId>,
    hovered_column: Option<LeadStatus>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD_PX)
    }
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub const fn new(threshold_px: i32) -> Self {
        Self {
            threshold_px,
            pending: None,
            dragging: None,
            hovered_column: None,
        }
    }

    /// Returns the lead being dragged.
    #[must_use]
    pub const fn dragging(&self) -> Option<LeadId> {
        self.dragging
    }

    /// Returns the column currently highlighted as the drop zone.
    #[must_use]
    pub const fn hovered_column(&self) -> Option<LeadStatus> {
        self.hovered_column
    }

    /// Returns `true` while a press is waiting to become a drag.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a press on a card. The drag starts once the pointer travels
    /// past the threshold, so a click never reorders anything.
    pub const fn press(&mut self, lead_id: LeadId, at: Point) {
        self.pending = Some(PendingPress { lead_id, start: at });
    }

    /// Feeds pointer movement. Returns `true` when this movement started
    /// the drag.
    pub fn pointer_moved(&mut self, at: Point) -> bool {
        let Some(press) = self.pending else {
            return false;
        };
        if self.dragging.is_some() {
            return false;
        }
        let dx = (at.x.saturating_sub(press.start.x)).saturating_abs();
        let dy = (at.y.saturating_sub(press.start.y)).saturating_abs();
        if dx > self.threshold_px || dy > self.threshold_px {
            self.start(press.lead_id);
            return true;
        }
        false
    }

    /// Starts dragging immediately, as touch backends do after a long
    /// press.
    pub fn start(&mut self, lead_id: LeadId) {
        debug!(%lead_id, "drag started");
        self.pending = None;
        self.dragging = Some(lead_id);
        self.hovered_column = None;
    }

    /// Handles a hover over `target`, applying any resulting move to the
    /// store. Returns the applied plan.
    ///
    /// Hovers while no drag is active are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] when the target cannot be resolved or the store
    /// rejects the mutation; the board is unchanged in that case.
    pub fn hover<S, C>(
        &mut self,
        store: &mut BoardStore<S, C>,
        target: HoverTarget<'_>,
    ) -> Result<Option<DropPlan>, DragError>
    where
        S: KeyValueStorage,
        C: Clock + Send + Sync,
    {
        let Some(lead_id) = self.dragging else {
            return Ok(None);
        };
        self.hovered_column = Some(target.column());
        let plan = plan_drop(store.board(), lead_id, target)?;
        if let Some(resolved) = plan {
            apply_plan(store, resolved)?;
        }
        Ok(plan)
    }

    /// Finishes the gesture over `target`: the final hover is applied and
    /// all transient state is cleared, whether or not it succeeded.
    ///
    /// # Errors
    ///
    /// See [`Self::hover`].
    pub fn release<S, C>(
        &mut self,
        store: &mut BoardStore<S, C>,
        target: HoverTarget<'_>,
    ) -> Result<Option<DropPlan>, DragError>
    where
        S: KeyValueStorage,
        C: Clock + Send + Sync,
    {
        let outcome = self.hover(store, target);
        self.end();
        outcome
    }

    /// Ends the gesture without a drop (cancel, pointer released outside
    /// any target). Clears every piece of transient state.
    pub fn end(&mut self) {
        if let Some(lead_id) = self.dragging {
            debug!(%lead_id, "drag ended");
        }
        self.pending = None;
        self.dragging = None;
        self.hovered_column = None;
    }
}

fn apply_plan<S, C>(store: &mut BoardStore<S, C>, plan: DropPlan) -> Result<(), DragError>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    match plan {
        DropPlan::Reorder { column, from, to } => {
            store.reorder_leads_in_column(column, from, to)?;
        }
        DropPlan::Move(request) => {
            store.move_lead_between_columns(request)?;
        }
    }
    Ok(())
}
