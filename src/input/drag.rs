//! Pointer move handling - shape dragging and work-zone panning.
//!
//! Move events arrive for every pointer motion while a button is held, so the
//! early exit for the idle state comes first.

use super::session::{CancelReason, DropOutcome};
use super::state::InteractionState;
use crate::editor::Editor;
use crate::geometry::Point;
use crate::profile_scope;
use crate::region::RegionKind;
use tracing::{debug, warn};

impl Editor {
    /// Returns true if anything visible changed.
    pub fn handle_pointer_move(&mut self, screen_pos: Point) -> bool {
        match self.input_state() {
            InteractionState::Idle => false,
            InteractionState::Panning { .. } => self.pan_move(screen_pos),
            InteractionState::Dragging(_) => self.drag_move(screen_pos),
        }
    }

    fn pan_move(&mut self, screen_pos: Point) -> bool {
        let Some(delta) = self.input_state_mut().update_pan(screen_pos) else {
            return false;
        };
        match self.region_mut(RegionKind::Work).pan_by(delta) {
            Ok(changed) => changed,
            Err(e) => {
                warn!("Pan aborted: {}", e);
                self.abort_interaction();
                true
            }
        }
    }

    fn drag_move(&mut self, screen_pos: Point) -> bool {
        profile_scope!("drag_move");

        let Some((source, shape)) = self.input_state().dragged_shape() else {
            return false;
        };

        // The shape may have been deleted underneath the gesture
        if !self.region(source).store().contains(shape) {
            debug!(shape = %shape, "Dragged shape is gone, ending drag");
            self.cancel_drag(CancelReason::ShapeRemoved);
            return true;
        }

        let world_pos = match self.region(source).screen_to_world(screen_pos) {
            Ok(pos) => pos,
            Err(e) => {
                warn!(region = %source, "Drag aborted: {}", e);
                self.cancel_drag(CancelReason::from(&e));
                return true;
            }
        };

        if let Some(drag) = self.input_state_mut().drag_mut() {
            drag.drag_to(world_pos);
        }

        let foreign = self.region_mut(source.other());
        let over = foreign.contains_screen(screen_pos);
        foreign.set_highlighted(over);
        true
    }

    /// End the active drag without touching any store.
    pub(crate) fn cancel_drag(&mut self, reason: CancelReason) -> Option<DropOutcome> {
        if !self.input_state().is_dragging() {
            return None;
        }
        let InteractionState::Dragging(drag) = self.input_state_mut().take() else {
            return None;
        };
        for kind in RegionKind::ALL {
            self.region_mut(kind).set_highlighted(false);
        }
        debug!(session = %drag.id, shape = %drag.shape, ?reason, "Drag cancelled");
        Some(DropOutcome::Cancelled {
            region: drag.region,
            shape: drag.shape,
            reason,
        })
    }
}
