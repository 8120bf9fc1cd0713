//! Pointer up handling - resolve the drop of a dragged shape, finish a pan.

use super::session::{CancelReason, DragSession, DropOutcome};
use super::state::InteractionState;
use crate::editor::Editor;
use crate::geometry::Point;
use crate::region::RegionKind;
use crate::transfer::TransferCoordinator;
use tracing::{debug, warn};

impl Editor {
    /// Returns the drop outcome when a shape drag ended.
    pub fn handle_pointer_up(&mut self, screen_pos: Point) -> Option<DropOutcome> {
        match self.input_state_mut().take() {
            InteractionState::Idle => None,
            InteractionState::Panning { .. } => {
                self.persist_transform();
                None
            }
            InteractionState::Dragging(drag) => {
                let outcome = self.finish_drag(drag, screen_pos);
                for kind in RegionKind::ALL {
                    self.region_mut(kind).set_highlighted(false);
                }
                Some(outcome)
            }
        }
    }

    fn finish_drag(&mut self, drag: DragSession, screen_pos: Point) -> DropOutcome {
        let DragSession {
            id: session,
            region: source,
            shape,
            working,
            ..
        } = drag;
        let cancelled = |reason| DropOutcome::Cancelled {
            region: source,
            shape,
            reason,
        };

        if !self.region(source).store().contains(shape) {
            debug!(%session, shape = %shape, "Dragged shape is gone, nothing to drop");
            return cancelled(CancelReason::ShapeRemoved);
        }

        let target = source.other();
        let (from, to) = self.regions_mut(source);
        if !to.is_connected() {
            warn!(%session, region = %target, "Drop target unavailable, drag cancelled");
            return cancelled(CancelReason::RegionUnavailable(target));
        }

        if to.contains_screen(screen_pos) {
            let drop_world = match to.screen_to_world(screen_pos) {
                Ok(pos) => pos,
                Err(e) => return cancelled(CancelReason::from(&e)),
            };
            return match TransferCoordinator::transfer_polygon(
                from.store_mut(),
                to.store_mut(),
                shape,
                &working,
                drop_world,
            ) {
                Ok(new_shape) => DropOutcome::Transferred {
                    from: source,
                    to: target,
                    shape: new_shape,
                },
                Err(e) => {
                    debug!(%session, shape = %shape, "Transfer rejected: {}", e);
                    cancelled(CancelReason::from(&e))
                }
            };
        }

        match from.store_mut().replace(shape, working) {
            Ok(()) => DropOutcome::Committed {
                region: source,
                shape,
            },
            Err(e) => cancelled(CancelReason::from(&e)),
        }
    }
}
