//! Pointer down handling - start a shape drag or a pan; double-click actions.

use super::session::DragSession;
use crate::editor::Editor;
use crate::geometry::Point;
use crate::profile_scope;
use crate::region::RegionKind;
use crate::shape::ShapeId;
use tracing::{debug, warn};

impl Editor {
    /// Returns true if a gesture started.
    pub fn handle_pointer_down(&mut self, screen_pos: Point) -> bool {
        if !self.input_state().is_idle() {
            // A second press while a gesture is live is ignored until it resolves
            debug!("Ignoring pointer down during active gesture");
            return false;
        }

        let Some((kind, world_pos, hit)) = self.hit_at(screen_pos) else {
            return false;
        };

        match hit {
            Some(shape) => {
                let Some(committed) = self.region(kind).store().get(shape).cloned() else {
                    return false;
                };
                let session = DragSession::begin(kind, shape, committed, world_pos);
                debug!(region = %kind, shape = %shape, session = %session.id, "Drag started");
                self.input_state_mut().start_dragging(session);
                true
            }
            None if kind.is_navigable() => {
                self.input_state_mut().start_panning(screen_pos);
                true
            }
            None => false,
        }
    }

    /// Double-click on a shape: a buffer shape is copied into the work zone
    /// unchanged, a work shape is deleted. Returns true if anything changed.
    pub fn handle_double_click(&mut self, screen_pos: Point) -> bool {
        if !self.input_state().is_idle() {
            return false;
        }
        let Some((kind, _, Some(shape))) = self.hit_at(screen_pos) else {
            return false;
        };

        match kind {
            RegionKind::Buffer => match self.copy_to_other(kind, shape) {
                Ok(_) => true,
                Err(e) => {
                    debug!(shape = %shape, "Copy to work zone skipped: {}", e);
                    false
                }
            },
            RegionKind::Work => self.remove_shape(kind, shape).is_some(),
        }
    }

    /// Region, world position and topmost shape under a screen position.
    fn hit_at(&self, screen_pos: Point) -> Option<(RegionKind, Point, Option<ShapeId>)> {
        profile_scope!("hit_test");

        let kind = self.region_at(screen_pos)?;
        let region = self.region(kind);
        let world_pos = match region.screen_to_world(screen_pos) {
            Ok(pos) => pos,
            Err(e) => {
                warn!(region = %kind, "Pointer mapping failed: {}", e);
                return None;
            }
        };
        Some((kind, world_pos, region.store().hit_test(world_pos)))
    }
}
