//! Interaction state machine - the one active pointer gesture, if any.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning      (pointer down on empty work-zone space)
//! Idle -> Dragging     (pointer down on a shape in either zone)
//!
//! Panning  -> Idle     (pointer up)
//! Dragging -> Idle     (pointer up: committed / transferred / cancelled,
//!                       or teardown: cancel, disconnect, removal of the shape)
//! ```
//!
//! Only one gesture exists at a time, so move/up events can never reach a
//! finished session: once it leaves `Dragging` the state holds nothing to act on.

use super::session::{DragSession, SessionId};
use crate::geometry::Point;
use crate::region::RegionKind;
use crate::shape::ShapeId;

#[derive(Debug, Clone, Default)]
pub enum InteractionState {
    /// No active gesture
    #[default]
    Idle,

    /// Dragging empty work-zone space
    Panning {
        session: SessionId,
        /// Last pointer position (screen) for delta calculation
        last_screen: Point,
    },

    /// Dragging a shape
    Dragging(DragSession),
}

impl InteractionState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently panning the work zone
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Returns true if currently dragging a shape
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Identity of the active gesture
    pub fn session_id(&self) -> Option<SessionId> {
        match self {
            Self::Idle => None,
            Self::Panning { session, .. } => Some(*session),
            Self::Dragging(drag) => Some(drag.id),
        }
    }

    /// The active drag, if any
    pub fn drag(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn drag_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    /// Region and shape being dragged
    pub fn dragged_shape(&self) -> Option<(RegionKind, ShapeId)> {
        self.drag().map(|drag| (drag.region, drag.shape))
    }

    pub fn start_dragging(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    pub fn start_panning(&mut self, screen_pos: Point) {
        *self = Self::Panning {
            session: SessionId::new(),
            last_screen: screen_pos,
        };
    }

    /// Replace the last pan position, returning the delta since the previous one.
    pub fn update_pan(&mut self, screen_pos: Point) -> Option<Point> {
        match self {
            Self::Panning { last_screen, .. } => {
                let delta = screen_pos - *last_screen;
                *last_screen = screen_pos;
                Some(delta)
            }
            _ => None,
        }
    }

    /// Leave the current state, returning it.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
