//! Pointer and wheel input for both regions.
//!
//! ## Architecture
//!
//! Every host event goes through `Editor::dispatch`. A single explicit state
//! machine (`InteractionState`) tracks the one live gesture: idle, panning the
//! work zone, or dragging a shape. Shapes never own listeners, so a shape that
//! is removed mid-gesture simply stops matching and later events are no-ops.
//!
//! ## Modules
//!
//! - `event` - Event types and the dispatch entry point
//! - `state` - Interaction state machine
//! - `session` - Drag sessions and drop outcomes
//! - `mouse_down` - Gesture start, double-click actions
//! - `drag` - Pointer move (shape drag, pan)
//! - `mouse_up` - Drop resolution: commit, transfer or cancel
//! - `transform` - Zoom/pan view transform and wheel handling
//! - `coords` - Screen <-> viewport mapping

pub mod coords;
mod drag;
mod event;
mod mouse_down;
mod mouse_up;
mod session;
mod state;
mod transform;

pub use event::{EventResponse, InputEvent};
pub use session::{CancelReason, DragSession, DropOutcome, SessionId};
pub use state::InteractionState;
pub use transform::ViewTransform;
