//! Pointer events and the single dispatch entry point.

use super::session::DropOutcome;
use crate::editor::Editor;
use crate::geometry::Point;

/// A host input event, positioned in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { position: Point },
    PointerMove { position: Point },
    PointerUp { position: Point },
    /// Positive `delta_y` scrolls down (zoom out)
    Wheel { position: Point, delta_y: f64 },
    DoubleClick { position: Point },
}

/// What the host should do after an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResponse {
    /// Nothing changed
    Ignored,
    /// Visible state changed; re-render the scenes
    Redraw,
    /// A drag ended; re-render the scenes
    Dropped(DropOutcome),
}

impl EventResponse {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    fn from_changed(changed: bool) -> Self {
        if changed { Self::Redraw } else { Self::Ignored }
    }
}

impl Editor {
    /// Route one event to the active gesture (or start one).
    pub fn dispatch(&mut self, event: InputEvent) -> EventResponse {
        match event {
            InputEvent::PointerDown { position } => {
                EventResponse::from_changed(self.handle_pointer_down(position))
            }
            InputEvent::PointerMove { position } => {
                EventResponse::from_changed(self.handle_pointer_move(position))
            }
            InputEvent::PointerUp { position } => match self.handle_pointer_up(position) {
                Some(outcome) => EventResponse::Dropped(outcome),
                None => EventResponse::Ignored,
            },
            InputEvent::Wheel { position, delta_y } => {
                EventResponse::from_changed(self.handle_wheel(position, delta_y))
            }
            InputEvent::DoubleClick { position } => {
                EventResponse::from_changed(self.handle_double_click(position))
            }
        }
    }
}
