//! Zoneboard - a two-region polygon editor engine.
//!
//! Shapes live in a buffer zone and a pan/zoom work zone and move between them by
//! drag-and-drop. The host feeds pointer events to [`Editor::dispatch`] and redraws
//! from [`Editor::scene`]; all state survives restarts through a [`storage`] backend.

pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod perf;
pub mod region;
pub mod render;
pub mod shape;
mod spatial_index;
pub mod storage;
pub mod transfer;

pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{EditorError, EditorResult, ShapeError, StorageError};
pub use geometry::{Point, Rect, ViewBox, point};
pub use input::{DropOutcome, EventResponse, InputEvent};
pub use region::RegionKind;
pub use shape::{Polygon, ShapeId};
