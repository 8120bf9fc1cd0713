//! Rendering model for the two regions.
//!
//! Scenes are derived from the region store plus the active drag every time they
//! are requested, so what is drawn can't drift from what is stored.

mod scene;
mod svg;

pub use scene::{RegionScene, RenderedShape};
