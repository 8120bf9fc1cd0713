//! Regions - the buffer and work zones.
//!
//! A region couples a `RegionStore` with the mapping from screen pixels to its
//! world space: on-screen bounds (set by the host layout), the declared `ViewBox`,
//! and a `ViewTransform`. The buffer region's transform is pinned to identity.
//!
//! A region without bounds is "disconnected": it can't be hit, mapped into, or
//! dropped on.

mod store;

pub use store::RegionStore;

use crate::constants::{BUFFER_SHAPES_KEY, WORK_SHAPES_KEY};
use crate::error::{EditorError, EditorResult};
use crate::geometry::{Point, Rect, ViewBox};
use crate::input::ViewTransform;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Buffer,
    Work,
}

impl RegionKind {
    pub const ALL: [RegionKind; 2] = [RegionKind::Buffer, RegionKind::Work];

    /// The opposing region
    pub fn other(self) -> Self {
        match self {
            Self::Buffer => Self::Work,
            Self::Work => Self::Buffer,
        }
    }

    /// Whether the user can zoom and pan this region
    pub fn is_navigable(self) -> bool {
        matches!(self, Self::Work)
    }

    /// Storage key of this region's shape list
    pub fn shapes_key(self) -> &'static str {
        match self {
            Self::Buffer => BUFFER_SHAPES_KEY,
            Self::Work => WORK_SHAPES_KEY,
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Buffer => "buffer",
            Self::Work => "work",
        })
    }
}

pub struct Region {
    kind: RegionKind,
    store: RegionStore,
    transform: ViewTransform,
    view_box: ViewBox,
    bounds: Option<Rect>,
    highlighted: bool,
}

impl Region {
    pub fn new(store: RegionStore, view_box: ViewBox) -> Self {
        Self {
            kind: store.kind(),
            store,
            transform: ViewTransform::identity(),
            view_box,
            bounds: None,
            highlighted: false,
        }
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RegionStore {
        &mut self.store
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Install a transform. Ignored for regions that can't be navigated.
    pub fn set_transform(&mut self, transform: ViewTransform) {
        if self.kind.is_navigable() {
            self.transform = transform;
        }
    }

    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    pub fn is_connected(&self) -> bool {
        self.coordinate_context().is_ok()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn coordinate_context(&self) -> EditorResult<CoordinateContext> {
        self.bounds
            .and_then(|bounds| CoordinateContext::new(bounds, self.view_box))
            .ok_or(EditorError::RegionUnavailable(self.kind))
    }

    /// Inclusive screen-bounds test; false while disconnected.
    pub fn contains_screen(&self, screen_pos: Point) -> bool {
        self.bounds.is_some_and(|bounds| bounds.contains(screen_pos))
    }

    pub fn screen_to_viewport(&self, screen_pos: Point) -> EditorResult<Point> {
        let ctx = self.coordinate_context()?;
        Ok(CoordinateConverter::screen_to_viewport(screen_pos, &ctx))
    }

    /// Screen pixels to this region's world space (view box, then pan/zoom).
    pub fn screen_to_world(&self, screen_pos: Point) -> EditorResult<Point> {
        Ok(self.transform.to_world(self.screen_to_viewport(screen_pos)?))
    }

    pub fn world_to_screen(&self, world_pos: Point) -> EditorResult<Point> {
        let ctx = self.coordinate_context()?;
        Ok(CoordinateConverter::viewport_to_screen(
            self.transform.to_viewport(world_pos),
            &ctx,
        ))
    }

    /// Wheel zoom anchored at the pointer. Returns true if the view changed.
    pub fn zoom_at(&mut self, screen_pos: Point, wheel_delta: f64) -> EditorResult<bool> {
        if !self.kind.is_navigable() {
            return Ok(false);
        }
        let anchor = self.screen_to_viewport(screen_pos)?;
        Ok(self.transform.apply_zoom(anchor, wheel_delta))
    }

    /// Pan by a screen-space pointer delta.
    pub fn pan_by(&mut self, screen_delta: Point) -> EditorResult<bool> {
        if !self.kind.is_navigable() {
            return Ok(false);
        }
        let ctx = self.coordinate_context()?;
        let delta = CoordinateConverter::delta_screen_to_viewport(screen_delta, &ctx);
        self.transform.apply_pan(delta);
        Ok(delta != Point::ZERO)
    }
}
