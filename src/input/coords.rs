//! Screen-to-viewport coordinate conversion.
//!
//! Maps device pixels onto a region's logical drawing surface given the surface's
//! on-screen bounding rectangle and its declared `ViewBox`. Pan/zoom is applied on
//! top of this by `ViewTransform`.

use crate::geometry::{Point, Rect, ViewBox, point};

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateContext {
    pub bounds: Rect,
    pub view_box: ViewBox,
}

impl CoordinateContext {
    /// Returns `None` when `bounds` cannot back a mapping (zero or non-finite size).
    #[inline]
    pub fn new(bounds: Rect, view_box: ViewBox) -> Option<Self> {
        if bounds.is_degenerate() {
            return None;
        }
        Some(Self { bounds, view_box })
    }

    /// Viewport units per screen pixel along each axis
    #[inline]
    pub fn scale(&self) -> Point {
        point(
            self.view_box.width / self.bounds.width,
            self.view_box.height / self.bounds.height,
        )
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to viewport position
    #[inline]
    pub fn screen_to_viewport(screen_pos: Point, ctx: &CoordinateContext) -> Point {
        let scale = ctx.scale();
        point(
            (screen_pos.x - ctx.bounds.left) * scale.x + ctx.view_box.x,
            (screen_pos.y - ctx.bounds.top) * scale.y + ctx.view_box.y,
        )
    }

    /// Convert viewport position to screen position
    #[inline]
    pub fn viewport_to_screen(viewport_pos: Point, ctx: &CoordinateContext) -> Point {
        let scale = ctx.scale();
        point(
            (viewport_pos.x - ctx.view_box.x) / scale.x + ctx.bounds.left,
            (viewport_pos.y - ctx.view_box.y) / scale.y + ctx.bounds.top,
        )
    }

    /// Convert a delta from screen to viewport (for pan operations)
    #[inline]
    pub fn delta_screen_to_viewport(delta: Point, ctx: &CoordinateContext) -> Point {
        let scale = ctx.scale();
        point(delta.x * scale.x, delta.y * scale.y)
    }
}
