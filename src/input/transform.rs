//! Region view transform - zoom scale and pan offset, viewport <-> world conversion.

use crate::constants::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, ZOOM_STEP};
use crate::editor::Editor;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Zoom and pan state of a region.
///
/// `world = viewport / scale - pan` and `viewport = (world + pan) * scale`.
/// The scale always lies in `[MIN_SCALE, MAX_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    scale: f64,
    pan: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    pub const fn identity() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            pan: Point::ZERO,
        }
    }

    /// Build from persisted values. A non-finite or non-positive scale falls back to
    /// the default, an in-range violation is clamped, a non-finite pan becomes zero.
    pub fn restored(scale: f64, pan: Point) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            DEFAULT_SCALE
        };
        let pan = Point::new(
            if pan.x.is_finite() { pan.x } else { 0.0 },
            if pan.y.is_finite() { pan.y } else { 0.0 },
        );
        Self { scale, pan }
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn is_identity(&self) -> bool {
        self.scale == DEFAULT_SCALE && self.pan == Point::ZERO
    }

    /// Convert a viewport position to world space.
    #[inline]
    pub fn to_world(&self, viewport_pos: Point) -> Point {
        viewport_pos / self.scale - self.pan
    }

    /// Convert a world position to viewport space.
    #[inline]
    pub fn to_viewport(&self, world_pos: Point) -> Point {
        (world_pos + self.pan) * self.scale
    }

    /// One wheel step anchored at `anchor` (viewport space).
    ///
    /// A positive `wheel_delta` zooms out, a negative one zooms in; zero is ignored.
    /// The world point under `anchor` stays under it. Returns true if the scale changed.
    pub fn apply_zoom(&mut self, anchor: Point, wheel_delta: f64) -> bool {
        if wheel_delta == 0.0 || !wheel_delta.is_finite() {
            return false;
        }
        let step = if wheel_delta > 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
        let new_scale = quantize(self.scale + step).clamp(MIN_SCALE, MAX_SCALE);
        if new_scale == self.scale {
            return false;
        }

        let world_before = self.to_world(anchor);
        self.pan = anchor / new_scale - world_before;
        self.scale = new_scale;
        true
    }

    /// Pan by a viewport-space delta. The delta is divided by the scale so the
    /// content follows the pointer at every zoom level.
    pub fn apply_pan(&mut self, delta: Point) {
        self.pan += delta / self.scale;
    }

    /// The value of an SVG `transform` attribute rendering this view.
    pub fn to_svg_attr(&self) -> String {
        format!(
            "scale({}) translate({}, {})",
            self.scale, self.pan.x, self.pan.y
        )
    }
}

impl Editor {
    /// Wheel zoom over a navigable region. Ignored while a gesture is live.
    pub fn handle_wheel(&mut self, screen_pos: Point, delta_y: f64) -> bool {
        if !self.input_state().is_idle() {
            return false;
        }
        let Some(kind) = self.region_at(screen_pos).filter(|k| k.is_navigable()) else {
            return false;
        };

        match self.region_mut(kind).zoom_at(screen_pos, delta_y) {
            Ok(true) => {
                debug!(scale = self.work_transform().scale(), "Zoomed");
                self.persist_transform();
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!(region = %kind, "Zoom skipped: {}", e);
                false
            }
        }
    }
}

/// Round to the nearest tenth.
fn quantize(scale: f64) -> f64 {
    (scale * 10.0).round() / 10.0
}
