//! Engine-wide constants.
//!
//! Centralizes zoom limits, viewport extents and storage keys so the
//! input handlers and persistence code agree on them.

use crate::geometry::ViewBox;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum work-zone scale
pub const MIN_SCALE: f64 = 0.1;

/// Maximum work-zone scale
pub const MAX_SCALE: f64 = 5.0;

/// Default scale (also the buffer zone's fixed scale)
pub const DEFAULT_SCALE: f64 = 1.0;

/// Scale change per wheel notch
pub const ZOOM_STEP: f64 = 0.1;

// ============================================================================
// Viewports
// ============================================================================

/// Logical drawing surface of the buffer zone
pub const BUFFER_VIEW_BOX: ViewBox = ViewBox::new(0.0, 0.0, 1000.0, 1000.0);

/// Logical drawing surface of the work zone
pub const WORK_VIEW_BOX: ViewBox = ViewBox::new(0.0, 0.0, 1000.0, 300.0);

// ============================================================================
// Shapes
// ============================================================================

/// A polygon needs at least this many vertices
pub const MIN_POLYGON_POINTS: usize = 3;

/// Opacity of a shape while it is being dragged
pub const DRAG_OPACITY: f64 = 0.7;

/// Tolerance used when comparing recomputed coordinates
pub const EPSILON: f64 = 1e-9;

// ============================================================================
// Persistence keys
// ============================================================================

/// Buffer zone shapes (JSON array of point-strings)
pub const BUFFER_SHAPES_KEY: &str = "polygons";

/// Work zone shapes (JSON array of point-strings)
pub const WORK_SHAPES_KEY: &str = "workZonePolygons";

/// Work zone scale (numeric string)
pub const WORK_SCALE_KEY: &str = "workZoneScale";

/// Work zone horizontal pan (numeric string)
pub const WORK_PAN_X_KEY: &str = "workZonePanX";

/// Work zone vertical pan (numeric string)
pub const WORK_PAN_Y_KEY: &str = "workZonePanY";

// ============================================================================
// Colors
// ============================================================================

/// Buffer zone polygon fill
pub const BUFFER_FILL: &str = "#ff0000";

/// Work zone polygon fill
pub const WORK_FILL: &str = "rgba(255, 0, 0, 0.7)";

/// Polygon outline
pub const SHAPE_STROKE: &str = "#ff0000";
