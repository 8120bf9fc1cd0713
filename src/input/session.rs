//! Drag sessions and drop outcomes.

use crate::error::EditorError;
use crate::geometry::Point;
use crate::region::RegionKind;
use crate::shape::{Polygon, ShapeId};
use std::fmt;
use uuid::Uuid;

/// Identity of one pointer gesture. Events are only applied to the session
/// they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An in-progress shape drag.
///
/// `working` is the displayed copy that follows the pointer; the store keeps the
/// committed points until the drop resolves.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub id: SessionId,
    /// Region the shape is dragged out of
    pub region: RegionKind,
    pub shape: ShapeId,
    pub working: Polygon,
    /// Last pointer position in the source region's world space
    pub last_world: Point,
}

impl DragSession {
    pub fn begin(region: RegionKind, shape: ShapeId, committed: Polygon, start_world: Point) -> Self {
        Self {
            id: SessionId::new(),
            region,
            shape,
            working: committed,
            last_world: start_world,
        }
    }

    /// Move the working copy with the pointer. Returns the applied delta.
    pub fn drag_to(&mut self, world_pos: Point) -> Point {
        let delta = world_pos - self.last_world;
        self.working.translate(delta);
        self.last_world = world_pos;
        delta
    }

    /// True if this session drags `shape` out of `region`.
    pub fn targets(&self, region: RegionKind, shape: ShapeId) -> bool {
        self.region == region && self.shape == shape
    }
}

/// Why a drag ended without mutating any store
#[derive(Debug, Clone, PartialEq)]
pub enum CancelReason {
    /// A region needed to resolve the drop has no usable bounds
    RegionUnavailable(RegionKind),
    /// The dragged shape was removed while the drag was in flight
    ShapeRemoved,
    /// The destination already holds identical points
    Duplicate(RegionKind),
    /// Torn down by the host (cancel, disconnect, reset, reload)
    Aborted,
}

impl From<&EditorError> for CancelReason {
    fn from(error: &EditorError) -> Self {
        match error {
            EditorError::RegionUnavailable(kind) => Self::RegionUnavailable(*kind),
            EditorError::ShapeNotFound { .. } => Self::ShapeRemoved,
            EditorError::DuplicateShape(kind) => Self::Duplicate(*kind),
            EditorError::Shape(_) | EditorError::Storage(_) => Self::Aborted,
        }
    }
}

/// How a drag session was resolved
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// The shape stays in its region at the working copy's final position
    Committed { region: RegionKind, shape: ShapeId },
    /// The shape moved to `to` under a new id, centroid on the drop point
    Transferred {
        from: RegionKind,
        to: RegionKind,
        shape: ShapeId,
    },
    /// Nothing changed; the committed points stay in place
    Cancelled {
        region: RegionKind,
        shape: ShapeId,
        reason: CancelReason,
    },
}

impl DropOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
