//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing of polygon bounding boxes for hit
//! testing within a region. Candidates returned here still need an exact
//! point-in-polygon check.

use crate::shape::{Polygon, ShapeId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a shape's bounding box in world space.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub shape_id: ShapeId,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(shape_id: ShapeId, polygon: &Polygon) -> Self {
        let (min, max) = polygon.bounds();
        Self {
            shape_id,
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.shape_id == other.shape_id
    }
}

/// R-tree of shape bounding boxes, keyed by shape id.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ShapeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or move the hit region of a shape.
    pub fn insert(&mut self, shape_id: ShapeId, polygon: &Polygon) {
        self.remove(shape_id);
        let entry = SpatialEntry::new(shape_id, polygon);
        self.tree.insert(entry);
        self.entries.insert(shape_id, entry);
    }

    pub fn remove(&mut self, shape_id: ShapeId) -> bool {
        if let Some(entry) = self.entries.remove(&shape_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Shapes whose bounding box contains the point (world coordinates).
    pub fn query_point(&self, x: f64, y: f64) -> Vec<ShapeId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.shape_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
