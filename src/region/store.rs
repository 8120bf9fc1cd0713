//! Ordered shape collection of one region.
//!
//! Render order is insertion order. Every mutation keeps the hit-testing index in
//! step with the shape map and writes the list to the persistence store.

use super::RegionKind;
use crate::error::{EditorError, EditorResult};
use crate::geometry::Point;
use crate::shape::{Polygon, ShapeId};
use crate::spatial_index::SpatialIndex;
use crate::storage::{SharedStore, load_shapes, save_shapes};
use std::collections::HashMap;
use tracing::{debug, warn};

pub struct RegionStore {
    kind: RegionKind,
    order: Vec<ShapeId>,
    shapes: HashMap<ShapeId, Polygon>,
    index: SpatialIndex,
    next_id: u64,
    persistence: Option<SharedStore>,
}

impl RegionStore {
    /// A store that keeps its contents in memory only.
    pub fn new(kind: RegionKind) -> Self {
        Self {
            kind,
            order: Vec::new(),
            shapes: HashMap::new(),
            index: SpatialIndex::new(),
            next_id: 0,
            persistence: None,
        }
    }

    /// A store backed by `storage`, pre-filled with whatever was saved under the
    /// region's key.
    pub fn restore(kind: RegionKind, storage: SharedStore) -> Self {
        let mut store = Self::new(kind);
        for polygon in load_shapes(storage.as_ref(), kind.shapes_key()) {
            store.insert(polygon);
        }
        store.persistence = Some(storage);
        debug!(region = %kind, count = store.len(), "Restored shapes");
        store
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    /// Append `polygon` unless identical points are already present.
    ///
    /// Returns the new id, or `None` for a duplicate (nothing changes).
    pub fn add(&mut self, polygon: Polygon) -> Option<ShapeId> {
        let id = self.insert(polygon)?;
        self.persist();
        Some(id)
    }

    /// Remove a shape and its hit region. Persists even if the id was unknown.
    pub fn remove(&mut self, id: ShapeId) -> Option<Polygon> {
        let removed = self.shapes.remove(&id);
        if removed.is_some() {
            self.order.retain(|other| *other != id);
            self.index.remove(id);
        }
        self.persist();
        removed
    }

    /// Swap in new points for an existing shape, keeping its render position.
    ///
    /// Fails if another shape already has these points.
    pub fn replace(&mut self, id: ShapeId, polygon: Polygon) -> EditorResult<()> {
        if self.find(&polygon).is_some_and(|other| other != id) {
            return Err(EditorError::DuplicateShape(self.kind));
        }
        let slot = self.shapes.get_mut(&id).ok_or(EditorError::ShapeNotFound {
            region: self.kind,
            id,
        })?;
        self.index.insert(id, &polygon);
        *slot = polygon;
        self.persist();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.shapes.clear();
        self.index.clear();
        self.persist();
    }

    /// Replace the whole contents at once (duplicates collapse), persisting once.
    pub fn replace_all<I>(&mut self, polygons: I)
    where
        I: IntoIterator<Item = Polygon>,
    {
        self.order.clear();
        self.shapes.clear();
        self.index.clear();
        for polygon in polygons {
            self.insert(polygon);
        }
        self.persist();
    }

    /// Shapes in render order.
    pub fn list(&self) -> impl Iterator<Item = (ShapeId, &Polygon)> + '_ {
        self.order.iter().map(|id| (*id, &self.shapes[id]))
    }

    /// Point-strings in render order, the persisted form.
    pub fn point_strings(&self) -> Vec<String> {
        self.list().map(|(_, p)| p.to_point_string()).collect()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Polygon> {
        self.shapes.get(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Id of the shape with exactly these points, if present.
    pub fn find(&self, polygon: &Polygon) -> Option<ShapeId> {
        let key = polygon.to_point_string();
        self.list()
            .find(|(_, existing)| existing.to_point_string() == key)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of live hit regions; always equals `len()`.
    pub fn hit_region_count(&self) -> usize {
        self.index.len()
    }

    /// Topmost shape containing `world_pos`.
    pub fn hit_test(&self, world_pos: Point) -> Option<ShapeId> {
        let candidates = self.index.query_point(world_pos.x, world_pos.y);
        if candidates.is_empty() {
            return None;
        }
        self.order
            .iter()
            .rev()
            .find(|id| candidates.contains(*id) && self.shapes[*id].contains(world_pos))
            .copied()
    }

    /// Write the current list to storage, if backed. Failures are logged.
    pub fn persist(&self) {
        let Some(storage) = &self.persistence else {
            return;
        };
        if let Err(e) = save_shapes(
            storage.as_ref(),
            self.kind.shapes_key(),
            self.order.iter().map(|id| &self.shapes[id]),
        ) {
            warn!(region = %self.kind, "Failed to save shapes: {}", e);
        }
    }

    fn insert(&mut self, polygon: Polygon) -> Option<ShapeId> {
        if self.find(&polygon).is_some() {
            debug!(region = %self.kind, "Ignoring duplicate shape");
            return None;
        }
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.index.insert(id, &polygon);
        self.shapes.insert(id, polygon);
        self.order.push(id);
        Some(id)
    }
}
