//! Moving and copying shapes between region stores.
//!
//! Both stores are passed in explicitly; nothing here looks regions up. The add
//! to the destination is authoritative: the source only loses the shape after the
//! destination accepted it, so a rejected add leaves both stores untouched.

use crate::error::{EditorError, EditorResult};
use crate::geometry::Point;
use crate::region::RegionStore;
use crate::shape::{Polygon, ShapeId};
use tracing::info;

pub struct TransferCoordinator;

impl TransferCoordinator {
    /// Move the committed points of `id` so their centroid lands on `drop_world`
    /// (destination world space).
    pub fn transfer(
        source: &mut RegionStore,
        dest: &mut RegionStore,
        id: ShapeId,
        drop_world: Point,
    ) -> EditorResult<ShapeId> {
        let polygon = Self::committed(source, id)?.clone();
        Self::transfer_polygon(source, dest, id, &polygon, drop_world)
    }

    /// Like `transfer`, but with `geometry` (e.g. a drag's working copy) standing in
    /// for the committed points.
    pub fn transfer_polygon(
        source: &mut RegionStore,
        dest: &mut RegionStore,
        id: ShapeId,
        geometry: &Polygon,
        drop_world: Point,
    ) -> EditorResult<ShapeId> {
        Self::committed(source, id)?;

        let placed = geometry.recentered_at(drop_world);
        let new_id = dest
            .add(placed)
            .ok_or(EditorError::DuplicateShape(dest.kind()))?;
        source.remove(id);

        info!(
            from = %source.kind(),
            to = %dest.kind(),
            shape = %id,
            new_shape = %new_id,
            "Transferred shape"
        );
        Ok(new_id)
    }

    /// Duplicate the committed points of `id` into `dest`, coordinates unchanged.
    /// The source keeps its shape.
    pub fn copy(source: &RegionStore, dest: &mut RegionStore, id: ShapeId) -> EditorResult<ShapeId> {
        let polygon = Self::committed(source, id)?.clone();
        dest.add(polygon)
            .ok_or(EditorError::DuplicateShape(dest.kind()))
    }

    fn committed(store: &RegionStore, id: ShapeId) -> EditorResult<&Polygon> {
        store.get(id).ok_or(EditorError::ShapeNotFound {
            region: store.kind(),
            id,
        })
    }
}
