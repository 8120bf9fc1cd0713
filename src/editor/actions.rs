//! Shape and region operations - add, delete, copy, bulk load, save, reset, layout.

use super::Editor;
use crate::constants::{
    BUFFER_SHAPES_KEY, WORK_PAN_X_KEY, WORK_PAN_Y_KEY, WORK_SCALE_KEY, WORK_SHAPES_KEY,
};
use crate::error::EditorResult;
use crate::geometry::{Point, Rect};
use crate::input::{CancelReason, DropOutcome, InteractionState, ViewTransform};
use crate::region::RegionKind;
use crate::shape::{Polygon, ShapeId};
use crate::storage::{parse_shapes, save_shapes, save_transform};
use crate::transfer::TransferCoordinator;
use tracing::{debug, info, warn};

impl Editor {
    /// Add a shape to a region. `None` if identical points are already there.
    pub fn add_shape(&mut self, kind: RegionKind, polygon: Polygon) -> Option<ShapeId> {
        self.region_mut(kind).store_mut().add(polygon)
    }

    /// Parse and add a point-string. Malformed input is logged and rejected.
    pub fn add_shape_str(&mut self, kind: RegionKind, points: &str) -> EditorResult<Option<ShapeId>> {
        let polygon = Polygon::parse(points).inspect_err(|e| {
            warn!(region = %kind, points, "Rejected malformed shape: {}", e);
        })?;
        Ok(self.add_shape(kind, polygon))
    }

    /// Delete a shape. A drag of that shape ends first, so no later pointer event
    /// can act on the removed id.
    pub fn remove_shape(&mut self, kind: RegionKind, id: ShapeId) -> Option<Polygon> {
        if self
            .input_state()
            .drag()
            .is_some_and(|drag| drag.targets(kind, id))
        {
            self.abort_interaction();
        }
        self.region_mut(kind).store_mut().remove(id)
    }

    /// Copy a shape into the opposing region with its coordinates unchanged.
    pub fn copy_to_other(&mut self, from: RegionKind, id: ShapeId) -> EditorResult<ShapeId> {
        let (source, dest) = self.regions_mut(from);
        let copied = TransferCoordinator::copy(source.store(), dest.store_mut(), id)?;
        debug!(from = %from, shape = %id, copy = %copied, "Copied shape");
        Ok(copied)
    }

    /// Move a shape into the opposing region, centroid on `drop_world`
    /// (destination world space).
    pub fn transfer_to_other(
        &mut self,
        from: RegionKind,
        id: ShapeId,
        drop_world: Point,
    ) -> EditorResult<ShapeId> {
        if self
            .input_state()
            .drag()
            .is_some_and(|drag| drag.targets(from, id))
        {
            self.abort_interaction();
        }
        let (source, dest) = self.regions_mut(from);
        TransferCoordinator::transfer(source.store_mut(), dest.store_mut(), id, drop_world)
    }

    /// Replace a region's contents with point-strings (e.g. freshly generated
    /// shapes). Malformed entries are skipped. Returns the number of shapes kept.
    pub fn load_shapes<'a, I>(&mut self, kind: RegionKind, entries: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.end_interaction_in(kind);
        let polygons = parse_shapes(entries);
        let store = self.region_mut(kind).store_mut();
        store.replace_all(polygons);
        store.len()
    }

    /// Empty one region.
    pub fn clear_region(&mut self, kind: RegionKind) {
        self.end_interaction_in(kind);
        self.region_mut(kind).store_mut().clear();
    }

    /// Write both regions and the work-zone view to storage, reporting failures.
    pub fn save(&self) -> EditorResult<()> {
        let Some(storage) = self.storage() else {
            return Ok(());
        };
        for kind in RegionKind::ALL {
            let store = self.region(kind).store();
            save_shapes(storage.as_ref(), kind.shapes_key(), store.list().map(|(_, p)| p))?;
        }
        save_transform(storage.as_ref(), self.work_transform())?;
        Ok(())
    }

    /// Drop all shapes in both regions, forget the saved state and reset the view.
    pub fn reset(&mut self) -> EditorResult<()> {
        self.abort_interaction();
        self.buffer.store_mut().clear();
        self.work.store_mut().clear();
        self.work.set_transform(ViewTransform::identity());

        if let Some(storage) = self.storage() {
            for key in [
                BUFFER_SHAPES_KEY,
                WORK_SHAPES_KEY,
                WORK_SCALE_KEY,
                WORK_PAN_X_KEY,
                WORK_PAN_Y_KEY,
            ] {
                storage.remove(key)?;
            }
        }
        info!("Editor reset");
        Ok(())
    }

    /// Lay out (or hide, with `None`) a region on screen.
    pub fn set_region_bounds(&mut self, kind: RegionKind, bounds: Option<Rect>) {
        self.region_mut(kind).set_bounds(bounds);
    }

    /// Detach a region from the screen. Any active gesture ends without changes.
    pub fn disconnect_region(&mut self, kind: RegionKind) -> Option<DropOutcome> {
        let outcome = self.abort_interaction();
        self.region_mut(kind).set_bounds(None);
        self.region_mut(kind).set_highlighted(false);
        debug!(region = %kind, "Region disconnected");
        outcome
    }

    /// End whatever gesture is active, discarding its working state.
    ///
    /// Returns the cancelled drop when a shape drag was in flight.
    pub fn abort_interaction(&mut self) -> Option<DropOutcome> {
        if self.input_state().is_dragging() {
            return self.cancel_drag(CancelReason::Aborted);
        }
        if self.input_state_mut().take().is_panning() {
            self.persist_transform();
        }
        None
    }

    fn end_interaction_in(&mut self, kind: RegionKind) {
        let touches = match self.input_state() {
            InteractionState::Dragging(drag) => drag.region == kind,
            InteractionState::Panning { .. } => kind == RegionKind::Work,
            InteractionState::Idle => false,
        };
        if touches {
            self.abort_interaction();
        }
    }
}
