use crate::constants::DRAG_OPACITY;
use crate::geometry::ViewBox;
use crate::input::{DragSession, ViewTransform};
use crate::region::{Region, RegionKind};
use crate::shape::{Polygon, ShapeId};
use serde::Serialize;

/// One shape as displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedShape {
    pub id: ShapeId,
    pub points: Polygon,
    pub opacity: f64,
    /// Being dragged: `points` is the working copy, not the stored one
    pub dragging: bool,
}

/// Everything needed to draw a region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionScene {
    pub kind: RegionKind,
    pub view_box: ViewBox,
    pub transform: ViewTransform,
    pub highlighted: bool,
    /// Bottom to top
    pub shapes: Vec<RenderedShape>,
}

impl RegionScene {
    pub fn build(region: &Region, drag: Option<&DragSession>) -> Self {
        let kind = region.kind();
        let shapes = region
            .store()
            .list()
            .map(|(id, polygon)| match drag {
                Some(drag) if drag.targets(kind, id) => RenderedShape {
                    id,
                    points: drag.working.clone(),
                    opacity: DRAG_OPACITY,
                    dragging: true,
                },
                _ => RenderedShape {
                    id,
                    points: polygon.clone(),
                    opacity: 1.0,
                    dragging: false,
                },
            })
            .collect();

        Self {
            kind,
            view_box: region.view_box(),
            transform: *region.transform(),
            highlighted: region.is_highlighted(),
            shapes,
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&RenderedShape> {
        self.shapes.iter().find(|s| s.id == id)
    }
}
