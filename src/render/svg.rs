//! SVG markup for a region scene.

use super::scene::RegionScene;
use crate::constants::{BUFFER_FILL, SHAPE_STROKE, WORK_FILL};
use crate::region::RegionKind;
use std::fmt::Write as _;

impl RegionScene {
    pub fn to_svg(&self) -> String {
        let fill = match self.kind {
            RegionKind::Buffer => BUFFER_FILL,
            RegionKind::Work => WORK_FILL,
        };

        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" data-region="{}""#,
            self.view_box.to_attr(),
            self.kind
        );
        if self.highlighted {
            out.push_str(r#" class="highlight""#);
        }
        out.push('>');

        let _ = write!(out, r#"<g transform="{}">"#, self.transform.to_svg_attr());
        for shape in &self.shapes {
            let _ = write!(
                out,
                r#"<polygon data-id="{}" points="{}" fill="{}" stroke="{}""#,
                shape.id, shape.points, fill, SHAPE_STROKE
            );
            if shape.opacity < 1.0 {
                let _ = write!(out, r#" opacity="{}""#, shape.opacity);
            }
            out.push_str("/>");
        }
        out.push_str("</g></svg>");
        out
    }
}
