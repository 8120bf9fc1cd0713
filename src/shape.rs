//! Polygon shapes and their point-string wire format.
//!
//! A polygon is stored and persisted as a single string of space-separated
//! `"<x>,<y>"` tokens. Identity inside the engine is a `ShapeId` handed out by the
//! owning `RegionStore`; the point-string only serves as the storage format and as
//! the duplicate-detection key.

use crate::constants::MIN_POLYGON_POINTS;
use crate::error::{ShapeError, ShapeResult};
use crate::geometry::{Point, point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a shape within one region's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A simple polygon with at least three vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from vertices, rejecting degenerate or non-finite input.
    pub fn new(points: Vec<Point>) -> ShapeResult<Self> {
        if points.len() < MIN_POLYGON_POINTS {
            return Err(ShapeError::TooFewPoints {
                got: points.len(),
                min: MIN_POLYGON_POINTS,
            });
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(ShapeError::InvalidNumber(format!("{},{}", bad.x, bad.y)));
        }
        Ok(Self { points })
    }

    /// Parse the point-string format: `"x1,y1 x2,y2 x3,y3"`.
    pub fn parse(s: &str) -> ShapeResult<Self> {
        let points = s
            .split_whitespace()
            .map(parse_token)
            .collect::<ShapeResult<Vec<_>>>()?;
        Self::new(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Serialize to the point-string format. Round-trips exactly through `parse`.
    pub fn to_point_string(&self) -> String {
        self.to_string()
    }

    /// Arithmetic mean of the vertices, `None` for an empty vertex list.
    pub fn centroid(&self) -> Option<Point> {
        centroid_of(&self.points)
    }

    /// Shift every vertex by `delta`.
    pub fn translate(&mut self, delta: Point) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    pub fn translated(&self, delta: Point) -> Self {
        let mut moved = self.clone();
        moved.translate(delta);
        moved
    }

    /// Copy of this polygon shifted so its centroid lands on `target`.
    ///
    /// Without a centroid the shape is returned unmoved.
    pub fn recentered_at(&self, target: Point) -> Self {
        match self.centroid() {
            Some(centroid) => self.translated(target - centroid),
            None => self.clone(),
        }
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    pub fn bounds(&self) -> (Point, Point) {
        let mut min = point(f64::INFINITY, f64::INFINITY);
        let mut max = point(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Even-odd point-in-polygon test.
    pub fn contains(&self, p: Point) -> bool {
        let mut inside = false;
        let n = self.points.len();
        let mut j = n.wrapping_sub(1);
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Mean of a vertex list, `None` when empty.
pub fn centroid_of(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}

fn parse_token(token: &str) -> ShapeResult<Point> {
    let mut parts = token.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ShapeError::MalformedToken(token.to_string()));
    };
    Ok(point(parse_coord(x)?, parse_coord(y)?))
}

fn parse_coord(raw: &str) -> ShapeResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ShapeError::InvalidNumber(raw.to_string()))
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", p.x, p.y)?;
        }
        Ok(())
    }
}

impl FromStr for Polygon {
    type Err = ShapeError;

    fn from_str(s: &str) -> ShapeResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Polygon {
    type Error = ShapeError;

    fn try_from(s: String) -> ShapeResult<Self> {
        Self::parse(&s)
    }
}

impl From<Polygon> for String {
    fn from(polygon: Polygon) -> String {
        polygon.to_point_string()
    }
}
