//! Persisted editor state: shape lists and the work-zone view transform.
//!
//! Shape lists are JSON arrays of point-strings. The transform is three numeric
//! strings. Loads tolerate first runs and corrupted values.

use super::KeyValueStore;
use crate::constants::{DEFAULT_SCALE, WORK_PAN_X_KEY, WORK_PAN_Y_KEY, WORK_SCALE_KEY};
use crate::error::StorageResult;
use crate::geometry::point;
use crate::input::ViewTransform;
use crate::shape::Polygon;
use tracing::warn;

/// Read a shape list. Missing key, malformed JSON, and malformed entries all
/// degrade to fewer (or no) shapes.
pub fn load_shapes(store: &dyn KeyValueStore, key: &str) -> Vec<Polygon> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, "Failed to read saved shapes: {}", e);
            return Vec::new();
        }
    };

    let entries: Vec<String> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(key, "Ignoring malformed saved shapes: {}", e);
            return Vec::new();
        }
    };

    parse_shapes(entries.iter().map(String::as_str))
}

/// Parse point-strings, skipping (and logging) the ones that fail.
pub fn parse_shapes<'a, I>(entries: I) -> Vec<Polygon>
where
    I: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .filter_map(|entry| match Polygon::parse(entry) {
            Ok(polygon) => Some(polygon),
            Err(e) => {
                warn!(entry, "Skipping malformed shape: {}", e);
                None
            }
        })
        .collect()
}

/// Write a shape list as a JSON array of point-strings.
pub fn save_shapes<'a, I>(store: &dyn KeyValueStore, key: &str, shapes: I) -> StorageResult<()>
where
    I: IntoIterator<Item = &'a Polygon>,
{
    let encoded: Vec<String> = shapes.into_iter().map(Polygon::to_point_string).collect();
    store.set(key, &serde_json::to_string(&encoded)?)
}

/// Read the work-zone transform; anything unusable falls back to identity values.
pub fn load_transform(store: &dyn KeyValueStore) -> ViewTransform {
    let scale = read_number(store, WORK_SCALE_KEY).unwrap_or(DEFAULT_SCALE);
    let pan_x = read_number(store, WORK_PAN_X_KEY).unwrap_or(0.0);
    let pan_y = read_number(store, WORK_PAN_Y_KEY).unwrap_or(0.0);
    ViewTransform::restored(scale, point(pan_x, pan_y))
}

pub fn save_transform(store: &dyn KeyValueStore, transform: &ViewTransform) -> StorageResult<()> {
    store.set(WORK_SCALE_KEY, &transform.scale().to_string())?;
    store.set(WORK_PAN_X_KEY, &transform.pan().x.to_string())?;
    store.set(WORK_PAN_Y_KEY, &transform.pan().y.to_string())
}

fn read_number(store: &dyn KeyValueStore, key: &str) -> Option<f64> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(key, "Failed to read saved value: {}", e);
            return None;
        }
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!(key, value = %raw, "Ignoring non-numeric saved value");
            None
        }
    }
}
