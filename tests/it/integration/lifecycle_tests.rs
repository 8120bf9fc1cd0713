//! Region layout, disconnection, bulk load and reset.

use crate::helpers::{TestEditorBuilder, drag, point_strings, polygon, shape_ids, work_bounds};
use std::sync::Arc;
use zoneboard::input::CancelReason;
use zoneboard::storage::MemoryStore;
use zoneboard::{DropOutcome, EditorError, EventResponse, InputEvent, RegionKind, point};

const TRIANGLE: &str = "100,100 200,100 150,200";

#[test]
fn test_disconnect_during_drag_cancels() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();
    let id = shape_ids(&editor, RegionKind::Buffer)[0];

    editor.dispatch(InputEvent::PointerDown {
        position: point(75.0, 65.0),
    });
    editor.dispatch(InputEvent::PointerMove {
        position: point(500.0, 750.0),
    });
    let outcome = editor.disconnect_region(RegionKind::Work);
    assert!(outcome.as_ref().is_some_and(DropOutcome::is_cancelled));

    assert_eq!(
        outcome,
        Some(DropOutcome::Cancelled {
            region: RegionKind::Buffer,
            shape: id,
            reason: CancelReason::Aborted,
        })
    );
    assert!(!editor.region(RegionKind::Work).is_connected());
    assert!(!editor.region(RegionKind::Work).is_highlighted());
    assert_eq!(point_strings(&editor, RegionKind::Buffer), vec![TRIANGLE]);

    let released = editor.dispatch(InputEvent::PointerUp {
        position: point(500.0, 750.0),
    });
    assert_eq!(released, EventResponse::Ignored);
}

#[test]
fn test_drop_with_target_unavailable_cancels() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();
    let id = shape_ids(&editor, RegionKind::Buffer)[0];

    editor.dispatch(InputEvent::PointerDown {
        position: point(75.0, 65.0),
    });
    editor.set_region_bounds(RegionKind::Work, None);
    let response = editor.dispatch(InputEvent::PointerUp {
        position: point(500.0, 750.0),
    });

    assert_eq!(
        response,
        EventResponse::Dropped(DropOutcome::Cancelled {
            region: RegionKind::Buffer,
            shape: id,
            reason: CancelReason::RegionUnavailable(RegionKind::Work),
        })
    );
    assert_eq!(point_strings(&editor, RegionKind::Buffer), vec![TRIANGLE]);
    assert!(editor.region(RegionKind::Work).store().is_empty());
}

#[test]
fn test_reconnected_region_accepts_drops() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();
    editor.disconnect_region(RegionKind::Work);
    editor.set_region_bounds(RegionKind::Work, Some(work_bounds()));

    let response = drag(&mut editor, point(75.0, 65.0), point(500.0, 750.0));

    assert!(matches!(
        response,
        EventResponse::Dropped(DropOutcome::Transferred { .. })
    ));
}

#[test]
fn test_unlaid_editor_ignores_pointer() {
    let mut editor = TestEditorBuilder::new()
        .with_buffer_shape(TRIANGLE)
        .without_layout()
        .build();

    let response = editor.dispatch(InputEvent::PointerDown {
        position: point(75.0, 65.0),
    });

    assert_eq!(response, EventResponse::Ignored);
    assert!(matches!(
        editor.region(RegionKind::Buffer).screen_to_world(point(0.0, 0.0)),
        Err(EditorError::RegionUnavailable(RegionKind::Buffer))
    ));
}

#[test]
fn test_load_shapes_skips_malformed_and_duplicates() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();

    let kept = editor.load_shapes(
        RegionKind::Buffer,
        [
            "0,0 10,0 0,10",
            "0,0 10,0",
            "1,1 abc 3,3",
            "0,0 10,0 0,10",
            "50,50 60,50 55,60",
        ],
    );

    assert_eq!(kept, 2);
    assert_eq!(
        point_strings(&editor, RegionKind::Buffer),
        vec!["0,0 10,0 0,10", "50,50 60,50 55,60"]
    );
    assert_eq!(editor.region(RegionKind::Buffer).store().hit_region_count(), 2);
}

#[test]
fn test_clear_region_ends_drag_in_it() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();

    editor.dispatch(InputEvent::PointerDown {
        position: point(75.0, 65.0),
    });
    editor.clear_region(RegionKind::Buffer);

    assert!(editor.input_state().is_idle());
    assert!(editor.region(RegionKind::Buffer).store().is_empty());
    assert_eq!(
        editor.dispatch(InputEvent::PointerUp {
            position: point(75.0, 65.0)
        }),
        EventResponse::Ignored
    );
}

#[test]
fn test_transfer_to_other_directly() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape("0,0 30,0 0,30").build();
    let id = shape_ids(&editor, RegionKind::Buffer)[0];

    let moved = editor
        .transfer_to_other(RegionKind::Buffer, id, point(100.0, 100.0))
        .unwrap();

    assert_eq!(
        editor.region(RegionKind::Work).store().get(moved),
        Some(&polygon("90,90 120,90 90,120"))
    );
    assert!(matches!(
        editor.transfer_to_other(RegionKind::Buffer, id, point(0.0, 0.0)),
        Err(EditorError::ShapeNotFound { .. })
    ));
}

#[test]
fn test_reset_clears_everything() {
    let store = Arc::new(MemoryStore::new());
    let mut editor = TestEditorBuilder::new()
        .with_storage(store.clone())
        .with_buffer_shape(TRIANGLE)
        .with_work_shape(TRIANGLE)
        .with_work_transform(2.5, point(30.0, 40.0))
        .build();
    editor.save().unwrap();
    assert!(!store.snapshot().is_empty());

    editor.reset().unwrap();

    assert!(editor.region(RegionKind::Buffer).store().is_empty());
    assert!(editor.region(RegionKind::Work).store().is_empty());
    assert!(editor.work_transform().is_identity());
    assert!(store.snapshot().is_empty());
}
