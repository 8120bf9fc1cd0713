//! Drag-and-drop workflow tests: commit, transfer, rejection, stale events.

use crate::helpers::{
    TestEditorBuilder, assert_near, centroid, drag, point_strings, polygon, screen_of, shape_ids,
};
use std::sync::Arc;
use zoneboard::input::CancelReason;
use zoneboard::storage::MemoryStore;
use zoneboard::{DropOutcome, Editor, EditorConfig, EventResponse, InputEvent, RegionKind, point};

const TRIANGLE: &str = "100,100 200,100 150,200";

#[test]
fn test_drag_within_buffer_commits_translation() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();
    let id = shape_ids(&editor, RegionKind::Buffer)[0];

    // Buffer maps 2 world units per pixel
    let response = drag(&mut editor, point(75.0, 65.0), point(125.0, 65.0));

    assert_eq!(
        response,
        EventResponse::Dropped(DropOutcome::Committed {
            region: RegionKind::Buffer,
            shape: id,
        })
    );
    assert_eq!(
        editor.region(RegionKind::Buffer).store().get(id),
        Some(&polygon("200,100 300,100 250,200"))
    );
    assert!(editor.input_state().is_idle());
}

#[test]
fn test_store_untouched_until_drop() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();
    let id = shape_ids(&editor, RegionKind::Buffer)[0];

    editor.dispatch(InputEvent::PointerDown {
        position: point(75.0, 65.0),
    });
    editor.dispatch(InputEvent::PointerMove {
        position: point(100.0, 90.0),
    });

    assert_eq!(point_strings(&editor, RegionKind::Buffer), vec![TRIANGLE]);
    let scene = editor.scene(RegionKind::Buffer);
    let shown = scene.shape(id).unwrap();
    assert!(shown.dragging);
    assert_eq!(shown.points, polygon("150,150 250,150 200,250"));
}

#[test]
fn test_transfer_buffer_to_work_recenters_on_drop_point() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();

    let response = drag(&mut editor, point(75.0, 65.0), point(500.0, 750.0));

    let EventResponse::Dropped(DropOutcome::Transferred { from, to, shape }) = response else {
        panic!("expected a transfer, got {response:?}");
    };
    assert_eq!((from, to), (RegionKind::Buffer, RegionKind::Work));
    assert!(editor.region(RegionKind::Buffer).store().is_empty());
    assert_eq!(editor.region(RegionKind::Work).store().len(), 1);
    assert_near(centroid(&editor, RegionKind::Work, shape), point(500.0, 150.0));
}

#[test]
fn test_transfer_into_zoomed_work_zone() {
    let mut editor = TestEditorBuilder::new()
        .with_buffer_shape(TRIANGLE)
        .with_work_transform(2.0, point(10.0, -5.0))
        .build();

    // viewport (400, 100) -> world (400/2 - 10, 100/2 + 5)
    let response = drag(&mut editor, point(75.0, 65.0), point(400.0, 700.0));

    let EventResponse::Dropped(DropOutcome::Transferred { shape, .. }) = response else {
        panic!("expected a transfer, got {response:?}");
    };
    let placed = centroid(&editor, RegionKind::Work, shape);
    assert_near(placed, point(190.0, 55.0));
    assert_near(
        screen_of(&editor, RegionKind::Work, placed),
        point(400.0, 700.0),
    );
}

#[test]
fn test_transfer_work_to_buffer() {
    let mut editor = TestEditorBuilder::new().with_work_shape(TRIANGLE).build();

    let response = drag(&mut editor, point(150.0, 730.0), point(250.0, 250.0));

    let EventResponse::Dropped(DropOutcome::Transferred { to, shape, .. }) = response else {
        panic!("expected a transfer, got {response:?}");
    };
    assert_eq!(to, RegionKind::Buffer);
    assert!(editor.region(RegionKind::Work).store().is_empty());
    assert_near(centroid(&editor, RegionKind::Buffer, shape), point(500.0, 500.0));
}

#[test]
fn test_duplicate_transfer_is_rejected() {
    // Centroid (10, 10); dropped at work world (500, 150) it would become the work shape
    let mut editor = TestEditorBuilder::new()
        .with_buffer_shape("0,0 30,0 0,30")
        .with_work_shape("490,140 520,140 490,170")
        .build();
    let id = shape_ids(&editor, RegionKind::Buffer)[0];

    let response = drag(&mut editor, point(2.5, 2.5), point(500.0, 750.0));

    assert!(response.needs_redraw());
    assert_eq!(
        response,
        EventResponse::Dropped(DropOutcome::Cancelled {
            region: RegionKind::Buffer,
            shape: id,
            reason: CancelReason::Duplicate(RegionKind::Work),
        })
    );
    assert_eq!(point_strings(&editor, RegionKind::Buffer), vec!["0,0 30,0 0,30"]);
    assert_eq!(editor.region(RegionKind::Work).store().len(), 1);
    assert!(!editor.region(RegionKind::Work).is_highlighted());
}

#[test]
fn test_commit_onto_identical_shape_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let mut editor = TestEditorBuilder::new()
        .with_storage(store.clone())
        .with_buffer_shape("0,0 40,0 0,40")
        .with_buffer_shape("100,0 140,0 100,40")
        .build();
    let id = shape_ids(&editor, RegionKind::Buffer)[0];

    // 50px is 100 world units: exactly onto the second shape
    let response = drag(&mut editor, point(5.0, 5.0), point(55.0, 5.0));

    assert_eq!(
        response,
        EventResponse::Dropped(DropOutcome::Cancelled {
            region: RegionKind::Buffer,
            shape: id,
            reason: CancelReason::Duplicate(RegionKind::Buffer),
        })
    );
    let expected = vec!["0,0 40,0 0,40", "100,0 140,0 100,40"];
    assert_eq!(point_strings(&editor, RegionKind::Buffer), expected);

    let restarted = Editor::with_storage(&EditorConfig::default(), store);
    assert_eq!(point_strings(&restarted, RegionKind::Buffer), expected);
}

#[test]
fn test_drop_outside_both_regions_commits_in_source() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();
    let id = shape_ids(&editor, RegionKind::Buffer)[0];

    // Between the two regions
    let response = drag(&mut editor, point(75.0, 65.0), point(75.0, 550.0));

    assert_eq!(
        response,
        EventResponse::Dropped(DropOutcome::Committed {
            region: RegionKind::Buffer,
            shape: id,
        })
    );
    assert_eq!(
        editor.region(RegionKind::Buffer).store().get(id),
        Some(&polygon("100,1070 200,1070 150,1170"))
    );
}

#[test]
fn test_highlight_follows_pointer() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();

    editor.dispatch(InputEvent::PointerDown {
        position: point(75.0, 65.0),
    });
    editor.dispatch(InputEvent::PointerMove {
        position: point(300.0, 700.0),
    });
    assert!(editor.region(RegionKind::Work).is_highlighted());

    editor.dispatch(InputEvent::PointerMove {
        position: point(300.0, 300.0),
    });
    assert!(!editor.region(RegionKind::Work).is_highlighted());
}

#[test]
fn test_topmost_shape_is_picked() {
    let mut editor = TestEditorBuilder::new()
        .with_buffer_shape("0,0 400,0 400,400 0,400")
        .with_buffer_shape("100,100 300,100 300,300 100,300")
        .build();
    let top = shape_ids(&editor, RegionKind::Buffer)[1];

    editor.dispatch(InputEvent::PointerDown {
        position: point(100.0, 100.0),
    });
    assert_eq!(editor.active_drag().map(|d| d.shape), Some(top));
}

#[test]
fn test_second_pointer_down_is_ignored() {
    let mut editor = TestEditorBuilder::new()
        .with_buffer_shape(TRIANGLE)
        .with_buffer_shape("600,600 700,600 650,700")
        .build();
    let first = shape_ids(&editor, RegionKind::Buffer)[0];

    editor.dispatch(InputEvent::PointerDown {
        position: point(75.0, 65.0),
    });
    let session = editor.input_state().session_id();
    let response = editor.dispatch(InputEvent::PointerDown {
        position: point(325.0, 315.0),
    });

    assert_eq!(response, EventResponse::Ignored);
    assert_eq!(editor.input_state().session_id(), session);
    assert_eq!(editor.active_drag().map(|d| d.shape), Some(first));
}

#[test]
fn test_events_after_removal_are_no_ops() {
    let mut editor = TestEditorBuilder::new()
        .with_buffer_shape(TRIANGLE)
        .with_buffer_shape("600,600 700,600 650,700")
        .build();
    let id = shape_ids(&editor, RegionKind::Buffer)[0];

    editor.dispatch(InputEvent::PointerDown {
        position: point(75.0, 65.0),
    });
    assert!(editor.remove_shape(RegionKind::Buffer, id).is_some());
    assert!(editor.input_state().is_idle());

    let moved = editor.dispatch(InputEvent::PointerMove {
        position: point(500.0, 750.0),
    });
    let released = editor.dispatch(InputEvent::PointerUp {
        position: point(500.0, 750.0),
    });

    assert_eq!(moved, EventResponse::Ignored);
    assert_eq!(released, EventResponse::Ignored);
    assert_eq!(editor.region(RegionKind::Buffer).store().len(), 1);
    assert!(editor.region(RegionKind::Work).store().is_empty());
    assert_eq!(editor.region(RegionKind::Buffer).store().hit_region_count(), 1);
}

#[test]
fn test_double_click_copies_buffer_shape_unchanged() {
    let mut editor = TestEditorBuilder::new().with_buffer_shape(TRIANGLE).build();

    let first = editor.dispatch(InputEvent::DoubleClick {
        position: point(75.0, 65.0),
    });
    let again = editor.dispatch(InputEvent::DoubleClick {
        position: point(75.0, 65.0),
    });

    assert_eq!(first, EventResponse::Redraw);
    assert_eq!(again, EventResponse::Ignored);
    assert_eq!(point_strings(&editor, RegionKind::Buffer), vec![TRIANGLE]);
    assert_eq!(point_strings(&editor, RegionKind::Work), vec![TRIANGLE]);
}

#[test]
fn test_double_click_deletes_work_shape() {
    let mut editor = TestEditorBuilder::new().with_work_shape(TRIANGLE).build();

    let response = editor.dispatch(InputEvent::DoubleClick {
        position: point(150.0, 730.0),
    });

    assert_eq!(response, EventResponse::Redraw);
    assert!(editor.region(RegionKind::Work).store().is_empty());
    assert_eq!(editor.region(RegionKind::Work).store().hit_region_count(), 0);
}
