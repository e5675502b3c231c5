//! Tests for background image uploads

mod common;

use std::time::{Duration, Instant};

use common::{create_test_app, png_bytes};
use talkboard::board::TileFace;
use talkboard::data_url;
use talkboard::editor::UploadOutcome;
use tempfile::TempDir;

/// Poll until an upload outcome arrives or the timeout hits
fn wait_for_outcome(app: &mut talkboard::gui::TalkboardApp) -> Vec<UploadOutcome> {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let outcomes = app.poll_uploads();
        if !outcomes.is_empty() || Instant::now() > deadline {
            return outcomes;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn test_uploaded_png_becomes_tile_picture() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("apple.png");
    std::fs::write(&path, png_bytes(4, 4)).unwrap();

    let (mut app, _store, _speaker) = create_test_app();
    app.editor_mut().start_upload(2, path);

    assert_eq!(wait_for_outcome(&mut app), vec![UploadOutcome::Applied { slot: 2 }]);

    let url = app.config().tiles[2].image.clone().expect("image should be set");
    let decoded = data_url::decode(&url).unwrap();
    assert_eq!(decoded.mime, "image/png");
    assert_eq!(decoded.bytes, png_bytes(4, 4));
    assert!(matches!(app.board().tiles[2].face, TileFace::Image(_)));
    assert!(app.has_unsaved_changes());
}

#[test]
fn test_non_image_upload_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let (mut app, _store, _speaker) = create_test_app();
    app.editor_mut().start_upload(0, path);

    let outcomes = wait_for_outcome(&mut app);
    assert!(matches!(outcomes.as_slice(), [UploadOutcome::Failed { slot: 0, .. }]));
    assert!(app.config().tiles[0].image.is_none());
    assert!(app.editor().image_status.get(&0).is_some_and(|(_, is_error)| *is_error));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (mut app, _store, _speaker) = create_test_app();
    app.editor_mut().start_upload(1, dir.path().join("missing.png"));

    let outcomes = wait_for_outcome(&mut app);
    assert!(matches!(outcomes.as_slice(), [UploadOutcome::Failed { slot: 1, .. }]));
}

#[test]
fn test_second_upload_wins_over_first() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    std::fs::write(&first, png_bytes(2, 2)).unwrap();
    std::fs::write(&second, png_bytes(3, 3)).unwrap();

    let (mut app, _store, _speaker) = create_test_app();
    app.editor_mut().start_upload(0, first);
    app.editor_mut().start_upload(0, second);

    // Collect until the newer request is applied; the older one may land on
    // either side of it but must never win
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut outcomes = Vec::new();
    while outcomes.len() < 2 && Instant::now() < deadline {
        outcomes.extend(app.poll_uploads());
        std::thread::sleep(Duration::from_millis(10));
    }

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.contains(&UploadOutcome::Stale { slot: 0 }));
    assert!(outcomes.contains(&UploadOutcome::Applied { slot: 0 }));

    let url = app.config().tiles[0].image.clone().unwrap();
    assert_eq!(data_url::decode(&url).unwrap().bytes, png_bytes(3, 3));
}

#[test]
fn test_reset_discards_pending_upload() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("late.png");
    std::fs::write(&path, png_bytes(2, 2)).unwrap();

    let (mut app, _store, _speaker) = create_test_app();
    app.editor_mut().start_upload(0, path);
    app.reset_settings();

    let outcomes = wait_for_outcome(&mut app);
    assert_eq!(outcomes, vec![UploadOutcome::Stale { slot: 0 }]);
    assert!(app.config().tiles[0].image.is_none());
}
