//! End-to-end state flows through the public API:
//! pick a file, upload it, watch the dashboard, poll, delete.

use std::io::Write;

use alphanex::api::UploadStatusPayload;
use alphanex::ui::navigation::Page;
use alphanex::ui::state::UploadCheck;
use alphanex::{AppConfig, AppState};
use tempfile::tempdir;

fn write_file(dir: &tempfile::TempDir, name: &str, bytes: usize) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&vec![b'x'; bytes]).unwrap();
    path
}

#[test]
fn test_valid_file_becomes_the_selection() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "clip.mp4", 2048);

    let mut state = AppState::new(AppConfig::default());
    state.select_file(&path);

    let file = state.upload_form.selection.as_ref().expect("file accepted");
    assert_eq!(file.name, "clip.mp4");
    assert_eq!(file.size, 2048);
    assert_eq!(state.upload_form.file_error, None);
}

#[test]
fn test_disallowed_file_is_cleared_with_inline_error() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "payload.exe", 16);

    let mut state = AppState::new(AppConfig::default());
    state.select_file(&path);

    assert_eq!(state.upload_form.selection, None);
    assert!(state
        .upload_form
        .file_error
        .as_ref()
        .unwrap()
        .contains("File type not allowed"));
}

#[test]
fn test_submit_requires_description_category_consent_and_file() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "notes.txt", 64);

    let mut state = AppState::new(AppConfig::default());
    state.select_file(&path);
    state.upload_form.set_description("too short".to_string());
    // 9 characters: min length is 10

    match state.upload_form.check_submit() {
        UploadCheck::Invalid {
            description_invalid,
        } => assert!(description_invalid),
        UploadCheck::Ready(_) => panic!("submit should have been cancelled"),
    }
    assert!(state.upload_form.category_error.is_some());
    assert!(state.upload_form.consent_error.is_some());

    state
        .upload_form
        .set_description("a perfectly fine description".to_string());
    state.upload_form.category = Some(alphanex::Category::Text);
    state.upload_form.ai_consent = true;

    match state.upload_form.check_submit() {
        UploadCheck::Ready(submission) => {
            assert_eq!(submission.file_name, "notes.txt");
            assert_eq!(submission.description, "a perfectly fine description");
        }
        UploadCheck::Invalid { .. } => panic!("submit should have been accepted"),
    }
}

#[test]
fn test_upload_flow_lands_on_the_dashboard() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "clip.mp4", 1024);

    let mut state = AppState::new(AppConfig::default());
    state.nav.navigate(Page::Upload);
    state.select_file(&path);
    state.record_upload(Some("7".to_string()));

    assert_eq!(state.nav.current(), Page::Dashboard);
    assert_eq!(state.dashboard.uploads.len(), 1);
    assert_eq!(state.dashboard.uploads[0].id, "7");
    assert!(state.polling_active());

    // A poll cycle sequences one request per row
    let cycle = state.begin_poll_cycle();
    assert_eq!(cycle.len(), 1);
    let (id, seq) = cycle[0].clone();
    assert_eq!(id, "7");

    state.apply_status(
        &id,
        seq,
        Ok(UploadStatusPayload {
            hours_remaining: Some(47.5),
            ..Default::default()
        }),
    );
    assert_eq!(
        state.dashboard.uploads[0].status.as_ref().unwrap().text,
        "47h 30m remaining"
    );
}

#[test]
fn test_prompt_deletion_keeps_xp() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "clip.mp4", 1024);

    let mut state = AppState::new(AppConfig::default());
    state.select_file(&path);
    state.record_upload(Some("7".to_string()));
    let xp_after_upload = state.dashboard.xp_points;

    state.delete_upload("7");

    assert!(state.dashboard.uploads.is_empty());
    assert_eq!(state.dashboard.xp_points, xp_after_upload);
    assert!(!state.polling_active());
}

#[test]
fn test_transport_errors_leave_the_row_untouched() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "clip.mp4", 1024);

    let mut state = AppState::new(AppConfig::default());
    state.select_file(&path);
    state.record_upload(Some("7".to_string()));

    let cycle = state.begin_poll_cycle();
    let (id, seq) = cycle[0].clone();
    state.apply_status(&id, seq, Err("connection refused".to_string()));

    assert_eq!(state.dashboard.uploads[0].status, None);
}
