//! Tests for upload status rendering and response sequencing

use alphanex::api::UploadStatusPayload;
use alphanex::ui::poller::{render_status, StatusTracker};
use alphanex::ui::theme::Tone;

fn remaining(hours: f64) -> UploadStatusPayload {
    UploadStatusPayload {
        hours_remaining: Some(hours),
        ..Default::default()
    }
}

#[test]
fn test_two_and_a_half_hours_renders_as_2h_30m() {
    let status = render_status("7", &remaining(2.5)).unwrap();
    assert_eq!(status.text, "2h 30m remaining");
    assert_eq!(status.tone, Tone::Success);
}

#[test]
fn test_zero_hours_with_penalty_renders_penalty() {
    let payload = UploadStatusPayload {
        hours_remaining: Some(0.0),
        penalty: Some(15),
        ..Default::default()
    };
    let status = render_status("7", &payload).unwrap();
    assert_eq!(status.text, "15 XP penalty");
    assert_eq!(status.tone, Tone::Warning);
}

#[test]
fn test_fractional_minutes_floor() {
    let status = render_status("7", &remaining(1.99)).unwrap();
    assert_eq!(status.text, "1h 59m remaining");

    let status = render_status("7", &remaining(0.016)).unwrap();
    // 0.016 hours is under a minute but still positive
    assert_eq!(status.text, "0h 0m remaining");
}

#[test]
fn test_error_payload_is_skipped() {
    let payload = UploadStatusPayload {
        error: Some("upload not found".to_string()),
        hours_remaining: Some(5.0),
        penalty: None,
    };
    assert!(render_status("7", &payload).is_none());
}

#[test]
fn test_negative_hours_fall_through_to_penalty() {
    let payload = UploadStatusPayload {
        hours_remaining: Some(-3.0),
        penalty: Some(15),
        ..Default::default()
    };
    assert_eq!(
        render_status("7", &payload).unwrap().text,
        "15 XP penalty"
    );
}

#[test]
fn test_out_of_order_responses_are_discarded() {
    let mut tracker = StatusTracker::new();

    let slow = tracker.begin_request("row");
    let fast = tracker.begin_request("row");

    // The later request lands first
    assert!(tracker.try_apply("row", fast));
    // The earlier one straggles in afterwards and is dropped
    assert!(!tracker.try_apply("row", slow));
}

#[test]
fn test_rows_are_sequenced_independently() {
    let mut tracker = StatusTracker::new();

    let a0 = tracker.begin_request("a");
    let b0 = tracker.begin_request("b");
    let a1 = tracker.begin_request("a");

    assert!(tracker.try_apply("a", a1));
    assert!(tracker.try_apply("b", b0));
    assert!(!tracker.try_apply("a", a0));
}

#[test]
fn test_removed_row_rejects_late_responses() {
    let mut tracker = StatusTracker::new();
    let seq = tracker.begin_request("row");

    tracker.forget("row");
    assert!(!tracker.try_apply("row", seq));
}
