//! Application state for the Alpha Nex client
//!
//! One [`AppState`] value is constructed at startup and owns everything:
//! the immutable configuration, per-page form state, dashboard rows and
//! every widget that ticks. There is no other shared mutable state.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::api::{ApiClient, UploadStatusPayload, UploadSubmission};
use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::ui::char_counter::CharacterCounter;
use crate::ui::countdown::CountdownTimer;
use crate::ui::form_validation::{FormValidator, ValidationRule};
use crate::ui::keyboard_shortcuts::{KeyboardShortcutManager, ModalController};
use crate::ui::loading::LoadingState;
use crate::ui::navigation::{Navigation, Page};
use crate::ui::notifications::{NotificationCenter, NotificationKind};
use crate::ui::poller::{render_status, RowStatus, StatusTracker};
use crate::ui::progress::ProgressAnimator;
use crate::uploads::{
    deletion_deadline, deletion_penalty, format_file_size, Category, FileUploadGuard,
    SelectedFile,
};

/// Upload description limits (mirrors the server-side form)
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// XP awarded per accepted upload
pub const XP_PER_UPLOAD: i64 = 25;

/// Daily quota the dashboard meters run against
pub const MAX_DAILY_UPLOADS: u32 = 3;
pub const MAX_DAILY_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

/// Modals that can overlay a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    KeyboardShortcuts,
}

/// Fields of the sign-up form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl SignupField {
    pub const ALL: [SignupField; 4] = [
        SignupField::Name,
        SignupField::Email,
        SignupField::Password,
        SignupField::ConfirmPassword,
    ];

    /// Validator field name
    pub fn name(&self) -> &'static str {
        match self {
            SignupField::Name => "name",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirm_password",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            SignupField::Name => "Full Name",
            SignupField::Email => "Email",
            SignupField::Password => "Password",
            SignupField::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the input masks its contents
    pub fn is_secure(&self) -> bool {
        matches!(self, SignupField::Password | SignupField::ConfirmPassword)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Sign-up page state
#[derive(Debug, Clone)]
pub struct SignupFormState {
    pub validator: FormValidator,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self {
            validator: FormValidator::new()
                .with_rule(ValidationRule::new("name").required().min_length(2))
                .with_rule(ValidationRule::new("email").required().email())
                .with_rule(ValidationRule::new("password").required().min_length(8))
                .with_rule(
                    ValidationRule::new("confirm_password")
                        .required()
                        .confirms("password"),
                ),
        }
    }
}

/// Upload page state
#[derive(Debug, Clone)]
pub struct UploadFormState {
    /// The file currently selected for upload
    pub selection: Option<SelectedFile>,
    /// Inline error under the drop zone
    pub file_error: Option<String>,
    /// Whether a drag is hovering over the window
    pub drag_active: bool,
    pub description: String,
    pub counter: CharacterCounter,
    pub category: Option<Category>,
    pub category_error: Option<String>,
    pub ai_consent: bool,
    pub consent_error: Option<String>,
    pub validator: FormValidator,
    pub submit: LoadingState,
}

impl Default for UploadFormState {
    fn default() -> Self {
        Self {
            selection: None,
            file_error: None,
            drag_active: false,
            description: String::new(),
            counter: CharacterCounter::new(DESCRIPTION_MAX_LEN),
            category: None,
            category_error: None,
            ai_consent: false,
            consent_error: None,
            validator: FormValidator::new().with_rule(
                ValidationRule::new("description")
                    .required()
                    .min_length(DESCRIPTION_MIN_LEN),
            ),
            submit: LoadingState::new("Upload"),
        }
    }
}

/// What a submit attempt produced
#[derive(Debug, Clone)]
pub enum UploadCheck {
    /// Everything validated; ship it
    Ready(UploadSubmission),
    /// Submission cancelled; focus moves to the description when it failed
    Invalid { description_invalid: bool },
}

impl UploadFormState {
    /// Record a description edit: readout and optimistic error clearing
    pub fn set_description(&mut self, text: String) {
        self.counter.update(&text);
        self.validator.set_field("description", text.clone());
        self.description = text;
    }

    /// Re-validate the description after the field was committed
    pub fn commit_description(&mut self) {
        self.validator.commit_field("description");
    }

    /// Validate the whole form for submission
    pub fn check_submit(&mut self) -> UploadCheck {
        let mut ok = self.validator.validate_all();

        if self.category.is_none() {
            self.category_error = Some("This field is required.".to_string());
            ok = false;
        } else {
            self.category_error = None;
        }

        if !self.ai_consent {
            self.consent_error = Some("This field is required.".to_string());
            ok = false;
        } else {
            self.consent_error = None;
        }

        let Some(file) = &self.selection else {
            self.file_error = Some("Please choose a file to upload.".to_string());
            return UploadCheck::Invalid {
                description_invalid: self.validator.has_error("description"),
            };
        };

        if !ok {
            return UploadCheck::Invalid {
                description_invalid: self.validator.has_error("description"),
            };
        }

        UploadCheck::Ready(UploadSubmission {
            path: file.path.clone(),
            file_name: file.name.clone(),
            description: self.description.trim().to_string(),
            category: self.category.unwrap_or_else(|| file.category()),
            ai_consent: self.ai_consent,
        })
    }

    /// Back to a pristine form after a successful upload
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One upload listed on the dashboard
#[derive(Debug, Clone)]
pub struct UploadRow {
    pub id: String,
    pub file_name: String,
    pub size: u64,
    pub category: Category,
    pub uploaded_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub countdown: CountdownTimer,
    pub status: Option<RowStatus>,
}

/// One animated stat meter on the dashboard
#[derive(Debug, Clone)]
pub struct StatMeter {
    pub label: String,
    pub detail: String,
    pub meter: ProgressAnimator,
}

/// Dashboard page state
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub search_query: String,
    pub xp_points: i64,
    pub daily_upload_count: u32,
    pub daily_upload_bytes: u64,
    pub uploads: Vec<UploadRow>,
    pub stats: Vec<StatMeter>,
}

impl Default for DashboardState {
    fn default() -> Self {
        let mut dashboard = Self {
            search_query: String::new(),
            xp_points: 500,
            daily_upload_count: 0,
            daily_upload_bytes: 0,
            uploads: Vec::new(),
            stats: Vec::new(),
        };
        dashboard.rebuild_stats();
        dashboard
    }
}

impl DashboardState {
    /// Recompute the stat meters and restart their entry animation
    pub fn rebuild_stats(&mut self) {
        let xp_progress = (self.xp_points % 1000) as f32 / 10.0;
        let uploads_used = self.daily_upload_count as f32 / MAX_DAILY_UPLOADS as f32 * 100.0;
        let volume_used =
            self.daily_upload_bytes as f32 / MAX_DAILY_UPLOAD_BYTES as f32 * 100.0;

        self.stats = vec![
            StatMeter {
                label: "XP level progress".to_string(),
                detail: format!("{} XP", self.xp_points),
                meter: ProgressAnimator::new(xp_progress),
            },
            StatMeter {
                label: "Daily uploads".to_string(),
                detail: format!("{}/{}", self.daily_upload_count, MAX_DAILY_UPLOADS),
                meter: ProgressAnimator::new(uploads_used.min(100.0)),
            },
            StatMeter {
                label: "Daily upload volume".to_string(),
                detail: format!(
                    "{} of {}",
                    format_file_size(self.daily_upload_bytes),
                    format_file_size(MAX_DAILY_UPLOAD_BYTES)
                ),
                meter: ProgressAnimator::new(volume_used.min(100.0)),
            },
        ];
    }

    /// Rows matching the search query, newest first
    pub fn filtered_uploads(&self) -> Vec<&UploadRow> {
        let query = self.search_query.trim().to_lowercase();
        self.uploads
            .iter()
            .filter(|row| query.is_empty() || row.file_name.to_lowercase().contains(&query))
            .collect()
    }

    /// Whether any stat meter is still animating
    pub fn is_animating(&self) -> bool {
        self.stats.iter().any(|stat| !stat.meter.is_finished())
    }
}

/// Main application state
pub struct AppState {
    pub config: AppConfig,
    pub api: ApiClient,
    pub guard: FileUploadGuard,
    pub nav: Navigation,
    pub shortcuts: KeyboardShortcutManager,
    pub notifications: NotificationCenter,
    pub tracker: StatusTracker,
    pub modal: Option<ModalKind>,
    pub dashboard: DashboardState,
    pub upload_form: UploadFormState,
    pub signup_form: SignupFormState,
    clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Construct with an explicit time source (tests)
    pub fn with_clock(config: AppConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            api: ApiClient::new(config.clone()),
            guard: FileUploadGuard::new(&config),
            nav: Navigation::new(),
            shortcuts: KeyboardShortcutManager::default(),
            notifications: NotificationCenter::new(config.animation_duration()),
            tracker: StatusTracker::new(),
            modal: None,
            dashboard: DashboardState::default(),
            upload_form: UploadFormState::default(),
            signup_form: SignupFormState::default(),
            clock,
            config,
        }
    }

    /// Current time from the owned clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now_utc()
    }

    /// Show a transient banner
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.push(message, kind, Instant::now());
    }

    /// Show a flash message (success flashes auto-dismiss)
    pub fn flash(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.flash(message, kind, Instant::now());
    }

    /// Run a picked or dropped file through the upload guard
    pub fn select_file(&mut self, path: &Path) {
        let form = &mut self.upload_form;
        form.drag_active = false;

        let file = match SelectedFile::from_path(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Could not read dropped file {}: {}", path.display(), e);
                form.selection = None;
                form.file_error = Some(format!("Could not read file: {}", e));
                return;
            }
        };

        let verdict = self.guard.validate(&file.name, file.size);
        if !verdict.valid {
            // The invalid file never becomes the active selection
            form.selection = None;
            form.file_error = verdict.message;
            return;
        }

        log::debug!("Selected file {} ({})", file.name, format_file_size(file.size));
        form.file_error = None;
        form.selection = Some(file);
    }

    /// Record a finished upload: dashboard row, XP, flash, reset, redirect
    pub fn record_upload(&mut self, server_id: Option<String>) {
        let Some(file) = self.upload_form.selection.clone() else {
            return;
        };

        let now = self.now();
        let deadline = deletion_deadline(now);
        let id = server_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let category = self
            .upload_form
            .category
            .unwrap_or_else(|| file.category());

        self.dashboard.uploads.insert(
            0,
            UploadRow {
                id,
                file_name: file.name,
                size: file.size,
                category,
                uploaded_at: now,
                deadline,
                countdown: CountdownTimer::new(deadline, now),
                status: None,
            },
        );

        self.dashboard.xp_points += XP_PER_UPLOAD;
        self.dashboard.daily_upload_count += 1;
        self.dashboard.daily_upload_bytes += file.size;
        self.dashboard.rebuild_stats();

        self.upload_form.reset();
        self.flash(
            format!(
                "File uploaded successfully! You earned {} XP points.",
                XP_PER_UPLOAD
            ),
            NotificationKind::Success,
        );
        self.nav.navigate(Page::Dashboard);
    }

    /// Delete an upload row; deleting past the deadline costs XP
    pub fn delete_upload(&mut self, upload_id: &str) {
        let Some(index) = self
            .dashboard
            .uploads
            .iter()
            .position(|row| row.id == upload_id)
        else {
            return;
        };

        let row = self.dashboard.uploads.remove(index);
        self.tracker.forget(upload_id);

        let penalty = deletion_penalty(row.deadline, self.now());
        if penalty > 0 {
            self.dashboard.xp_points = (self.dashboard.xp_points - penalty).max(0);
            self.flash(
                format!(
                    "Upload deleted with {} XP penalty for late deletion.",
                    penalty
                ),
                NotificationKind::Warning,
            );
        } else {
            self.flash("Upload deleted successfully.", NotificationKind::Success);
        }
        self.dashboard.rebuild_stats();
    }

    /// One-second tick: countdowns advance, banner lifecycle moves on
    pub fn tick(&mut self) {
        let now = self.now();
        for row in &mut self.dashboard.uploads {
            row.countdown.tick(now);
        }
        self.notifications.sweep(Instant::now());
    }

    /// Fast tick: stat meters step, fading banners finish detaching
    pub fn animation_tick(&mut self) {
        for stat in &mut self.dashboard.stats {
            stat.meter.step();
        }
        self.notifications.sweep(Instant::now());
    }

    /// Whether the shared one-second tick must run
    pub fn needs_second_tick(&self) -> bool {
        self.nav.current() == Page::Dashboard || !self.notifications.is_empty()
    }

    /// Whether the fast animation tick must run
    pub fn needs_animation_tick(&self) -> bool {
        (self.nav.current() == Page::Dashboard && self.dashboard.is_animating())
            || self.notifications.has_fading()
    }

    /// Whether status polling is active
    pub fn polling_active(&self) -> bool {
        self.nav.current() == Page::Dashboard && !self.dashboard.uploads.is_empty()
    }

    /// Start a poll cycle: a sequenced request per visible upload row
    pub fn begin_poll_cycle(&mut self) -> Vec<(String, u64)> {
        let ids: Vec<String> = self
            .dashboard
            .uploads
            .iter()
            .map(|row| row.id.clone())
            .collect();
        ids.into_iter()
            .map(|id| {
                let seq = self.tracker.begin_request(&id);
                (id, seq)
            })
            .collect()
    }

    /// Fold one poll response into the matching row
    pub fn apply_status(
        &mut self,
        upload_id: &str,
        seq: u64,
        result: Result<UploadStatusPayload, String>,
    ) {
        let payload = match result {
            Ok(payload) => payload,
            Err(e) => {
                // Silent per-cycle failure: log and leave the row as-is
                log::error!("Status check failed for upload {}: {}", upload_id, e);
                return;
            }
        };

        if !self.tracker.try_apply(upload_id, seq) {
            log::debug!("Discarding stale status response for upload {}", upload_id);
            return;
        }

        if let Some(status) = render_status(upload_id, &payload) {
            if let Some(row) = self
                .dashboard
                .uploads
                .iter_mut()
                .find(|row| row.id == upload_id)
            {
                row.status = Some(status);
            }
        }
    }

    /// Validate and, when clean, reset the sign-up form.
    /// Returns the field that should take focus when submission fails.
    pub fn submit_signup(&mut self) -> Option<SignupField> {
        if self.signup_form.validator.validate_all() {
            self.signup_form.validator.reset();
            self.flash(
                "Account created! Welcome to Alpha Nex.",
                NotificationKind::Success,
            );
            self.nav.navigate(Page::Dashboard);
            return None;
        }

        self.signup_form
            .validator
            .first_invalid()
            .and_then(SignupField::from_name)
    }
}

impl ModalController for AppState {
    fn has_open_modal(&self) -> bool {
        self.modal.is_some()
    }

    fn close_active_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use chrono::{Duration, TimeZone};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn state_at(now: DateTime<Utc>) -> AppState {
        let mut clock = MockClock::new();
        clock.expect_now_utc().return_const(now);
        AppState::with_clock(AppConfig::default(), Box::new(clock))
    }

    fn state_with_upload(now: DateTime<Utc>) -> AppState {
        let mut state = state_at(now);
        state.upload_form.selection = Some(SelectedFile {
            path: "clip.mp4".into(),
            name: "clip.mp4".to_string(),
            size: 2048,
        });
        state.record_upload(Some("42".to_string()));
        state
    }

    #[test]
    fn test_record_upload_builds_dashboard_row() {
        let now = fixed_time();
        let state = state_with_upload(now);

        assert_eq!(state.dashboard.uploads.len(), 1);
        let row = &state.dashboard.uploads[0];
        assert_eq!(row.id, "42");
        assert_eq!(row.deadline, now + Duration::hours(48));
        assert_eq!(row.countdown.display(), "0h 0m 0s");
        assert_eq!(state.dashboard.xp_points, 500 + XP_PER_UPLOAD);
        assert_eq!(state.nav.current(), Page::Dashboard);
        // The form is pristine again
        assert_eq!(state.upload_form.selection, None);
    }

    #[test]
    fn test_select_file_rejects_disallowed_type() {
        let mut state = state_at(fixed_time());
        // Guard rejection is driven by the name, so a missing file on disk
        // must first pass the metadata read; use an existing source file.
        let path = std::path::PathBuf::from("Cargo.toml");
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
    fn test_late_deletion_costs_xp() {
        let now = fixed_time();
        let mut state = state_with_upload(now);
        // Pretend the row's window closed ten hours ago
        state.dashboard.uploads[0].deadline = now - Duration::hours(10);

        state.delete_upload("42");

        assert!(state.dashboard.uploads.is_empty());
        // 10 hours late at 5 XP each
        assert_eq!(state.dashboard.xp_points, 525 - 50);
    }

    #[test]
    fn test_stale_status_response_is_ignored() {
        let now = fixed_time();
        let mut state = state_with_upload(now);

        let cycle = state.begin_poll_cycle();
        let (id, first_seq) = cycle[0].clone();
        let second_seq = state.tracker.begin_request(&id);

        let newer = UploadStatusPayload {
            hours_remaining: Some(2.5),
            ..Default::default()
        };
        let older = UploadStatusPayload {
            hours_remaining: Some(3.0),
            ..Default::default()
        };

        state.apply_status(&id, second_seq, Ok(newer));
        state.apply_status(&id, first_seq, Ok(older));

        let status = state.dashboard.uploads[0].status.as_ref().unwrap();
        assert_eq!(status.text, "2h 30m remaining");
    }

    #[test]
    fn test_error_payload_keeps_previous_status() {
        let now = fixed_time();
        let mut state = state_with_upload(now);
        let id = state.dashboard.uploads[0].id.clone();

        let seq = state.tracker.begin_request(&id);
        state.apply_status(
            &id,
            seq,
            Ok(UploadStatusPayload {
                hours_remaining: Some(1.0),
                ..Default::default()
            }),
        );
        assert!(state.dashboard.uploads[0].status.is_some());

        let seq = state.tracker.begin_request(&id);
        state.apply_status(
            &id,
            seq,
            Ok(UploadStatusPayload {
                error: Some("gone".to_string()),
                ..Default::default()
            }),
        );

        let status = state.dashboard.uploads[0].status.as_ref().unwrap();
        assert_eq!(status.text, "1h 0m remaining");
    }

    #[test]
    fn test_polling_only_on_dashboard_with_rows() {
        let now = fixed_time();
        let mut state = state_with_upload(now);
        assert!(state.polling_active());

        state.nav.navigate(Page::Upload);
        assert!(!state.polling_active());

        state.nav.navigate(Page::Dashboard);
        state.delete_upload("42");
        assert!(!state.polling_active());
    }

    #[test]
    fn test_countdown_expires_via_tick() {
        let now = fixed_time();
        let mut state = state_at(now);

        state.upload_form.selection = Some(SelectedFile {
            path: "clip.mp4".into(),
            name: "clip.mp4".to_string(),
            size: 1,
        });
        state.record_upload(None);
        assert!(!state.dashboard.uploads[0].countdown.is_expired());

        // Swap in a clock past the deadline and tick
        let mut late_clock = MockClock::new();
        late_clock
            .expect_now_utc()
            .return_const(now + Duration::hours(49));
        state.clock = Box::new(late_clock);
        state.tick();

        assert_eq!(state.dashboard.uploads[0].countdown.display(), "Expired");
    }

    #[test]
    fn test_submit_signup_focuses_first_invalid_field() {
        let mut state = state_at(fixed_time());
        state.signup_form.validator.set_field("name", "D");
        state.signup_form.validator.set_field("email", "demo@alphanex.com");
        state
            .signup_form
            .validator
            .set_field("password", "supersecret");
        state
            .signup_form
            .validator
            .set_field("confirm_password", "supersecret");

        assert_eq!(state.submit_signup(), Some(SignupField::Name));

        state.signup_form.validator.set_field("name", "Demo User");
        assert_eq!(state.submit_signup(), None);
        assert_eq!(state.nav.current(), Page::Dashboard);
    }

    #[test]
    fn test_modal_controller() {
        let mut state = state_at(fixed_time());
        assert!(!state.has_open_modal());
        assert!(!state.close_active_modal());

        state.modal = Some(ModalKind::KeyboardShortcuts);
        assert!(state.has_open_modal());
        assert!(state.close_active_modal());
        assert_eq!(state.modal, None);
    }

    #[test]
    fn test_search_filters_rows() {
        let now = fixed_time();
        let mut state = state_with_upload(now);
        state.upload_form.selection = Some(SelectedFile {
            path: "notes.txt".into(),
            name: "notes.txt".to_string(),
            size: 10,
        });
        state.record_upload(Some("43".to_string()));

        state.dashboard.search_query = "CLIP".to_string();
        let rows = state.dashboard.filtered_uploads();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].file_name, "clip.mp4");
    }
}
