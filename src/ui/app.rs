//! Application wiring
//!
//! The iced `Application` implementation: one dispatch point for every
//! message, subscriptions for the timers that are currently live, and the
//! page layout. Timers exist only while the owning state needs them; a
//! subscription that is not returned here is cancelled by the runtime.

use std::time::Duration;

use iced::widget::text_input;
use iced::{executor, time, window, Application, Command, Element, Settings, Subscription, Theme};

use crate::config::AppConfig;
use crate::ui::clipboard::{copy_text, ClipboardCopy, SystemClipboard};
use crate::ui::components;
use crate::ui::keyboard_shortcuts::ModalController;
use crate::ui::message::Message;
use crate::ui::navigation::Page;
use crate::ui::notifications::NotificationKind;
use crate::ui::progress;
use crate::ui::state::{AppState, ModalKind, UploadCheck};
use crate::ui::theme;

/// Runs the UI application
pub fn run_ui(config: AppConfig) -> iced::Result {
    AlphaNexApp::run(Settings::with_flags(config))
}

/// The running client
pub struct AlphaNexApp {
    state: AppState,
    clipboard: SystemClipboard,
}

impl Application for AlphaNexApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppConfig;

    fn new(flags: AppConfig) -> (Self, Command<Message>) {
        log::info!("Alpha Nex client initialized");
        (
            Self {
                state: AppState::new(flags),
                clipboard: SystemClipboard,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        String::from("Alpha Nex")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.state.nav.navigate(page);
                if page == Page::Dashboard {
                    // Entering the page restarts the stat meters
                    self.state.dashboard.rebuild_stats();
                }
                Command::none()
            }
            Message::ToggleNavPanel => {
                self.state.nav.toggle_panel();
                Command::none()
            }
            Message::OpenShortcutsModal => {
                self.state.modal = Some(ModalKind::KeyboardShortcuts);
                Command::none()
            }
            Message::CloseModal => {
                self.state.close_active_modal();
                Command::none()
            }
            Message::FocusSearch => {
                if self.state.nav.current() != Page::Dashboard {
                    self.state.nav.navigate(Page::Dashboard);
                }
                text_input::focus(components::dashboard::search_input_id())
            }
            Message::EventOccurred(event) => self.handle_event(event),
            Message::SearchChanged(query) => {
                self.state.dashboard.search_query = query;
                Command::none()
            }
            Message::CopyUploadRef(text) => self.copy_to_clipboard(text),
            Message::DeleteUpload(upload_id) => {
                self.state.delete_upload(&upload_id);
                Command::none()
            }
            Message::StatusPollTick => self.poll_statuses(),
            Message::StatusFetched {
                upload_id,
                seq,
                result,
            } => {
                self.state.apply_status(&upload_id, seq, result);
                Command::none()
            }
            Message::BrowseFile => Command::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FileChosen,
            ),
            Message::FileChosen(Some(path)) => {
                self.state.select_file(&path);
                Command::none()
            }
            Message::FileChosen(None) => Command::none(),
            Message::DescriptionChanged(text) => {
                self.state.upload_form.set_description(text);
                Command::none()
            }
            Message::DescriptionCommitted => {
                self.state.upload_form.commit_description();
                Command::none()
            }
            Message::CategoryChosen(category) => {
                self.state.upload_form.category = Some(category);
                self.state.upload_form.category_error = None;
                Command::none()
            }
            Message::ConsentToggled(value) => {
                self.state.upload_form.ai_consent = value;
                if value {
                    self.state.upload_form.consent_error = None;
                }
                Command::none()
            }
            Message::SubmitUpload => self.submit_upload(),
            Message::UploadFinished(result) => {
                self.state.upload_form.submit.hide();
                match result {
                    Ok(server_id) => self.state.record_upload(server_id),
                    Err(e) => {
                        log::error!("Upload failed: {}", e);
                        self.state.flash(
                            "Upload failed. Check file size and daily limits.",
                            NotificationKind::Danger,
                        );
                    }
                }
                Command::none()
            }
            Message::SignupFieldEdited(field, value) => {
                self.state
                    .signup_form
                    .validator
                    .set_field(field.name(), value);
                Command::none()
            }
            Message::SignupFieldCommitted(field) => {
                self.state.signup_form.validator.commit_field(field.name());
                Command::none()
            }
            Message::SubmitSignup => match self.state.submit_signup() {
                None => Command::none(),
                Some(field) => text_input::focus(components::signup_form::input_id(field)),
            },
            Message::DismissNotification(id) => {
                self.state.notifications.dismiss(id);
                Command::none()
            }
            Message::Tick => {
                self.state.tick();
                Command::none()
            }
            Message::AnimationTick => {
                self.state.animation_tick();
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        components::layout(&self.state)
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![iced::subscription::events().map(Message::EventOccurred)];

        if self.state.needs_second_tick() {
            subscriptions.push(time::every(Duration::from_secs(1)).map(|_| Message::Tick));
        }

        if self.state.needs_animation_tick() {
            subscriptions.push(
                time::every(progress::step_period(self.state.config.animation_duration()))
                    .map(|_| Message::AnimationTick),
            );
        }

        if self.state.polling_active() {
            subscriptions.push(
                time::every(self.state.config.poll_interval()).map(|_| Message::StatusPollTick),
            );
        }

        Subscription::batch(subscriptions)
    }

    fn theme(&self) -> Theme {
        theme::app_theme()
    }
}

impl AlphaNexApp {
    /// Route raw runtime events: keyboard shortcuts and file drag/drop
    fn handle_event(&mut self, event: iced::Event) -> Command<Message> {
        if let Some(routed) = self.state.shortcuts.handle_event(&event) {
            return self.update(routed);
        }

        if let iced::Event::Window(window_event) = event {
            match window_event {
                window::Event::FileHovered(_) => {
                    if self.state.nav.current() == Page::Upload {
                        self.state.upload_form.drag_active = true;
                    }
                }
                window::Event::FilesHoveredLeft => {
                    self.state.upload_form.drag_active = false;
                }
                window::Event::FileDropped(path) => {
                    self.state.upload_form.drag_active = false;
                    // Drops land in the same selection slot as the picker
                    if self.state.nav.current() == Page::Upload {
                        self.state.select_file(&path);
                    }
                }
                _ => {}
            }
        }

        Command::none()
    }

    /// Copy text, preferring the platform clipboard
    fn copy_to_clipboard(&mut self, text: String) -> Command<Message> {
        match copy_text(&mut self.clipboard, &text) {
            ClipboardCopy::Primary => {
                self.state
                    .notify("Copied to clipboard!", NotificationKind::Success);
                Command::none()
            }
            ClipboardCopy::Fallback => {
                self.state
                    .notify("Copied to clipboard!", NotificationKind::Success);
                iced::clipboard::write(text)
            }
            ClipboardCopy::Failed => Command::none(),
        }
    }

    /// Validate the upload form and ship it when clean
    fn submit_upload(&mut self) -> Command<Message> {
        match self.state.upload_form.check_submit() {
            UploadCheck::Invalid {
                description_invalid,
            } => {
                if description_invalid {
                    text_input::focus(components::upload_form::description_input_id())
                } else {
                    Command::none()
                }
            }
            UploadCheck::Ready(submission) => {
                self.state.upload_form.submit.show("Uploading...");
                let api = self.state.api.clone();
                Command::perform(
                    async move {
                        api.submit_upload(submission)
                            .await
                            .map(|receipt| receipt.upload_id)
                            .map_err(|e| e.to_string())
                    },
                    Message::UploadFinished,
                )
            }
        }
    }

    /// One poll cycle: a sequenced request per upload row
    fn poll_statuses(&mut self) -> Command<Message> {
        let commands: Vec<Command<Message>> = self
            .state
            .begin_poll_cycle()
            .into_iter()
            .map(|(upload_id, seq)| {
                let api = self.state.api.clone();
                let request_id = upload_id.clone();
                Command::perform(
                    async move {
                        api.fetch_upload_status(&request_id)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |result| Message::StatusFetched {
                        upload_id,
                        seq,
                        result,
                    },
                )
            })
            .collect();

        Command::batch(commands)
    }
}
