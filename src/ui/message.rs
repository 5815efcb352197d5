use std::path::PathBuf;

use crate::api::UploadStatusPayload;
use crate::ui::navigation::Page;
use crate::ui::state::SignupField;
use crate::uploads::Category;

/// Messages that can be sent to update the UI state
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Switch to another page
    NavigateTo(Page),

    /// Toggle the collapsible nav panel
    ToggleNavPanel,

    /// Open the keyboard-shortcuts modal
    OpenShortcutsModal,

    /// Close the active modal (Escape, backdrop button)
    CloseModal,

    /// Move focus to the dashboard search input
    FocusSearch,

    /// Raw runtime event: keyboard shortcuts, file drag and drop
    EventOccurred(iced::Event),

    /// Dashboard search text edited
    SearchChanged(String),

    /// Copy an upload reference to the clipboard
    CopyUploadRef(String),

    /// Delete an upload row (late deletions cost XP)
    DeleteUpload(String),

    /// Poll cycle for upload statuses fired
    StatusPollTick,

    /// One status response arrived
    StatusFetched {
        upload_id: String,
        seq: u64,
        result: Result<UploadStatusPayload, String>,
    },

    /// Open the native file picker
    BrowseFile,

    /// File picked in the dialog (None when cancelled)
    FileChosen(Option<PathBuf>),

    /// Upload description edited
    DescriptionChanged(String),

    /// Upload description field committed (Enter / focus left)
    DescriptionCommitted,

    /// Category chip picked on the upload form
    CategoryChosen(Category),

    /// Consent checkbox toggled
    ConsentToggled(bool),

    /// Upload form submitted
    SubmitUpload,

    /// Upload request settled; `Ok` carries the server-assigned id, if any
    UploadFinished(Result<Option<String>, String>),

    /// Sign-up field edited
    SignupFieldEdited(SignupField, String),

    /// Sign-up field committed (Enter / focus left)
    SignupFieldCommitted(SignupField),

    /// Sign-up form submitted
    SubmitSignup,

    /// Close button pressed on a notification banner
    DismissNotification(u64),

    /// One-second tick: countdowns, banner lifecycle
    Tick,

    /// Fast tick driving progress animation and banner fades
    AnimationTick,
}
