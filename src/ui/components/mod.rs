//! Page and widget views

pub mod dashboard;
pub mod flash_banner;
pub mod nav_bar;
pub mod shortcuts_modal;
pub mod signup_form;
pub mod upload_form;

use iced::widget::{column, container, scrollable};
use iced::{Element, Length};

use crate::ui::navigation::Page;
use crate::ui::state::{AppState, ModalKind};
use crate::ui::Message;

/// Compose the full window: nav bar, banners, then the page or modal
pub fn layout(state: &AppState) -> Element<'_, Message> {
    let body: Element<'_, Message> = match state.modal {
        Some(ModalKind::KeyboardShortcuts) => shortcuts_modal::view(&state.shortcuts),
        None => match state.nav.current() {
            Page::Dashboard => dashboard::view(state),
            Page::Upload => upload_form::view(state),
            Page::SignUp => signup_form::view(state),
        },
    };

    let content = column![
        nav_bar::view(state),
        flash_banner::view(&state.notifications),
        scrollable(container(body).width(Length::Fill).padding(20)),
    ]
    .spacing(10);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
