//! Keyboard shortcuts modal
//!
//! Lists every registered chord. Escape or the close button dismisses it.

use iced::widget::{button, column, container, horizontal_rule, row, text};
use iced::{Element, Length};

use crate::ui::keyboard_shortcuts::KeyboardShortcutManager;
use crate::ui::theme;
use crate::ui::Message;

pub fn view(shortcuts: &KeyboardShortcutManager) -> Element<'static, Message> {
    let mut list = column![].spacing(8);
    for (chord, description) in shortcuts.get_shortcut_descriptions() {
        list = list.push(
            row![
                text(chord).size(14).width(Length::Fixed(120.0)),
                text(description).size(14).style(theme::muted_text()),
            ]
            .spacing(10),
        );
    }

    let panel = container(
        column![
            text("Keyboard shortcuts").size(20),
            horizontal_rule(1),
            list,
            button(text("Close").size(14)).on_press(Message::CloseModal),
        ]
        .spacing(15),
    )
    .padding(20)
    .width(Length::Fixed(420.0))
    .style(theme::modal_panel());

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}
