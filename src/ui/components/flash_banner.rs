//! Notification and flash banners
//!
//! Stacked dismissible banners below the nav bar. Fading banners render
//! dimmed until the sweep detaches them.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::ui::notifications::NotificationCenter;
use crate::ui::theme;
use crate::ui::Message;

pub fn view(center: &NotificationCenter) -> Element<'_, Message> {
    if center.is_empty() {
        return Space::with_height(Length::Fixed(0.0)).into();
    }

    let mut stack = column![].spacing(5).padding([0, 20]);
    for banner in center.iter() {
        let tone = banner.kind().tone();
        let close = button(text("x").size(14))
            .style(iced::theme::Button::Text)
            .on_press(Message::DismissNotification(banner.id()));

        let line = row![
            text(banner.message()).size(14).style(theme::toned_text(tone)),
            Space::with_width(Length::Fill),
            close,
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        stack = stack.push(
            container(line)
                .width(Length::Fill)
                .padding(10)
                .style(theme::banner(tone, banner.is_fading())),
        );
    }

    stack.into()
}
