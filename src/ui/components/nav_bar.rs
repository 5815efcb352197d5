//! Top navigation bar
//!
//! Links for every page with the current one marked active, a toggle for
//! the collapsible panel, and the entry point to the shortcuts modal.
//! Tooltips are an optional capability driven by configuration.

use iced::widget::{button, column, container, row, text, tooltip, Space};
use iced::{Alignment, Element, Length};

use crate::ui::navigation::Page;
use crate::ui::state::AppState;
use crate::ui::theme;
use crate::ui::Message;

pub fn view(state: &AppState) -> Element<'_, Message> {
    let brand = text("Alpha Nex").size(22);

    let toggle = button(text("Menu").size(14))
        .style(theme::nav_link(false))
        .on_press(Message::ToggleNavPanel);

    let shortcuts = button(text("Shortcuts").size(14))
        .style(theme::nav_link(false))
        .on_press(Message::OpenShortcutsModal);

    let bar = row![
        brand,
        Space::with_width(Length::Fill),
        shortcuts,
        toggle,
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    // Links sit inline; the collapsible panel stacks them below the bar
    let content: Element<'_, Message> = if state.nav.panel_open() {
        let mut panel = column![bar].spacing(5);
        for page in Page::ALL {
            panel = panel.push(nav_link(state, page));
        }
        panel.into()
    } else {
        let mut inline = row![].spacing(5).align_items(Alignment::Center);
        for page in Page::ALL {
            inline = inline.push(nav_link(state, page));
        }
        row![
            inline,
            Space::with_width(Length::Fill),
            bar,
        ]
        .spacing(20)
        .align_items(Alignment::Center)
        .into()
    };

    container(content)
        .width(Length::Fill)
        .padding(10)
        .style(theme::nav_bar())
        .into()
}

fn nav_link(state: &AppState, page: Page) -> Element<'_, Message> {
    let link = button(text(page.title()).size(15))
        .style(theme::nav_link(state.nav.is_active(page)))
        .on_press(Message::NavigateTo(page));

    if state.config.enable_tooltips {
        tooltip(link, page.path(), tooltip::Position::Bottom)
            .gap(5)
            .style(theme::card())
            .into()
    } else {
        link.into()
    }
}
