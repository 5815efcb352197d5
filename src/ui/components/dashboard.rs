//! Dashboard page
//!
//! Animated stat meters, the searchable list of upload rows with their
//! deletion countdowns and polled status lines, and per-row copy/delete
//! actions.

use iced::widget::{button, column, container, progress_bar, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use crate::ui::state::{AppState, StatMeter, UploadRow};
use crate::ui::theme;
use crate::ui::Message;
use crate::uploads::format_file_size;

/// Id of the search input, target of the Ctrl+K shortcut
pub fn search_input_id() -> text_input::Id {
    text_input::Id::new("search")
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    let mut stats = row![].spacing(15);
    for stat in &state.dashboard.stats {
        stats = stats.push(stat_card(stat));
    }

    let search = text_input("Search uploads...", &state.dashboard.search_query)
        .id(search_input_id())
        .on_input(Message::SearchChanged)
        .padding(8)
        .width(Length::Fixed(300.0));

    let mut uploads = column![].spacing(10);
    let rows = state.dashboard.filtered_uploads();
    if rows.is_empty() {
        uploads = uploads.push(
            text("No uploads yet. Anything you upload appears here.")
                .size(14)
                .style(theme::muted_text()),
        );
    } else {
        for upload in rows {
            uploads = uploads.push(upload_card(upload));
        }
    }

    column![
        text("Dashboard").size(24),
        stats,
        row![
            text("Your uploads").size(18),
            Space::with_width(Length::Fill),
            search,
        ]
        .align_items(Alignment::Center),
        uploads,
    ]
    .spacing(20)
    .into()
}

fn stat_card(stat: &StatMeter) -> Element<'_, Message> {
    container(
        column![
            text(&stat.label).size(14),
            progress_bar(0.0..=100.0, stat.meter.value()).height(Length::Fixed(8.0)),
            text(&stat.detail).size(13).style(theme::muted_text()),
        ]
        .spacing(8),
    )
    .padding(15)
    .width(Length::Fill)
    .style(theme::card())
    .into()
}

fn upload_card(upload: &UploadRow) -> Element<'_, Message> {
    let countdown_style = if upload.countdown.is_expired() {
        theme::danger_text()
    } else {
        theme::muted_text()
    };

    let mut details = column![
        row![
            text(&upload.file_name).size(15),
            text(format_file_size(upload.size))
                .size(13)
                .style(theme::muted_text()),
            text(upload.category.to_string())
                .size(13)
                .style(theme::muted_text()),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
        row![
            text("Free deletion ends in").size(13).style(theme::muted_text()),
            text(upload.countdown.display()).size(13).style(countdown_style),
        ]
        .spacing(5),
    ]
    .spacing(5);

    if let Some(status) = &upload.status {
        details = details.push(
            text(&status.text)
                .size(13)
                .style(theme::toned_text(status.tone)),
        );
    }

    let copy = button(text("Copy ID").size(13))
        .style(iced::theme::Button::Secondary)
        .on_press(Message::CopyUploadRef(upload.id.clone()));
    let delete = button(text("Delete").size(13))
        .style(iced::theme::Button::Destructive)
        .on_press(Message::DeleteUpload(upload.id.clone()));

    container(
        row![
            details,
            Space::with_width(Length::Fill),
            copy,
            delete,
        ]
        .spacing(10)
        .align_items(Alignment::Center),
    )
    .padding(15)
    .width(Length::Fill)
    .style(theme::card())
    .into()
}
