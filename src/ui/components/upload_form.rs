//! Upload page
//!
//! Drop zone plus picker, inline file feedback from the upload guard,
//! description with a character counter, category chips, consent checkbox
//! and a submit button that carries a loading state while the request is
//! in flight.

use iced::widget::{button, checkbox, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use crate::ui::state::AppState;
use crate::ui::theme;
use crate::ui::Message;
use crate::uploads::{format_file_size, Category};

/// Id of the description input, for focus-on-invalid
pub fn description_input_id() -> text_input::Id {
    text_input::Id::new("description")
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    let form = &state.upload_form;

    // Drop zone and file feedback
    let zone_label = if form.drag_active {
        "Release to drop the file"
    } else {
        "Drag and drop a file here"
    };
    let mut zone = column![
        text(zone_label).size(16),
        button(text("Browse files").size(14)).on_press(Message::BrowseFile),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    if let Some(file) = &form.selection {
        zone = zone.push(
            row![
                text(&file.name).size(14),
                text(format_file_size(file.size))
                    .size(14)
                    .style(theme::muted_text()),
                text(file.category().to_string())
                    .size(14)
                    .style(theme::muted_text()),
            ]
            .spacing(10),
        );
    }

    let mut content = column![
        text("Upload content").size(24),
        container(zone)
            .width(Length::Fill)
            .padding(30)
            .style(theme::drop_zone(form.drag_active)),
    ]
    .spacing(15)
    .max_width(700.0);

    if let Some(error) = &form.file_error {
        content = content.push(text(error).size(13).style(theme::danger_text()));
    }

    // Description with live counter
    let counter_style = match form.counter.state().tone() {
        Some(tone) => theme::toned_text(tone),
        None => theme::muted_text(),
    };
    content = content.push(
        column![
            text("Description").size(15),
            text_input("Describe this upload...", &form.description)
                .id(description_input_id())
                .on_input(Message::DescriptionChanged)
                .on_submit(Message::DescriptionCommitted)
                .padding(8),
            row![
                description_error(state),
                Space::with_width(Length::Fill),
                text(form.counter.readout()).size(13).style(counter_style),
            ],
        ]
        .spacing(5),
    );

    // Category chips
    let mut chips = row![].spacing(8);
    for category in Category::ALL {
        chips = chips.push(
            button(text(category.to_string()).size(14))
                .style(theme::choice_chip(form.category == Some(category)))
                .on_press(Message::CategoryChosen(category)),
        );
    }
    let mut category_column = column![text("Category").size(15), chips].spacing(5);
    if let Some(error) = &form.category_error {
        category_column = category_column.push(text(error).size(13).style(theme::danger_text()));
    }
    content = content.push(category_column);

    // Consent
    let mut consent_column = column![checkbox(
        "I agree that this content belongs to me and can be used for AI training",
        form.ai_consent,
        Message::ConsentToggled,
    )]
    .spacing(5);
    if let Some(error) = &form.consent_error {
        consent_column = consent_column.push(text(error).size(13).style(theme::danger_text()));
    }
    content = content.push(consent_column);

    // Submit, disabled while the upload request is in flight
    let mut submit = button(text(form.submit.label()).size(16)).padding([8, 20]);
    if !form.submit.is_busy() {
        submit = submit.on_press(Message::SubmitUpload);
    }
    content = content.push(submit);

    container(content).width(Length::Fill).center_x().into()
}

fn description_error(state: &AppState) -> Element<'_, Message> {
    match state.upload_form.validator.get_error("description") {
        Some(error) => text(error).size(13).style(theme::danger_text()).into(),
        None => Space::with_width(Length::Fixed(0.0)).into(),
    }
}
