//! Sign-up page
//!
//! Four validated fields; errors surface inline after a field is committed
//! or the form is submitted, and clear again as soon as the field is
//! edited.

use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length};

use crate::ui::state::{AppState, SignupField};
use crate::ui::theme;
use crate::ui::Message;

/// Id of one sign-up input, for focus-on-invalid
pub fn input_id(field: SignupField) -> text_input::Id {
    text_input::Id::new(field.name())
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    let validator = &state.signup_form.validator;

    let mut form = column![text("Create your account").size(24)]
        .spacing(15)
        .max_width(420.0);

    for field in SignupField::ALL {
        let mut input = text_input(field.label(), validator.get_field(field.name()))
            .id(input_id(field))
            .on_input(move |value| Message::SignupFieldEdited(field, value))
            .on_submit(Message::SignupFieldCommitted(field))
            .padding(8);
        if field.is_secure() {
            input = input.password();
        }

        let mut block = column![text(field.label()).size(15), input].spacing(5);
        if let Some(error) = validator.get_error(field.name()) {
            block = block.push(text(error).size(13).style(theme::danger_text()));
        }
        form = form.push(block);
    }

    form = form.push(
        button(text("Create account").size(16))
            .padding([8, 20])
            .on_press(Message::SubmitSignup),
    );

    container(form).width(Length::Fill).center_x().into()
}
