//! Share link input component

use crate::gui::app::Message;
use iced::widget::{button, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// Input field with paste/clear helpers and the Inspect trigger
///
/// Enter submits even while a request is in flight; only the button is
/// disabled during loading.
pub fn share_input(value: &str, loading: bool, has_error: bool) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut input_row = row![
        text_input("Paste full link or just the id", value)
            .on_input(Message::InputChanged)
            .on_submit(Message::InspectPressed)
            .padding(12)
            .width(Length::Fill)
            .style(if has_error {
                iced::theme::TextInput::Custom(Box::new(theme::InputErrorStyle))
            } else {
                iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
            }),
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    if !value.is_empty() {
        input_row = input_row.push(
            button(text("Clear").size(14))
                .on_press(Message::ClearInput)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
        );
    }

    input_row
        .push(
            button(text(if loading { "Checking..." } else { "Inspect" }).size(15))
                .on_press_maybe(if loading {
                    None
                } else {
                    Some(Message::InspectPressed)
                })
                .padding([12, 20])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        )
        .into()
}
