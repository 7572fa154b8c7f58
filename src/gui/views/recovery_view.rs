//! Recovery screen shown after a UI fault

use crate::gui::app::Message;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

pub fn recovery_view() -> Element<'static, Message> {
    use crate::gui::theme;

    container(
        column![
            text("Something went wrong").size(22),
            text("An unexpected error occurred. Please refresh and try again.")
                .size(14)
                .style(iced::theme::Text::Color(theme::GRAY_400)),
            button(text("Refresh").size(14))
                .on_press(Message::Reload)
                .padding([8, 16])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        ]
        .spacing(16)
        .max_width(420.0)
        .align_items(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x()
    .center_y()
    .style(iced::theme::Container::Custom(Box::new(
        theme::MainGradientContainer,
    )))
    .into()
}
