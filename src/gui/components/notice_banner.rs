use crate::gui::app::{Message, Notice};
use iced::widget::{container, row, text};
use iced::{Alignment, Element, Length};

/// Banner under the input card showing the current error or notice
pub fn notice_banner(notice: &Notice) -> Element<'static, Message> {
    use crate::gui::theme;

    let (label, message, style) = match notice {
        Notice::Error(message) => ("Warning:", message.clone(), theme::NoticeContainer::Error),
        Notice::Info(message) => ("Done:", message.clone(), theme::NoticeContainer::Info),
    };

    container(
        row![text(label).size(14), text(message).size(14)]
            .spacing(6)
            .align_items(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(style)))
    .into()
}
