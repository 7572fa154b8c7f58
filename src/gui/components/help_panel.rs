//! Quick tips and FAQ panel

use crate::gui::app::Message;
use iced::widget::{column, container, text, Column};
use iced::{Element, Length};

const QUICK_TIPS: [&str; 4] = [
    "Paste any Terabox/Terashare share link - the app will auto-extract the ID",
    "Works with terabox.com, terasharelink.com, and similar domains",
    "Click \"Inspect\" to fetch metadata and preview the video",
    "Use \"Open Link\" to view in browser or \"Download\" to save",
];

const FAQ: [(&str, &str); 3] = [
    ("Is this tool free?", "Yes, it's completely free to use."),
    (
        "Do I need to create an account?",
        "No, just paste the link and start using it immediately.",
    ),
    ("Are downloads unlimited?", "Yes, there are no usage restrictions."),
];

pub fn help_panel() -> Element<'static, Message> {
    use crate::gui::theme;

    let tips = QUICK_TIPS.iter().fold(Column::new().spacing(6), |col, tip| {
        col.push(
            text(format!("• {}", tip))
                .size(13)
                .style(iced::theme::Text::Color(theme::GRAY_300)),
        )
    });

    let faq = FAQ.iter().fold(Column::new().spacing(10), |col, (q, a)| {
        col.push(
            column![
                text(format!("Q: {}", q)).size(13),
                text(format!("A: {}", a))
                    .size(13)
                    .style(iced::theme::Text::Color(theme::GRAY_400)),
            ]
            .spacing(2),
        )
    });

    container(
        column![
            text("Quick Tips").size(15),
            tips,
            text("FAQ").size(15),
            faq,
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::TileContainer)))
    .into()
}
