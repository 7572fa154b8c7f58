//! Main view implementation

use crate::fetcher::MetadataResult;
use crate::gui::app::{Message, Notice, ThumbnailState};
use crate::gui::components::{help_panel, metadata_panel, notice_banner, share_input};
use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

pub const REPO_URL: &str = "https://github.com/saahiyo/tera-peek";
pub const CREDIT_LINE: &str = "© 2025 TeraPeek. Made with ❤ by saahiyo";

/// Everything the main view renders, borrowed from the application state
pub struct MainViewState<'a> {
    pub input: &'a str,
    pub loading: bool,
    pub notice: Option<&'a Notice>,
    pub metadata: Option<&'a MetadataResult>,
    pub thumbnail: &'a ThumbnailState,
    pub show_help: bool,
    pub show_raw_json: bool,
}

/// Create the main view
pub fn main_view(state: MainViewState<'_>) -> Element<'static, Message> {
    use crate::gui::theme;

    let header = row![
        column![
            text("TeraPeek")
                .size(34)
                .style(iced::theme::Text::Color(theme::INDIGO_400)),
            text("Inspect Terabox/Terashare videos - paste a link or ID to preview, fetch metadata, and download.")
                .size(14)
                .style(iced::theme::Text::Color(theme::GRAY_400)),
        ]
        .spacing(6)
        .width(Length::Fill),
        row![
            button(text("Repo").size(14))
                .on_press(Message::OpenLink(REPO_URL.to_string()))
                .padding([8, 16])
                .style(iced::theme::Button::Custom(Box::new(theme::PillButton))),
            button(text(if state.show_help { "Help ▲" } else { "Help ▼" }).size(14))
                .on_press(Message::ToggleHelp)
                .padding([8, 16])
                .style(iced::theme::Button::Custom(Box::new(theme::PillButton))),
        ]
        .spacing(8),
    ]
    .spacing(16)
    .align_items(Alignment::Start);

    let has_error = matches!(state.notice, Some(Notice::Error(_)));
    let mut input_card = column![
        text("Terabox video id or link").size(14),
        share_input(state.input, state.loading, has_error),
    ]
    .spacing(12);

    if let Some(notice) = state.notice {
        input_card = input_card.push(notice_banner(notice));
    }

    input_card = input_card.push(
        text("Paste a full Terabox/Terashare share link or just the ID - the app will auto-extract it. This tool uses a public worker API, so availability may vary.")
            .size(12)
            .style(iced::theme::Text::Color(theme::GRAY_500)),
    );

    let result_content: Element<'static, Message> = match state.metadata {
        Some(metadata) => metadata_panel(metadata, state.thumbnail, state.show_raw_json),
        None => container(
            column![
                text("No video loaded yet").size(20),
                text("Enter a link or ID and press Inspect to view metadata and preview the video.")
                    .size(14)
                    .style(iced::theme::Text::Color(theme::GRAY_500)),
            ]
            .spacing(8)
            .align_items(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(260.0))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(
            theme::EmptyStateContainer,
        )))
        .into(),
    };

    let mut page = Column::new().spacing(28).max_width(900.0).push(header);
    if state.show_help {
        page = page.push(help_panel());
    }
    page = page
        .push(card(input_card.into()))
        .push(card(result_content))
        .push(footer());

    scrollable(
        container(page)
            .width(Length::Fill)
            .padding([40, 24])
            .center_x(),
    )
    .height(Length::Fill)
    .style(iced::theme::Scrollable::Custom(Box::new(
        theme::ScrollableStyle,
    )))
    .into()
}

fn card(content: Element<'static, Message>) -> Element<'static, Message> {
    use crate::gui::theme;

    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
        .into()
}

fn footer() -> Element<'static, Message> {
    use crate::gui::theme;

    let hint = |line: &str| {
        text(line.to_string())
            .size(13)
            .style(iced::theme::Text::Color(theme::GRAY_500))
    };

    column![
        text("How to get the id").size(15),
        hint("1. Paste the full Terabox/Terashare share link or just the id."),
        hint("2. The app automatically extracts the id segment after /s/."),
        hint("3. Click Inspect to fetch metadata."),
        Space::with_height(6),
        hint("This app uses a public worker proxy - avoid pasting sensitive links. For production, host your own proxy with server-side protection."),
        Space::with_height(6),
        button(hint(CREDIT_LINE))
            .on_press(Message::OpenLink("https://github.com/saahiyo".to_string()))
            .padding(0)
            .style(iced::theme::Button::Text),
    ]
    .spacing(4)
    .into()
}
