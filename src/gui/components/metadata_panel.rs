//! Result panel: thumbnail, link actions and the metadata grid

use crate::fetcher::MetadataResult;
use crate::gui::app::{Message, ThumbnailState};
use iced::widget::{button, column, container, image, row, scrollable, text, Space};
use iced::{Alignment, ContentFit, Element, Font, Length};

const THUMBNAIL_HEIGHT: f32 = 280.0;

pub fn metadata_panel(
    metadata: &MetadataResult,
    thumbnail: &ThumbnailState,
    show_raw_json: bool,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let thumbnail_view: Element<'static, Message> = match thumbnail {
        ThumbnailState::Loaded(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        ThumbnailState::Loading => placeholder("Loading thumbnail..."),
        ThumbnailState::Missing | ThumbnailState::Failed => placeholder("No thumbnail"),
    };

    let thumbnail_tile = container(thumbnail_view)
        .width(Length::Fill)
        .height(Length::Fixed(THUMBNAIL_HEIGHT))
        .style(iced::theme::Container::Custom(Box::new(theme::TileContainer)));

    let link = metadata.direct_link().to_string();
    let actions = row![
        button(text("Open Link").size(14))
            .on_press(Message::OpenLink(link.clone()))
            .padding([10, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        button(text("Download").size(14))
            .on_press(Message::OpenLink(link.clone()))
            .padding([10, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::DownloadButton))),
        button(text("Copy Link").size(14))
            .on_press(Message::CopyToClipboard(link))
            .padding([10, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
    ]
    .spacing(12);

    let size_bytes = metadata
        .size_bytes()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "-".to_string());

    let grid = column![
        row![
            field_tile("File name", metadata.file_name().unwrap_or("-").to_string()),
            field_tile("Size", metadata.display_size()),
        ]
        .spacing(12),
        field_tile("Size (bytes)", size_bytes),
        field_tile("Thumbnail", metadata.thumb().unwrap_or("-").to_string()),
    ]
    .spacing(12);

    let raw_toggle = button(
        text(if show_raw_json {
            "Hide raw JSON response"
        } else {
            "Raw JSON response"
        })
        .size(13),
    )
    .on_press(Message::ToggleRawJson)
    .padding([6, 10])
    .style(iced::theme::Button::Custom(Box::new(theme::IconButton)));

    let mut details = column![text("Metadata").size(18), grid, raw_toggle].spacing(14);

    if show_raw_json {
        details = details.push(
            container(
                scrollable(
                    text(metadata.to_pretty_json())
                        .size(12)
                        .font(Font::MONOSPACE),
                )
                .height(Length::Fixed(220.0))
                .style(iced::theme::Scrollable::Custom(Box::new(
                    theme::ScrollableStyle,
                ))),
            )
            .padding(12)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(theme::TileContainer))),
        );
    }

    column![thumbnail_tile, actions, details]
        .spacing(20)
        .width(Length::Fill)
        .into()
}

fn field_tile(label: &str, value: String) -> Element<'static, Message> {
    use crate::gui::theme;

    container(
        column![
            text(label.to_string())
                .size(12)
                .style(iced::theme::Text::Color(theme::GRAY_400)),
            text(value).size(14),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::TileContainer)))
    .into()
}

fn placeholder(label: &str) -> Element<'static, Message> {
    use crate::gui::theme;

    container(
        column![
            Space::with_height(Length::Fill),
            text(label.to_string()).style(iced::theme::Text::Color(theme::GRAY_500)),
            Space::with_height(Length::Fill),
        ]
        .align_items(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x()
    .into()
}
