//! Custom theme definitions for the application - Dark Theme

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// --- Dark Color Palette ---

// Page background - neutral 900 to 950
pub const BACKGROUND_START: Color = Color::from_rgb(0.090, 0.090, 0.090);
pub const BACKGROUND_END: Color = Color::from_rgb(0.039, 0.039, 0.039);

// Card surfaces
pub const NEUTRAL_800: Color = Color::from_rgb(0.149, 0.149, 0.149);
pub const NEUTRAL_700: Color = Color::from_rgb(0.251, 0.251, 0.251);
pub const NEUTRAL_900: Color = Color::from_rgb(0.090, 0.090, 0.090);

// Primary colors - Indigo
pub const INDIGO_600: Color = Color::from_rgb(0.310, 0.275, 0.898); // Primary actions
pub const INDIGO_500: Color = Color::from_rgb(0.388, 0.400, 0.945); // Hover state
pub const INDIGO_400: Color = Color::from_rgb(0.506, 0.549, 0.973); // Accent text

// Success color - Green
pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.290);
pub const GREEN_700: Color = Color::from_rgb(0.082, 0.502, 0.239);
pub const GREEN_300: Color = Color::from_rgb(0.525, 0.937, 0.675);

// Danger color - Red
pub const RED_300: Color = Color::from_rgb(0.988, 0.647, 0.647); // Danger text
pub const RED_800: Color = Color::from_rgb(0.600, 0.106, 0.106); // Danger border
pub const RED_900_30: Color = Color::from_rgba(0.498, 0.114, 0.114, 0.3); // Danger background

// Gray scale for text
pub const GRAY_100: Color = Color::from_rgb(0.961, 0.961, 0.961); // Primary text
pub const GRAY_300: Color = Color::from_rgb(0.831, 0.831, 0.831); // Secondary text
pub const GRAY_400: Color = Color::from_rgb(0.639, 0.639, 0.639); // Labels
pub const GRAY_500: Color = Color::from_rgb(0.451, 0.451, 0.451); // Hints

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

pub const TEXT_PRIMARY: Color = GRAY_100;
pub const TEXT_SECONDARY: Color = GRAY_400;

// --- Container Styles ---

pub struct MainGradientContainer;

impl container::StyleSheet for MainGradientContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356)) // 135 degrees
                    .add_stop(0.0, BACKGROUND_START)
                    .add_stop(1.0, BACKGROUND_END),
            ))),
            ..Default::default()
        }
    }
}

/// Rounded card used for the input and result sections
pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(NEUTRAL_800)),
            border: Border {
                color: NEUTRAL_700,
                width: 1.0,
                radius: 16.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        }
    }
}

/// Inner tile for metadata fields, thumbnails and raw JSON
pub struct TileContainer;

impl container::StyleSheet for TileContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(NEUTRAL_900)),
            border: Border {
                color: NEUTRAL_700,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Dashed-looking placeholder shown before anything is inspected
pub struct EmptyStateContainer;

impl container::StyleSheet for EmptyStateContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_SECONDARY),
            background: None,
            border: Border {
                color: NEUTRAL_700,
                width: 2.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        }
    }
}

pub enum NoticeContainer {
    Error,
    Info,
}

impl container::StyleSheet for NoticeContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (text_color, background, border) = match self {
            Self::Error => (RED_300, RED_900_30, RED_800),
            Self::Info => (
                GREEN_300,
                Color::from_rgba(0.086, 0.639, 0.290, 0.15),
                GREEN_700,
            ),
        };
        container::Appearance {
            text_color: Some(text_color),
            background: Some(Background::Color(background)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(INDIGO_600)),
            text_color: WHITE,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.310, 0.275, 0.898, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(INDIGO_500)),
            ..active
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(Color {
                a: 0.5,
                ..INDIGO_600
            })),
            text_color: Color { a: 0.7, ..WHITE },
            shadow: Shadow::default(),
            ..active
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: GRAY_300,
            border: Border {
                radius: 12.0.into(),
                color: NEUTRAL_700,
                width: 1.0,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(NEUTRAL_700)),
            ..active
        }
    }
}

pub struct DownloadButton;

impl button::StyleSheet for DownloadButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(GREEN_600)),
            text_color: WHITE,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(GREEN_700)),
            ..active
        }
    }
}

/// Rounded "pill" buttons in the header
pub struct PillButton;

impl button::StyleSheet for PillButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(NEUTRAL_700)),
            text_color: GRAY_100,
            border: Border {
                radius: 999.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb(0.322, 0.322, 0.322))),
            ..active
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: GRAY_400,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: GRAY_100,
            background: Some(Background::Color(NEUTRAL_700)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(Color::TRANSPARENT),
            border: Border {
                radius: 12.0.into(),
                width: 1.0,
                color: NEUTRAL_700,
            },
            icon_color: GRAY_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: INDIGO_500,
                width: 2.0,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_500
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_100
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.388, 0.400, 0.945, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(NEUTRAL_900),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_500
    }
}

pub struct InputErrorStyle;

impl text_input::StyleSheet for InputErrorStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(Color::TRANSPARENT),
            border: Border {
                radius: 12.0.into(),
                width: 2.0,
                color: RED_800,
            },
            icon_color: RED_300,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_500
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_100
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.937, 0.267, 0.267, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(NEUTRAL_900),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_500
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.388, 0.400, 0.945, 0.3),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if is_mouse_over_scrollbar {
            scrollable::Appearance {
                scrollbar: scrollable::Scrollbar {
                    scroller: scrollable::Scroller {
                        color: Color::from_rgba(0.388, 0.400, 0.945, 0.5),
                        ..active.scrollbar.scroller
                    },
                    ..active.scrollbar
                },
                ..active
            }
        } else {
            active
        }
    }
}
