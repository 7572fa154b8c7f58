//! Application initialization and main entry point

use crate::gui::{icon, TeraPeekApp};
use crate::utils::config::AppSettings;
use anyhow::Result;
use iced::{Application, Settings};

/// Run the TeraPeek window until it is closed
pub fn run(app_settings: AppSettings) -> Result<()> {
    TeraPeekApp::run(Settings {
        window: iced::window::Settings {
            size: iced::Size::new(960.0, 760.0),
            min_size: Some(iced::Size::new(640.0, 480.0)),
            icon: icon::load_icon(),
            ..Default::default()
        },
        antialiasing: true,
        ..Settings::with_flags(app_settings)
    })?;

    Ok(())
}
