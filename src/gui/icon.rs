//! Application icon for the TeraPeek window
//!
//! The icon is the square variant of the preview banner, drawn at startup
//! instead of being shipped as an asset.

use crate::preview::render_icon;
use iced::window;

const ICON_SIZE: u32 = 256;

/// Load the application icon for the window
///
/// Returns `None` if iced rejects the pixel data; the window then falls back
/// to the platform default icon.
pub fn load_icon() -> Option<window::Icon> {
    let rgba = render_icon(ICON_SIZE);
    match window::icon::from_rgba(rgba.into_raw(), ICON_SIZE, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("Failed to build application icon: {}", e);
            None
        }
    }
}
