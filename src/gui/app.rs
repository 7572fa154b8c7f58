//! Main GUI application

use crate::fetcher::{MetadataFetcher, MetadataResult, MetadataSource};
use crate::gui::clipboard;
use crate::gui::views::{main_view, recovery_view, MainViewState};
use crate::inspector::{self, Inspection, Inspector};
use crate::utils::config::AppSettings;
use crate::utils::error::TeraPeekError;
use iced::widget::image;
use iced::{Application, Command, Element, Theme};
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Main application state
pub struct TeraPeekApp {
    settings: AppSettings,
    inspector: Inspector,

    // UI State
    input: String,
    loading: bool,
    notice: Option<Notice>,
    notice_seq: u64,
    metadata: Option<MetadataResult>,
    thumbnail: ThumbnailState,

    // Flags
    show_help: bool,
    show_raw_json: bool,
    faulted: Cell<bool>,
}

/// Message banner content
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Error(String),
    Info(String),
}

/// Thumbnail of the currently shown result
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    Missing,
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    InputChanged(String),
    InspectPressed,
    PasteFromClipboard,
    ClearInput,

    // Inspect events
    InspectionCompleted(Result<Inspection, Arc<TeraPeekError>>),
    ThumbnailLoaded(String, Result<Vec<u8>, Arc<TeraPeekError>>),

    // Result actions
    CopyToClipboard(String),
    OpenLink(String),

    // Chrome
    ToggleHelp,
    ToggleRawJson,
    NoticeExpired(u64),
    Reload,
}

impl TeraPeekApp {
    fn with_settings(settings: AppSettings) -> Self {
        let source: Arc<dyn MetadataSource> = Arc::new(MetadataFetcher::new(&settings));
        Self {
            settings,
            inspector: Inspector::new(source),
            input: String::new(),
            loading: false,
            notice: None,
            notice_seq: 0,
            metadata: None,
            thumbnail: ThumbnailState::Missing,
            show_help: false,
            show_raw_json: false,
            faulted: Cell::new(false),
        }
    }

    /// Show a notice; informational ones expire after the configured delay
    fn set_notice(&mut self, notice: Notice) -> Command<Message> {
        self.notice_seq += 1;
        let expires = matches!(notice, Notice::Info(_));
        self.notice = Some(notice);

        if !expires {
            return Command::none();
        }
        let seq = self.notice_seq;
        let delay = Duration::from_millis(self.settings.notice_duration_ms);
        Command::perform(
            async move { tokio::time::sleep(delay).await },
            move |_| Message::NoticeExpired(seq),
        )
    }

    fn clear_notice(&mut self) {
        self.notice_seq += 1;
        self.notice = None;
    }

    fn start_inspection(&mut self) -> Command<Message> {
        self.clear_notice();
        self.metadata = None;
        self.thumbnail = ThumbnailState::Missing;
        self.show_raw_json = false;

        let share = match inspector::prepare(&self.input) {
            Ok(share) => share,
            Err(e) => return self.set_notice(Notice::Error(e.user_message())),
        };

        if share.id != self.input.trim() {
            self.input = share.id.clone();
        }
        self.loading = true;

        let inspector = self.inspector.clone();
        Command::perform(
            async move { inspector.inspect_share(share).await.map_err(Arc::new) },
            Message::InspectionCompleted,
        )
    }

    fn load_thumbnail(&mut self) -> Command<Message> {
        let url = match self.metadata.as_ref().and_then(|m| m.thumb()) {
            Some(url) if self.settings.thumbnail_preview => url.to_string(),
            _ => {
                self.thumbnail = ThumbnailState::Missing;
                return Command::none();
            }
        };

        self.thumbnail = ThumbnailState::Loading;
        let source = self.inspector.source();
        Command::perform(
            async move {
                let result = source.fetch_thumbnail(&url).await.map_err(Arc::new);
                (url, result)
            },
            |(url, result)| Message::ThumbnailLoaded(url, result),
        )
    }

    fn page(&self) -> Element<'_, Message> {
        main_view(MainViewState {
            input: &self.input,
            loading: self.loading,
            notice: self.notice.as_ref(),
            metadata: self.metadata.as_ref(),
            thumbnail: &self.thumbnail,
            show_help: self.show_help,
            show_raw_json: self.show_raw_json,
        })
    }
}

impl Application for TeraPeekApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        info!("Starting TeraPeek with worker {}", flags.worker_base_url);
        (Self::with_settings(flags), Command::none())
    }

    fn title(&self) -> String {
        String::from("TeraPeek - Inspect Terabox/Terashare Videos")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::InputChanged(value) => {
                self.input = value;
                Command::none()
            }

            Message::InspectPressed => self.start_inspection(),

            Message::PasteFromClipboard => match clipboard::get_clipboard_content() {
                Ok(content) => {
                    self.input = content;
                    Command::none()
                }
                Err(e) => {
                    warn!("Paste failed: {}", e);
                    self.set_notice(Notice::Error(
                        "Paste failed - clipboard access is unavailable.".to_string(),
                    ))
                }
            },

            Message::ClearInput => {
                self.input.clear();
                self.clear_notice();
                Command::none()
            }

            // Inspect events
            Message::InspectionCompleted(result) => {
                self.loading = false;
                match result {
                    Ok(inspection) => {
                        self.metadata = Some(inspection.metadata);
                        self.load_thumbnail()
                    }
                    Err(e) => {
                        error!("Inspect failed: {}", e);
                        self.set_notice(Notice::Error(e.user_message()))
                    }
                }
            }

            Message::ThumbnailLoaded(url, result) => {
                let current = self.metadata.as_ref().and_then(|m| m.thumb());
                if current != Some(url.as_str()) {
                    // Stale thumbnail from an earlier inspection
                    return Command::none();
                }
                self.thumbnail = match result {
                    Ok(bytes) => ThumbnailState::Loaded(image::Handle::from_memory(bytes)),
                    Err(e) => {
                        warn!("Thumbnail unavailable: {}", e);
                        ThumbnailState::Failed
                    }
                };
                Command::none()
            }

            // Result actions
            Message::CopyToClipboard(value) => {
                let notice = copy_notice(clipboard::set_clipboard_content(&value));
                self.set_notice(notice)
            }

            Message::OpenLink(url) => {
                if let Err(e) = open::that(&url) {
                    warn!("Failed to open {}: {}", url, e);
                    return self.set_notice(Notice::Error(format!(
                        "Could not open the link in a browser: {}",
                        e
                    )));
                }
                Command::none()
            }

            // Chrome
            Message::ToggleHelp => {
                self.show_help = !self.show_help;
                Command::none()
            }

            Message::ToggleRawJson => {
                self.show_raw_json = !self.show_raw_json;
                Command::none()
            }

            Message::NoticeExpired(seq) => {
                if seq == self.notice_seq {
                    self.notice = None;
                }
                Command::none()
            }

            Message::Reload => {
                info!("Reloading application state after a UI fault");
                *self = Self::with_settings(self.settings.clone());
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        if self.faulted.get() {
            return recovery_view();
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.page())) {
            Ok(page) => page,
            Err(payload) => {
                error!("Uncaught UI error: {}", panic_message(payload.as_ref()));
                self.faulted.set(true);
                recovery_view()
            }
        }
    }

    fn theme(&self) -> Self::Theme {
        Theme::Dark
    }
}

fn copy_notice(result: Result<(), TeraPeekError>) -> Notice {
    match result {
        Ok(()) => Notice::Info("Copied to clipboard".to_string()),
        Err(e) => Notice::Error(e.user_message()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TeraPeekApp {
        TeraPeekApp::with_settings(AppSettings::default())
    }

    fn inspection(thumb: Option<&str>) -> Inspection {
        let mut body = serde_json::json!({
            "directlink": "https://d.example/video.mp4",
            "file_name": "video.mp4",
        });
        if let Some(thumb) = thumb {
            body["thumb"] = serde_json::Value::String(thumb.to_string());
        }
        Inspection {
            share: inspector::prepare("https://terabox.com/s/1abc").unwrap(),
            metadata: MetadataResult::from_value(body).unwrap(),
        }
    }

    #[test]
    fn test_blank_input_reports_error_without_loading() {
        let mut app = app();
        app.input = "   ".to_string();
        let _ = app.update(Message::InspectPressed);

        assert!(!app.loading);
        assert_eq!(
            app.notice,
            Some(Notice::Error("Please enter a video ID or share link.".to_string()))
        );
    }

    #[test]
    fn test_inspect_normalizes_input() {
        let mut app = app();
        app.input = " https://terabox.com/s/1abc?x=1 ".to_string();
        let _ = app.update(Message::InspectPressed);

        assert!(app.loading);
        assert_eq!(app.input, "1abc");
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_failed_inspection_shows_user_message() {
        let mut app = app();
        app.loading = true;
        let _ = app.update(Message::InspectionCompleted(Err(Arc::new(
            TeraPeekError::RequestFailed { status: 404 },
        ))));

        assert!(!app.loading);
        assert_eq!(
            app.notice,
            Some(Notice::Error("API request failed with status 404".to_string()))
        );
    }

    #[test]
    fn test_stale_notice_expiry_is_ignored() {
        let mut app = app();
        let _ = app.set_notice(Notice::Info("Copied to clipboard".to_string()));
        let first = app.notice_seq;
        let _ = app.set_notice(Notice::Error("later".to_string()));

        let _ = app.update(Message::NoticeExpired(first));
        assert_eq!(app.notice, Some(Notice::Error("later".to_string())));
    }

    #[test]
    fn test_reload_resets_state() {
        let mut app = app();
        app.input = "abc".to_string();
        app.show_help = true;
        app.faulted.set(true);

        let _ = app.update(Message::Reload);
        assert!(app.input.is_empty());
        assert!(!app.show_help);
        assert!(!app.faulted.get());
    }

    #[test]
    fn test_info_notice_schedules_expiry_outside_runtime() {
        let mut app = app();
        let _ = app.set_notice(Notice::Info("Copied to clipboard".to_string()));
        assert_eq!(
            app.notice,
            Some(Notice::Info("Copied to clipboard".to_string()))
        );

        let seq = app.notice_seq;
        let _ = app.update(Message::NoticeExpired(seq));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_successful_inspection_starts_thumbnail_load() {
        let mut app = app();
        app.loading = true;
        let _ = app.update(Message::InspectionCompleted(Ok(inspection(Some(
            "https://t.example/a.jpg",
        )))));

        assert!(!app.loading);
        assert!(app.metadata.is_some());
        assert!(matches!(app.thumbnail, ThumbnailState::Loading));
    }

    #[test]
    fn test_inspection_without_thumb_skips_thumbnail() {
        let mut app = app();
        let _ = app.update(Message::InspectionCompleted(Ok(inspection(None))));
        assert!(matches!(app.thumbnail, ThumbnailState::Missing));
    }

    #[test]
    fn test_stale_thumbnail_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::InspectionCompleted(Ok(inspection(Some(
            "https://t.example/new.jpg",
        )))));

        let _ = app.update(Message::ThumbnailLoaded(
            "https://t.example/old.jpg".to_string(),
            Ok(vec![0xFF, 0xD8, 0xFF]),
        ));
        assert!(matches!(app.thumbnail, ThumbnailState::Loading));

        let _ = app.update(Message::ThumbnailLoaded(
            "https://t.example/new.jpg".to_string(),
            Err(Arc::new(TeraPeekError::RequestFailed { status: 404 })),
        ));
        assert!(matches!(app.thumbnail, ThumbnailState::Failed));
    }

    #[test]
    fn test_copy_notice() {
        assert_eq!(
            copy_notice(Ok(())),
            Notice::Info("Copied to clipboard".to_string())
        );
        assert_eq!(
            copy_notice(Err(TeraPeekError::Clipboard("no display".to_string()))),
            Notice::Error(TeraPeekError::Clipboard("no display".to_string()).user_message())
        );
    }

    #[test]
    fn test_copy_to_clipboard_always_reports() {
        let mut app = app();
        let _ = app.update(Message::CopyToClipboard("https://d.example/video.mp4".to_string()));
        assert!(app.notice.is_some());
    }
}
