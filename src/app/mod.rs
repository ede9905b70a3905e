// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the session view, the
//! camera panel, and persisted preferences.
//!
//! The `App` struct wires the components together and translates their
//! events into side effects like config persistence or the snapshot save
//! dialog. Policy decisions (window bounds, which preferences persist,
//! when the camera is forced off) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::camera::Facing;
use crate::config::{self, Config};
use crate::content::StepKind;
use crate::i18n::fluent::I18n;
use crate::ui::session::Session;
use crate::ui::{camera_panel, snapshot_panel, troubleshooting};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use tracing::warn;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    session: Session,
    camera: camera_panel::State,
    snapshot: snapshot_panel::State,
    troubleshooting: troubleshooting::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.session.mode())
            .field("step_index", &self.session.step_index())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let camera = camera_panel::State::new(
            config.camera_facing.unwrap_or(Facing::Front),
            config.mirror_preview.unwrap_or(true),
        );
        Self {
            i18n: I18n::default(),
            config,
            session: Session::default(),
            camera,
            snapshot: snapshot_panel::State::new(),
            troubleshooting: troubleshooting::State::new(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and
    /// launcher `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load() {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "could not load settings, starting with defaults");
                Config::default()
            }
        };
        let i18n = I18n::new(flags.lang, &config);
        let camera = camera_panel::State::new(
            config.camera_facing.unwrap_or(Facing::Front),
            config.mirror_preview.unwrap_or(true),
        );

        let app = App {
            i18n,
            config,
            camera,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// The camera preview is the only live subscription, and it only exists
    /// while the user is on the camera-capture step.
    fn subscription(&self) -> Subscription<Message> {
        match self.session.current_step().map(|step| step.kind) {
            Some(StepKind::CameraCapture) => self.camera.subscription().map(Message::Camera),
            _ => Subscription::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            camera: &self.camera,
            snapshot: &self.snapshot,
            troubleshooting: &self.troubleshooting,
        })
    }
}
