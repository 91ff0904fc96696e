// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the showcase screen to localization, configuration
//! and the platform URI handler, and translates screen events into side
//! effects such as launching the mail client.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::platform::{self, SystemUriOpener, UriOpener};
use crate::presentation::RotationAnimator;
use crate::ui::showcase;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    showcase: showcase::State,
    theme: Theme,
    uri_opener: Arc<dyn UriOpener>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("showcase", &self.showcase)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and localization, then builds the screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let app = Self::with_opener(i18n, &config, Arc::new(SystemUriOpener));
        tracing::info!(
            locale = %app.i18n.current_locale(),
            features = ?config.features,
            "showcase ready"
        );
        (app, Task::none())
    }

    /// Builds the application around a specific URI handler.
    pub fn with_opener(
        i18n: I18n,
        config: &config::Config,
        uri_opener: Arc<dyn UriOpener>,
    ) -> Self {
        let animator = RotationAnimator::new(
            config.animation.rotation_duration(),
            config.animation.easing(),
        );
        Self {
            i18n,
            showcase: showcase::State::new(config.features, platform::platform_name(), animator),
            theme: config.general.theme_mode.resolve(),
            uri_opener,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.showcase.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            showcase: &mut self.showcase,
            uri_opener: &self.uri_opener,
        };

        match message {
            Message::Showcase(showcase_message) => {
                update::handle_showcase_message(&mut ctx, showcase_message)
            }
            Message::Tick(now) => {
                ctx.showcase.tick(now);
                Task::none()
            }
            Message::EmailDispatched(result) => {
                update::handle_email_dispatched(&mut ctx, result);
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                tracing::info!(?id, "window close requested, exiting");
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            showcase: &self.showcase,
        })
    }
}
