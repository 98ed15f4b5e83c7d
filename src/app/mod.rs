// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the scan session, the submission controller,
//! localization and notifications together, and translates messages into
//! side effects such as reading a file or posting an image.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::cancellation::CancellationToken;
use crate::application::submission::SubmissionController;
use crate::config::{self, Config};
use crate::domain::scan::ScanSession;
use crate::error::Result;
use crate::i18n::I18n;
use crate::infrastructure::http::HttpPredictionClient;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications;
use crate::ui::results::ResultView;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Controller type used by the running application.
pub type Controller = SubmissionController<HttpPredictionClient>;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: ScanSession<Handle>,
    /// Display model of the result panel, refreshed after every session change.
    result_view: ResultView,
    /// `None` when the configured endpoint is unusable.
    controller: Option<Controller>,
    /// Cancels the submission currently tracked by the session.
    in_flight: Option<CancellationToken>,
    theme_mode: ThemeMode,
    spinner_rotation: f32,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_selection", &self.session.selection().is_some())
            .field("request", &self.session.request())
            .field("has_controller", &self.controller.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::WINDOW_MIN_WIDTH,
            sizing::WINDOW_MIN_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the submission controller for the configured (or overridden) endpoint.
///
/// # Errors
///
/// Returns [`crate::error::Error::Transport`] if the endpoint URL is invalid.
pub fn build_controller(config: &Config, endpoint_override: Option<&str>) -> Result<Controller> {
    let endpoint = endpoint_override.unwrap_or(&config.analysis.endpoint);
    let client = HttpPredictionClient::new(endpoint, config.analysis.request_timeout())?;
    log::info!("Prediction endpoint: {}", client.endpoint());
    Ok(SubmissionController::new(
        client,
        config.analysis.retry_policy(),
    ))
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            session: ScanSession::new(),
            result_view: ResultView::Placeholder,
            controller: None,
            in_flight: None,
            theme_mode: ThemeMode::System,
            spinner_rotation: 0.0,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally starts loading the image
    /// passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        match build_controller(&config, flags.endpoint.as_deref()) {
            Ok(controller) => app.controller = Some(controller),
            Err(err) => {
                log::error!("{err}");
                let endpoint = flags
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| config.analysis.endpoint.clone());
                app.notifications.push(
                    notifications::Notification::error("notification-invalid-endpoint")
                        .with_arg("endpoint", endpoint),
                );
            }
        }

        let task = match flags.file_path {
            Some(path) => update::load_file(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.selected_image() {
            Some(image) => format!("{} - {app_name}", image.file_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.session.is_submitting(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            session: &mut self.session,
            controller: self.controller.as_ref(),
            in_flight: &mut self.in_flight,
            spinner_rotation: &mut self.spinner_rotation,
            notifications: &mut self.notifications,
        };

        let task = update::handle_message(&mut ctx, message);
        self.result_view = ResultView::from_session(&self.session);
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            result: &self.result_view,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
