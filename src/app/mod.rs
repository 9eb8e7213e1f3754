// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog screens.
//!
//! The `App` struct wires together the domains (API client, favorites,
//! image cache, localization) and translates messages into side effects
//! like route changes, favorites persistence or image fetches. Every remote
//! call a screen makes goes through the one shared [`Client`].

pub mod config;
pub mod images;
mod message;
pub mod paths;
pub mod route;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{Client, FilterOptions};
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::Toasts;
use crate::ui::theming::ThemeMode;
use config::{ApiConfig, Config};
use iced::{window, Element, Subscription, Task, Theme};
use images::ImageCache;
use route::{History, Route};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    client: Client,
    favorites: FavoritesStore,
    images: ImageCache,
    /// Option lists of the filter panel; empty until fetched.
    filter_options: FilterOptions,
    history: History,
    screen: Screen,
    /// Current text of the header search box.
    search_input: String,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: Toasts,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", self.history.current())
            .field("favorites", &self.favorites.len())
            .field("cached_images", &self.images.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
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

/// Everything the application needs before its window opens.
///
/// Built once by [`Startup::prepare`]; iced may call the boot function more
/// than once, so each call receives a clone.
#[derive(Debug, Clone)]
pub struct Startup {
    lang: Option<String>,
    route: Route,
    config: Config,
    /// Warnings raised while preparing, shown as toasts once the app runs.
    warnings: Vec<String>,
    client: Client,
    /// Data directory for the favorites store; `None` resolves the default.
    data_dir: Option<PathBuf>,
}

impl Startup {
    /// Loads the configuration and builds the API client.
    ///
    /// An `[api]` section the client rejects falls back to the default API
    /// settings with a warning.
    pub fn prepare(flags: Flags) -> Result<Self> {
        let (mut config, config_warning) = config::load();
        let mut warnings: Vec<String> = config_warning.into_iter().collect();

        let client = match Client::new(&config.api) {
            Ok(client) => client,
            Err(error) => {
                tracing::warn!(%error, "unusable [api] settings; using defaults");
                warnings.push("notification-api-config-error".to_string());
                config.api = ApiConfig::default();
                Client::new(&config.api)?
            }
        };

        let route = flags
            .route
            .as_deref()
            .map(Route::parse)
            .unwrap_or_default();

        Ok(Self {
            lang: flags.lang,
            route,
            config,
            warnings,
            client,
            data_dir: None,
        })
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(startup: Startup) -> iced::Result {
    iced::application(move || App::new(startup.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the first requests: the
    /// start route's listing and the filter panel options.
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            lang,
            route,
            config,
            warnings,
            client,
            data_dir,
        } = startup;

        let i18n = I18n::new(lang, &config);
        let (favorites, favorites_warning) = FavoritesStore::load_from(data_dir);

        let mut app = App {
            i18n,
            images: ImageCache::new(config.catalog.image_cache_capacity),
            theme_mode: config.general.theme_mode,
            config,
            client,
            favorites,
            filter_options: FilterOptions::default(),
            history: History::new(route.clone()),
            screen: Screen::for_route(&route),
            search_input: String::new(),
            notifications: Toasts::new(),
        };

        // Show warnings for config/storage loading issues
        for key in warnings.into_iter().chain(favorites_warning) {
            app.notifications.warn(key);
        }

        tracing::info!(
            %route,
            locale = %app.i18n.current_locale(),
            favorites = app.favorites.len(),
            "starting"
        );

        let client = app.client.clone();
        let filter_options = Task::perform(
            async move { client.filter_options().await },
            Message::FilterOptionsLoaded,
        );

        let load = update::load_screen(&mut app.update_context());
        (app, Task::batch([load, filter_options]))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.history.current() {
            Route::Search(query) => format!("{query} - {app_name}"),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::toast_ticks(self.notifications.is_active())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            config: &self.config,
            client: &self.client,
            screen: &mut self.screen,
            history: &mut self.history,
            favorites: &mut self.favorites,
            images: &mut self.images,
            filter_options: &mut self.filter_options,
            search_input: &mut self.search_input,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        let task = match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Catalog(catalog_message) => {
                update::handle_catalog_message(&mut ctx, catalog_message)
            }
            Message::Sets(sets_message) => update::handle_sets_message(&mut ctx, sets_message),
            Message::Favorites(favorites_message) => {
                update::handle_favorites_message(&mut ctx, favorites_message)
            }
            Message::CardDetail(detail_message) => {
                update::handle_card_detail_message(&mut ctx, detail_message)
            }
            Message::NotFound(not_found_message) => {
                update::handle_not_found_message(&mut ctx, not_found_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::FilterOptionsLoaded(result) => {
                update::handle_filter_options_loaded(&mut ctx, result);
                Task::none()
            }
            Message::ImageLoaded { url, result } => {
                update::handle_image_loaded(&mut ctx, url, result);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.expire(now);
                Task::none()
            }
        };

        // Whatever changed, the images now on screen should be on their way
        let images = update::fetch_images(&mut ctx);
        Task::batch([task, images])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            current: self.history.current(),
            search_input: &self.search_input,
            favorites: &self.favorites,
            images: &self.images,
            filter_options: &self.filter_options,
            notifications: &self.notifications,
            columns: self.config.catalog.grid_columns,
        })
    }
}
