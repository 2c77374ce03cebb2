//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::features::artigos::ArtigosPage;
use crate::i18n::{t, Locale};
use crate::query::{QueryClient, RetryPolicy};
use crate::services::{ArtigosApi, HttpArtigosApi};

actions!(artigos_grid, [Quit]);

/// Run the artigos grid application
pub fn run_app(config: AppConfig) {
    let api: Arc<dyn ArtigosApi> = match HttpArtigosApi::new(&config.base_url, config.request_timeout()) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return;
        }
    };
    let client = QueryClient::new(
        config.cache_capacity,
        RetryPolicy::with_max_retries(config.max_retries),
    );

    info!(base_url = %config.base_url, page_size = config.page_size, "Artigos backend configured");

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let locale = Locale::from_tag(config.locale());
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app-title")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let page = cx.new(|cx| ArtigosPage::new(&config, client.clone(), api.clone(), window, cx));
            cx.new(|cx| Root::new(page, window, cx))
        });
        if let Err(e) = opened {
            error!("Failed to open main window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
