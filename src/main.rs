//! Artigos Grid - Main Entry Point
//!
//! Native paginated table client for the artigos REST API

use artigos_grid::app::application::run_app;
use artigos_grid::domain::config::AppConfig;
use artigos_grid::helpers::get_or_create_log_dir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Rolling file log next to stderr; the guard flushes on exit
    let (file_writer, _guard) = match get_or_create_log_dir() {
        Ok(dir) => {
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "artigos-grid.log"));
            (Some(writer), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(file_writer.map(|writer| {
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
        }))
        .init();

    tracing::info!("Starting Artigos Grid...");

    let config = AppConfig::load_or_default();

    // Run the GPUI application
    run_app(config);
}
