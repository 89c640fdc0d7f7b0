//! P & B Advogados Associados
//!
//! Launches the single-page site with the configuration from `site.json`.

use pb_site::config::{load_config, CONFIG_FILE};
use pb_site::logging::init_tracing;
use std::path::Path;
use tracing::info;

fn main() {
    init_tracing("info");
    let config = load_config(Path::new(CONFIG_FILE));
    info!(
        asset_base = %config.asset_base,
        nav_threshold = config.nav_scroll_threshold_px,
        "Starting site"
    );
    launch(config);
}

#[cfg(feature = "desktop")]
fn launch(config: pb_site::config::SiteConfig) {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let window = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(pb_site::content::FIRM_NAME)
                .with_inner_size(LogicalSize::new(1280.0, 860.0))
                .with_resizable(true),
        )
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .launch(pb_site::App);
}

#[cfg(not(feature = "desktop"))]
fn launch(config: pb_site::config::SiteConfig) {
    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(pb_site::App);
}
