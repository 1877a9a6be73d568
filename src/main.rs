mod config;
mod engine;
mod model;
mod ui;

use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::engine::llm_client::GeminiClient;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load()?;
    tracing::info!(?config, "configuration loaded");

    let backend = GeminiClient::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Community Copywiz")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Community Copywiz",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Light);
            ui::fonts::install_cjk_font(&cc.egui_ctx, config.font_path.as_deref());
            Ok(Box::new(ui::app::CopywizApp::new(Box::new(backend))))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
