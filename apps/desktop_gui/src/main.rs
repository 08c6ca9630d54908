mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{ProjectsClient, ShowcaseConfig};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{theme, ShowcaseApp};

const COMMAND_QUEUE_CAPACITY: usize = 256;
const EVENT_QUEUE_CAPACITY: usize = 2048;

#[derive(Parser, Debug)]
#[command(about = "Desktop gallery of portfolio projects")]
struct Args {
    /// Overrides the project listing endpoint from showcase.toml / environment.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = ShowcaseConfig::load()?;
    if let Some(api_url) = &args.api_url {
        config.set_api_url(api_url)?;
    }
    tracing::info!(api_url = %config.api_url, "starting showcase");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE_CAPACITY);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(EVENT_QUEUE_CAPACITY);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, ProjectsClient::new(config.api_url.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Projects Showcase")
            .with_inner_size([1024.0, 760.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Projects Showcase",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(theme::showcase_visuals());
            Ok(Box::new(ShowcaseApp::bootstrap(cmd_tx, ui_rx, &config)))
        }),
    )
    .map_err(|err| anyhow!("showcase window failed: {err}"))
}
