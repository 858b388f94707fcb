//! Channel Wheel demo application
//!
//! Hosts a single `ChannelWheel` in an eframe window. Drag the wheel
//! horizontally to change channel; the buttons below jump straight to a
//! channel without animation. The status bar counts selection callbacks,
//! which fire on every release.
//!
//! An optional first argument replaces the built-in channels with a JSON
//! catalog: `{"names": ["RED", ...], "colors": ["#ffb6c1", ...]}`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use channel_wheel::ChannelCatalog;

mod app;
mod ui;

use app::AppState;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Demo entry point: sets up logging, reads the optional catalog and opens the window.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let catalog = match std::env::args().nth(1) {
        Some(json) => ChannelCatalog::from_json(&json).context("invalid channel catalog argument")?,
        None => ChannelCatalog::default(),
    };
    tracing::info!(channels = catalog.len(), "starting channel wheel demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 260.0])
            .with_title("Channel Wheel"),
        ..Default::default()
    };

    eframe::run_native(
        "Channel Wheel",
        options,
        Box::new(move |_cc| Ok(Box::new(ChannelWheelApp::new(catalog)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run demo window: {e}"))
}

/// The demo application: owns the state and applies panel interactions.
struct ChannelWheelApp {
    state: AppState,
}

impl ChannelWheelApp {
    fn new(catalog: ChannelCatalog) -> Self {
        Self {
            state: AppState::new(catalog),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ChannelButtonClicked(name) => {
                self.state.wheel.set_selected_channel(&name);
            }
        }
    }
}

impl eframe::App for ChannelWheelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
            ctx.request_repaint();
        }
    }
}
