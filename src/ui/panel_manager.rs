//! Panel layout for the demo window.
//!
//! - Bottom: status bar
//! - Centre: the channel wheel and one button per channel for direct selection

use crate::app::AppState;
use crate::ui::status_bar::render_status_bar;

/// Result of user interaction with the panels
pub enum PanelInteraction {
    /// A direct-selection button was clicked
    ChannelButtonClicked(String),
}

/// Manages the rendering of all UI panels
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels and returns the interaction, if any
    ///
    /// # Arguments
    /// * `ctx` - The egui context
    /// * `state` - Mutable application state (the wheel handles its own input)
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            render_status_bar(ui, state);
        });

        let mut interaction = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                let response = state.wheel.show(ui);
                if response.changed() {
                    tracing::debug!(channel = state.wheel.selected_channel(), "wheel snapped");
                }

                ui.add_space(16.0);
                ui.label("Jump to channel:");
                ui.horizontal_wrapped(|ui| {
                    for name in state.channel_names() {
                        let selected = name == state.wheel.selected_channel();
                        if ui.selectable_label(selected, name.as_str()).clicked() {
                            interaction = Some(PanelInteraction::ChannelButtonClicked(name));
                        }
                    }
                });
            });
        });

        interaction
    }
}
