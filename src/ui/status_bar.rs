//! Status bar UI rendering
//!
//! Shows the wheel's current channel and the selection callback log.

use egui::RichText;

use crate::app::AppState;

/// Renders the status line at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let log = state.log.borrow();
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Selected: {}", state.wheel.selected_channel())).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Callbacks: {}", log.count)).strong());
        if let Some(last) = &log.last {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Last reported: {last}")).strong());
        }
        if state.wheel.is_animating() {
            ui.label(RichText::new("| animating").color(egui::Color32::YELLOW));
        }
    });
}
