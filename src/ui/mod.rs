//! UI panel rendering for the demo.

pub mod panel_manager;
pub mod status_bar;
