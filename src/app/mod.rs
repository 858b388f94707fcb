//! Application-level modules for the channel wheel demo.

mod app_state;

pub use app_state::{AppState, SelectionLog};
