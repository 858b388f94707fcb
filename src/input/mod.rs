//! Input handling modules.
//!
//! Translates egui pointer state into the wheel's press / drag / release
//! gestures.

pub mod wheel_input_handler;

pub use wheel_input_handler::{handle_wheel_input, WheelInput};
