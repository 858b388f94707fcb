//! Rendering subsystem for drawing the wheel
//!
//! - Wheel rendering (card background, selection slot, items and labels)

pub mod wheel_renderer;

pub use wheel_renderer::{item_fill, paint_wheel, ItemVisual};
