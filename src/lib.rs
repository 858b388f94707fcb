pub mod catalog;
pub mod config;
pub mod palette;
pub mod geometry;
pub mod animation;
pub mod state;
pub mod input;
pub mod rendering;
pub mod widget;

// Export the widget
pub use widget::ChannelWheel;

// Export catalog and configuration
pub use catalog::{ChannelCatalog, CatalogError, normalize_index};
pub use config::{ConfigError, WheelConfig, WHEEL_SIZE, MAX_VISIBLE_RANGE};

// Export per-frame layout
pub use geometry::{ItemRenderInfo, render_items, visible_window, round_half_up};
pub use rendering::ItemVisual;

// Export palette helpers
pub use palette::{WheelStyle, parse_hex_color, with_alpha};

// Export animation clock
pub use animation::AnimationDriver;
