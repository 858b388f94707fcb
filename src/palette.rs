//! Colour helpers and the fixed visual style of the channel wheel.
//!
//! The wheel draws with a small, fixed palette (white card, lilac selection
//! slot, black labels). Channel colours themselves come from the catalog.
//!
//! # Examples
//!
//! ```
//! use channel_wheel::palette::parse_hex_color;
//!
//! let pink = parse_hex_color("#ffb6c1").unwrap();
//! assert_eq!((pink.r(), pink.g(), pink.b()), (255, 182, 193));
//! assert!(parse_hex_color("ffb6c").is_none());
//! ```

use egui::Color32;

/// Fixed colours and corner radii used when painting the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelStyle {
    /// Fill of the whole widget card
    pub background: Color32,
    /// Translucent slot drawn behind the centred item
    pub selection_highlight: Color32,
    /// Label colour for every item
    pub text: Color32,
    /// Alpha applied to the catalog colour of items that are not centred
    pub unselected_alpha: u8,
    pub background_rounding: f32,
    pub highlight_rounding: f32,
    pub item_rounding: f32,
    /// Extra space around the selection slot on every side
    pub highlight_padding: f32,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            selection_highlight: Color32::from_rgba_unmultiplied(216, 191, 216, 100),
            text: Color32::BLACK,
            unselected_alpha: 150,
            background_rounding: 5.0,
            highlight_rounding: 4.0,
            item_rounding: 3.0,
            highlight_padding: 3.0,
        }
    }
}

/// Parses a `#rrggbb` (or `rrggbb`) string into an opaque colour.
///
/// Returns `None` for anything that is not exactly six hex digits.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Replaces the alpha channel of a colour, keeping its RGB components.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
