//! Wheel painting
//!
//! Draws the card background, the highlighted selection slot and every
//! visible item. Painting reads the per-frame layout only and never mutates
//! widget state.

use egui::{Align2, Color32, FontId, Rect};

use crate::config::WheelConfig;
use crate::geometry::ItemRenderInfo;
use crate::palette::{with_alpha, WheelStyle};

/// One laid-out item together with what it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual<'a> {
    pub info: ItemRenderInfo,
    pub label: &'a str,
    /// Catalog colour of the channel, fully opaque
    pub color: Color32,
}

/// Base fill of an item before its distance fade is applied.
///
/// The centred item keeps its catalog colour; the others are drawn with the
/// style's reduced alpha.
pub fn item_fill(color: Color32, centered: bool, style: &WheelStyle) -> Color32 {
    if centered {
        color
    } else {
        with_alpha(color, style.unselected_alpha)
    }
}

/// Paints a full frame of the wheel.
///
/// # Arguments
/// * `painter` - Painter clipped to the wheel
/// * `rect` - Screen rectangle of the wheel
/// * `items` - Items laid out for this frame
/// * `style` - Fixed colours and radii
/// * `config` - Geometry used for the selection slot
pub fn paint_wheel(
    painter: &egui::Painter,
    rect: Rect,
    items: &[ItemVisual<'_>],
    style: &WheelStyle,
    config: &WheelConfig,
) {
    painter.rect_filled(rect, style.background_rounding, style.background);

    let slot = Rect::from_center_size(
        rect.center(),
        egui::vec2(
            config.item_width + style.highlight_padding * 2.0,
            config.item_height + style.highlight_padding * 2.0,
        ),
    );
    painter.rect_filled(slot, style.highlight_rounding, style.selection_highlight);

    for item in items {
        paint_item(painter, item, style);
    }
}

fn paint_item(painter: &egui::Painter, item: &ItemVisual<'_>, style: &WheelStyle) {
    let info = &item.info;
    let fill = item_fill(item.color, info.centered, style).gamma_multiply(info.alpha);
    painter.rect_filled(info.rect, style.item_rounding, fill);

    painter.text(
        info.center,
        Align2::CENTER_CENTER,
        item.label,
        FontId::proportional(info.font_size),
        style.text.gamma_multiply(info.alpha),
    );
}
