//! Per-item layout math for the wheel.
//!
//! This module provides pure functions for:
//! - Rounding the continuous offset to a whole slot
//! - Finding the window of slot positions that can be on screen
//! - Deriving each item's position, size, scale, opacity and font size
//!   from its signed distance to the centre slot
//!
//! Nothing here is cached; the renderer recomputes every frame.

use std::ops::RangeInclusive;

use egui::{Pos2, Rect};

use crate::catalog::normalize_index;
use crate::config::WheelConfig;

/// Rounds half-way values up (toward positive infinity).
///
/// `round_half_up(0.5) == 1.0`, `round_half_up(-0.5) == 0.0`.
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Integer slot positions that may be visible for the given offset.
///
/// # Arguments
/// * `offset` - Current scroll offset in slots
/// * `visible_range` - Slots drawn on either side of centre
pub fn visible_window(offset: f32, visible_range: f32) -> RangeInclusive<i64> {
    let min = (-visible_range - offset).floor() as i64;
    let max = (visible_range - offset).ceil() as i64;
    min..=max
}

/// Layout of one item for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRenderInfo {
    /// Catalog index shown in this slot
    pub channel_index: usize,
    /// Integer slot relative to the selection
    pub position: i64,
    /// `position + offset`
    pub actual_position: f32,
    /// Centre of the item on screen
    pub center: Pos2,
    /// Item box, scaled and centred on `center`
    pub rect: Rect,
    pub scale: f32,
    pub alpha: f32,
    /// `|actual_position|`
    pub distance: f32,
    /// Vertical depth displacement
    pub y_offset: f32,
    pub font_size: f32,
    /// Whether this is the item sitting in the selection slot
    pub centered: bool,
}

/// Computes the layout of one item.
///
/// # Arguments
/// * `position` - Integer slot relative to the selection
/// * `actual_position` - `position + offset`
/// * `channel_index` - Catalog index resolved for this slot
/// * `center` - Centre of the widget
/// * `config` - Wheel geometry parameters
pub fn item_render_info(
    position: i64,
    actual_position: f32,
    channel_index: usize,
    center: Pos2,
    config: &WheelConfig,
) -> ItemRenderInfo {
    let distance = actual_position.abs();
    let scale = (1.0 - distance * config.scale_factor).max(config.min_scale);
    let alpha = (1.0 - distance * config.alpha_factor).max(config.min_alpha);
    let y_offset = distance * config.y_offset_factor;

    let item_center = egui::pos2(
        center.x + actual_position * config.item_width,
        center.y + y_offset,
    );
    let rect = Rect::from_center_size(
        item_center,
        egui::vec2(config.item_width * scale, config.item_height * scale),
    );
    let font_size = (config.base_font_size * scale).floor().max(config.min_font_size);

    ItemRenderInfo {
        channel_index,
        position,
        actual_position,
        center: item_center,
        rect,
        scale,
        alpha,
        distance,
        y_offset,
        font_size,
        centered: distance < config.offset_reset_threshold,
    }
}

/// Lays out every item that falls inside the visible range.
///
/// Items are returned in slot order, left to right.
///
/// # Arguments
/// * `center` - Centre of the widget
/// * `selected_index` - Catalog index of the current selection
/// * `offset` - Current scroll offset in slots
/// * `catalog_len` - Number of channels to wrap around
/// * `config` - Wheel geometry parameters
pub fn render_items(
    center: Pos2,
    selected_index: usize,
    offset: f32,
    catalog_len: usize,
    config: &WheelConfig,
) -> Vec<ItemRenderInfo> {
    if catalog_len == 0 {
        return Vec::new();
    }

    visible_window(offset, config.visible_range)
        .filter_map(|position| {
            let actual_position = position as f32 + offset;
            if actual_position.abs() > config.visible_range {
                return None;
            }
            let channel_index = normalize_index(selected_index as i64 + position, catalog_len);
            Some(item_render_info(position, actual_position, channel_index, center, config))
        })
        .collect()
}
