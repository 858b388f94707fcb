//! Tunables for wheel geometry, drag response and snap animation.
//!
//! `WheelConfig::default()` reproduces the stock wheel. Hosts can override
//! individual values from JSON; missing fields keep their defaults. Every
//! configuration is checked by [`WheelConfig::validate`] before a wheel uses
//! it, so the geometry and animation math only ever see finite, positive
//! sizes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed outer size of the widget in logical points.
pub const WHEEL_SIZE: egui::Vec2 = egui::Vec2::new(290.0, 80.0);

/// Largest accepted `visible_range`, in slots either side of centre.
pub const MAX_VISIBLE_RANGE: f32 = 64.0;

/// Errors raised while loading or validating a [`WheelConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid wheel config: {field} = {value} ({reason})")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid wheel config document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Geometry, drag and animation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Width of one item slot at full scale
    pub item_width: f32,
    /// Height of an item at full scale
    pub item_height: f32,
    /// Pointer travel per slot, as a multiple of `item_width`
    pub drag_sensitivity: f32,
    /// Offset is clamped to `[-max_offset, max_offset]` while dragging
    pub max_offset: f32,
    /// Items further than this many slots from centre are not drawn
    pub visible_range: f32,
    /// Fraction of the remaining distance covered per animation tick
    pub animation_speed: f32,
    /// Below this distance the animation settles exactly on its target
    pub animation_threshold: f32,
    /// Snaps larger than this re-centre the offset around the new selection
    pub offset_reset_threshold: f32,
    pub min_scale: f32,
    pub scale_factor: f32,
    pub min_alpha: f32,
    pub alpha_factor: f32,
    /// Vertical drop per slot of distance from centre
    pub y_offset_factor: f32,
    pub base_font_size: f32,
    pub min_font_size: f32,
    /// Period of the animation tick in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            item_width: 70.0,
            item_height: 50.0,
            drag_sensitivity: 1.2,
            max_offset: 6.0,
            visible_range: 4.5,
            animation_speed: 0.15,
            animation_threshold: 0.001,
            offset_reset_threshold: 0.1,
            min_scale: 0.5,
            scale_factor: 0.25,
            min_alpha: 0.2,
            alpha_factor: 0.3,
            y_offset_factor: 3.0,
            base_font_size: 15.0,
            min_font_size: 10.0,
            tick_interval_ms: 16,
        }
    }
}

impl WheelConfig {
    /// Parses a (possibly partial) configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value keeps the wheel math finite and bounded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f32); 6] = [
            ("item_width", self.item_width),
            ("item_height", self.item_height),
            ("drag_sensitivity", self.drag_sensitivity),
            ("animation_threshold", self.animation_threshold),
            ("base_font_size", self.base_font_size),
            ("min_font_size", self.min_font_size),
        ];
        for (field, value) in positive {
            check(field, value, value > 0.0, "must be greater than 0")?;
        }

        let non_negative: [(&'static str, f32); 6] = [
            ("max_offset", self.max_offset),
            ("offset_reset_threshold", self.offset_reset_threshold),
            ("scale_factor", self.scale_factor),
            ("alpha_factor", self.alpha_factor),
            ("y_offset_factor", self.y_offset_factor),
            ("min_scale", self.min_scale),
        ];
        for (field, value) in non_negative {
            check(field, value, value >= 0.0, "must not be negative")?;
        }

        check(
            "visible_range",
            self.visible_range,
            (0.0..=MAX_VISIBLE_RANGE).contains(&self.visible_range),
            "must be between 0 and 64",
        )?;
        check(
            "animation_speed",
            self.animation_speed,
            self.animation_speed > 0.0 && self.animation_speed <= 1.0,
            "must be in (0, 1]",
        )?;
        check(
            "min_alpha",
            self.min_alpha,
            (0.0..=1.0).contains(&self.min_alpha),
            "must be between 0 and 1",
        )?;

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                value: 0.0,
                reason: "must be greater than 0",
            });
        }
        Ok(())
    }

    /// Horizontal pointer travel that moves the wheel by one slot.
    pub fn drag_slot_width(&self) -> f32 {
        self.item_width * self.drag_sensitivity
    }

    /// Period of the animation tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Rejects `value` unless it is finite and `ok` holds.
fn check(field: &'static str, value: f32, ok: bool, reason: &'static str) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::Invalid {
            field,
            value: f64::from(value),
            reason: "must be finite",
        });
    }
    if !ok {
        return Err(ConfigError::Invalid {
            field,
            value: f64::from(value),
            reason,
        });
    }
    Ok(())
}
