//! Scroll offset and animation target.
//!
//! Both values are measured in item slots relative to the selection slot.
//! Positive offsets shift items to the right.

/// Continuous scroll position and the value it is easing toward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Current offset, clamped while dragging
    offset: f32,
    /// Goal of the snap animation
    target_offset: f32,
}

impl ScrollState {
    /// Creates a scroll state at rest on the selection.
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            target_offset: 0.0,
        }
    }

    // ===== Queries =====

    /// Returns the current offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns the animation target.
    pub fn target_offset(&self) -> f32 {
        self.target_offset
    }

    /// Distance still to cover before reaching the target.
    pub fn remaining(&self) -> f32 {
        (self.offset - self.target_offset).abs()
    }

    // ===== Mutations =====

    /// Sets the offset, clamped to `[-max_offset, max_offset]`.
    pub fn set_offset_clamped(&mut self, offset: f32, max_offset: f32) {
        self.offset = offset.clamp(-max_offset, max_offset);
    }

    /// Sets the animation target.
    pub fn set_target(&mut self, target: f32) {
        self.target_offset = target;
    }

    /// Puts offset and target back to zero.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.target_offset = 0.0;
    }

    /// Re-centres the coordinate frame after a snap of `rounded` slots.
    ///
    /// The visual position is unchanged: the selection index already moved
    /// by the same amount.
    pub fn fold(&mut self, rounded: f32) {
        self.offset -= rounded;
        self.target_offset = 0.0;
    }

    /// Moves `speed` of the remaining distance toward the target.
    pub fn ease_toward_target(&mut self, speed: f32) {
        self.offset += (self.target_offset - self.offset) * speed;
    }

    /// Lands exactly on the target and zeroes values within `threshold` of zero.
    pub fn settle(&mut self, threshold: f32) {
        self.offset = self.target_offset;
        if self.offset.abs() < threshold {
            self.offset = 0.0;
        }
        if self.target_offset.abs() < threshold {
            self.target_offset = 0.0;
        }
    }
}
