//! Pointer drag session.
//!
//! A session lives from pointer press to pointer release and remembers where
//! the gesture started so every move can be measured from the press point.

/// State of an in-progress drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    /// Whether the pointer is currently held on the wheel
    is_dragging: bool,
    /// Widget-local x where the press happened
    start_x: f32,
    /// Scroll offset at the moment of the press
    start_offset: f32,
}

impl DragSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self {
            is_dragging: false,
            start_x: 0.0,
            start_offset: 0.0,
        }
    }

    /// Returns true if a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Starts a gesture at `x` with the wheel currently at `offset`.
    pub fn begin(&mut self, x: f32, offset: f32) {
        self.is_dragging = true;
        self.start_x = x;
        self.start_offset = offset;
    }

    /// Ends the gesture. Returns whether one was in progress.
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.is_dragging, false)
    }

    /// Offset implied by the pointer being at `x`, before clamping.
    ///
    /// Returns `None` when no gesture is in progress.
    ///
    /// # Arguments
    /// * `x` - Current widget-local pointer x
    /// * `slot_width` - Pointer travel that corresponds to one slot
    pub fn offset_at(&self, x: f32, slot_width: f32) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        let delta = x - self.start_x;
        Some(self.start_offset - delta / slot_width)
    }
}
