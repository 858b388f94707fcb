//! Wheel input handling for press, drag and release.
//!
//! egui reports pointer state per frame; this module turns it into the
//! gesture events the wheel understands:
//! - Press on the wheel starts a drag session at the press origin
//! - Pointer movement while held updates the drag
//! - Releasing the pointer ends the session and triggers the snap
//! - A press and release that both land inside one frame is reported as a
//!   tap, which the wheel treats as press immediately followed by release

/// Gesture event derived from one frame of pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelInput {
    /// Nothing relevant happened
    None,
    /// Pointer went down on the wheel at widget-local `x`
    PressStarted { x: f32 },
    /// Pointer is held and currently at widget-local `x`
    Dragged { x: f32 },
    /// Pointer was released after a press on the wheel
    Released,
    /// Press and release happened within a single frame
    Tapped,
}

/// Derives the gesture event for this frame.
///
/// # Arguments
/// * `ctx` - The egui context for pointer access
/// * `rect` - Screen rectangle of the wheel (for widget-local coordinates)
/// * `response` - The wheel's interaction response
/// * `is_dragging` - Whether a drag session is already open
pub fn handle_wheel_input(
    ctx: &egui::Context,
    rect: egui::Rect,
    response: &egui::Response,
    is_dragging: bool,
) -> WheelInput {
    let held_on_wheel = response.is_pointer_button_down_on();

    if !is_dragging {
        if held_on_wheel {
            // Measure from where the button went down, not where it is now.
            let origin = ctx
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            return match origin {
                Some(pos) => WheelInput::PressStarted { x: pos.x - rect.min.x },
                None => WheelInput::None,
            };
        }
        if response.clicked() {
            return WheelInput::Tapped;
        }
        return WheelInput::None;
    }

    if held_on_wheel {
        match response.interact_pointer_pos() {
            Some(pos) => WheelInput::Dragged { x: pos.x - rect.min.x },
            None => WheelInput::None,
        }
    } else {
        WheelInput::Released
    }
}
