//! State owned by a channel wheel.
//!
//! This module contains state-only logic (no painting, no input decoding):
//! - Selection state (which catalog entry is centred)
//! - Scroll state (continuous offset and animation target)
//! - Drag session (press origin and offset at press time)

mod selection;
mod scroll;
mod drag;

pub use selection::SelectionState;
pub use scroll::ScrollState;
pub use drag::DragSession;
