//! The article board: drag-and-drop reordering and re-categorization.
//!
//! State lives in [`BoardState`], transitions in [`BoardReducer`]. The
//! reducer is pure; persistence and focus changes come back to the caller as
//! [`BoardEffect`] values.

mod intent;
mod reducer;
mod state;

pub use intent::{BoardEffect, BoardIntent};
pub use reducer::BoardReducer;
pub use state::{BoardState, DragState};
