//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                     │
//!    └──── Effects ────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effect**: Command emitted by a reducer for the caller to execute
//!   (network writes, focus moves); the reducer itself never performs IO

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::EffectReducer;
pub use state::UiState;
