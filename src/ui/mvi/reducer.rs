//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer that transforms state based on intents and emits effect
/// commands.
///
/// The reducer is the only place where state transitions happen, and it
/// must be pure: effects are returned as data, never executed here. The
/// dispatching caller owns execution (spawning network calls, moving
/// focus), so transition logic stays testable in isolation.
pub trait EffectReducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect commands this reducer can emit.
    type Effect;

    /// Process an intent, returning the new state plus any effects the
    /// caller must carry out.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>);
}
