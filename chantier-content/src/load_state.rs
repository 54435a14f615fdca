//! Load-state adapter for reactive views.
//!
//! A view starts in `Loading` and settles exactly once into `Ready` or
//! `Failed`. A new request restarts the cycle. Generation tokens keep a
//! fetch that outlives its view from clobbering state that no longer
//! belongs to it.

use chantier_core::ContentError;

/// Observable state of one in-flight or completed load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Token identifying one load request against a [`LoadSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
}

/// Generation-guarded state cell.
///
/// `begin` hands out a token and resets the slot to `Loading`; `resolve`
/// applies a result only while its token is still current and the slot has
/// not already settled. `cancel` retires all outstanding tokens, so a result
/// arriving after the view is torn down is discarded.
#[derive(Debug, Default)]
pub struct LoadSlot<T> {
    state: LoadState<T>,
    generation: u64,
    settled: bool,
}

impl<T> LoadSlot<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            generation: 0,
            settled: false,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Start a new load cycle.
    pub fn begin(&mut self) -> LoadToken {
        self.generation += 1;
        self.settled = false;
        self.state = LoadState::Loading;
        LoadToken {
            generation: self.generation,
        }
    }

    /// Apply a load result. Returns false (and leaves the slot untouched)
    /// when the token is stale or the slot already settled this cycle.
    pub fn resolve(&mut self, token: LoadToken, result: Result<T, ContentError>) -> bool {
        if token.generation != self.generation || self.settled {
            return false;
        }
        self.settled = true;
        self.state = match result {
            Ok(data) => LoadState::Ready(data),
            Err(err) => LoadState::Failed(err.to_string()),
        };
        true
    }

    /// Retire all outstanding tokens without changing the visible state.
    /// Called when the consuming view is torn down.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.settled = true;
    }
}
