use serde::Serialize;

use crate::errors::Result;

/// Per-view fetch state machine: Idle -> Loading -> Loaded | Error.
///
/// The pure aggregation work happens inside the value carried by `Loaded`;
/// the async orchestration only ever moves between these states, so a view
/// can render a skeleton for `Loading` and a fallback for `Error` without
/// touching the domain types.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "camelCase")]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> ViewState<T> {
    /// Collapses a fetch outcome into the terminal states.
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => ViewState::Loaded(value),
            Err(err) => ViewState::Error(err.to_string()),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ViewState<U> {
        match self {
            ViewState::Idle => ViewState::Idle,
            ViewState::Loading => ViewState::Loading,
            ViewState::Loaded(value) => ViewState::Loaded(f(value)),
            ViewState::Error(message) => ViewState::Error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_from_result_maps_both_arms() {
        let loaded = ViewState::from_result(Ok(42));
        assert_eq!(loaded.loaded(), Some(&42));

        let failed: ViewState<i32> =
            ViewState::from_result(Err(Error::Unexpected("boom".to_string())));
        assert!(failed.error().unwrap().contains("boom"));
    }

    #[test]
    fn test_default_is_idle() {
        let state: ViewState<()> = ViewState::default();
        assert!(state.is_idle());
    }

    #[test]
    fn test_map_preserves_non_loaded_states() {
        let state: ViewState<i32> = ViewState::Loading;
        assert!(state.map(|v| v * 2).is_loading());
        assert_eq!(ViewState::Loaded(21).map(|v| v * 2).loaded(), Some(&42));
    }
}
