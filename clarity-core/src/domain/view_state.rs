// clarity-core/src/domain/view_state.rs
//
// Explicit per-view load state. The only legal transitions are
// Idle -> Loading and Loading -> {Ready, Failed}; both are one-shot.

use tracing::warn;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent<T> {
    Start,
    Loaded(T),
    LoadFailed(String),
}

impl<T> ViewState<T> {
    /// Pure reducer. Events that do not fit the current state are ignored.
    pub fn reduce(self, event: ViewEvent<T>) -> Self {
        match (self, event) {
            (Self::Idle, ViewEvent::Start) => Self::Loading,
            (Self::Loading, ViewEvent::Loaded(data)) => Self::Ready(data),
            (Self::Loading, ViewEvent::LoadFailed(reason)) => Self::Failed(reason),
            (state, _) => {
                warn!(state = state.label(), "Ignoring out-of-order view event");
                state
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// `Ready` data, or the reason the view could not be shown.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Ready(data) => Ok(data),
            Self::Failed(reason) => Err(reason),
            other => Err(format!("view is still {}", other.label())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let state = ViewState::Idle
            .reduce(ViewEvent::Start)
            .reduce(ViewEvent::Loaded(42));
        assert_eq!(state, ViewState::Ready(42));
        assert_eq!(state.data(), Some(&42));
    }

    #[test]
    fn test_failure_is_distinct_from_loading() {
        let state: ViewState<u8> = ViewState::Idle
            .reduce(ViewEvent::Start)
            .reduce(ViewEvent::LoadFailed("boom".into()));
        assert_eq!(state, ViewState::Failed("boom".into()));
        assert!(!state.is_loading());
        assert!(state.is_terminal());
    }

    #[test]
    fn test_ready_is_one_shot() {
        let state = ViewState::Loading.reduce(ViewEvent::Loaded(1));
        let state = state.reduce(ViewEvent::Start);
        let state = state.reduce(ViewEvent::Loaded(2));
        assert_eq!(state, ViewState::Ready(1));
    }

    #[test]
    fn test_load_result_before_start_is_ignored() {
        let state = ViewState::Idle.reduce(ViewEvent::Loaded(7));
        assert_eq!(state, ViewState::Idle);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ViewState::Ready(3).into_result(), Ok(3));
        assert_eq!(
            ViewState::<u8>::Failed("x".into()).into_result(),
            Err("x".to_string())
        );
        assert!(ViewState::<u8>::Loading.into_result().is_err());
    }
}
