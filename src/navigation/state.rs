//! Detachable navigation state.

use serde::{Deserialize, Serialize};

/// The coordinator's logical state, separated from any bound surface.
///
/// Holding this between window lifetimes keeps a pending target alive while
/// no surface exists. It exposes no navigation operations; bind it to a
/// surface with [`NavigationCoordinator::from_state`](super::NavigationCoordinator::from_state).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Target that arrived before it could be dispatched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_target: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_serializes_empty() {
        let state = NavigationState::default();
        assert!(state.pending_target.is_none());
        assert_eq!(serde_json::to_string(&state).unwrap(), "{}");
    }

    #[test]
    fn empty_string_is_a_real_target() {
        let state = NavigationState {
            pending_target: Some(String::new()),
        };
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"pending_target":""}"#
        );
    }

    #[test]
    fn deserializes_missing_field_as_none() {
        let state: NavigationState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, NavigationState::default());

        let state: NavigationState =
            serde_json::from_str(r#"{"pending_target":"https://example.com"}"#).unwrap();
        assert_eq!(state.pending_target.as_deref(), Some("https://example.com"));
    }
}
