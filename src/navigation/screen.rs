//! Screens the host can present and the entry requests that lead to them.

use serde::{Deserialize, Serialize};

/// A destination the coordinator can request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// The one-time onboarding flow.
    Onboarding,
    /// The default screen shown on a plain launch.
    Home,
    /// The content screen navigated to an external target.
    Content { target: String },
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Onboarding => write!(f, "onboarding"),
            Self::Home => write!(f, "home"),
            Self::Content { target } => write!(f, "content({target})"),
        }
    }
}

/// How the host was asked to navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Default launch; no specific target.
    Launch,
    /// Explicit request to open `target`.
    View { target: String },
}

impl Entry {
    /// Build an entry from the host's `(is_view_request, target)` pair.
    ///
    /// The target is ignored for non-view requests.
    pub fn from_parts(is_view_request: bool, target: impl Into<String>) -> Self {
        if is_view_request {
            Self::View {
                target: target.into(),
            }
        } else {
            Self::Launch
        }
    }

    pub fn is_view_request(&self) -> bool {
        matches!(self, Self::View { .. })
    }
}
