//! Startup navigation: chooses between onboarding, home, and content screens.
//!
//! The [`NavigationCoordinator`] holds at most one pending target and decides,
//! against the host's [`ScreenSurface`], which screen to request. A target that
//! arrives while onboarding is still required waits until onboarding finishes.

pub mod coordinator;
pub mod screen;
pub mod state;
pub mod surface;

pub use coordinator::NavigationCoordinator;
pub use screen::{Entry, Screen};
pub use state::NavigationState;
pub use surface::ScreenSurface;
