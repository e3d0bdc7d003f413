//! Startup navigation: decides between onboarding, home, and content screens.

pub mod config;
pub mod error;
pub mod host;
pub mod navigation;
