//! Simulated window: a `ScreenSurface` that records what it was asked to show.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::navigation::{Screen, ScreenSurface};

/// Onboarding completion as reported by the host's collaborator.
///
/// Shared between the host and every window it creates, so the answer
/// outlives any single window.
#[derive(Debug, Clone, Default)]
pub struct OnboardingFlag(Arc<AtomicBool>);

impl OnboardingFlag {
    pub fn new(complete: bool) -> Self {
        Self(Arc::new(AtomicBool::new(complete)))
    }

    pub fn is_complete(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn mark_complete(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// A window that keeps the history of screens it presented.
#[derive(Debug)]
pub struct SimulatedWindow {
    id: u64,
    onboarding: OnboardingFlag,
    history: Vec<Screen>,
}

impl SimulatedWindow {
    pub fn new(id: u64, onboarding: OnboardingFlag) -> Self {
        Self {
            id,
            onboarding,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// The screen currently on display, if any was requested yet.
    pub fn current(&self) -> Option<&Screen> {
        self.history.last()
    }

    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    fn present(&mut self, screen: Screen) {
        info!(window = self.id, screen = %screen, "Showing screen");
        self.history.push(screen);
    }
}

impl ScreenSurface for SimulatedWindow {
    fn should_show_onboarding(&self) -> bool {
        !self.onboarding.is_complete()
    }

    fn show_content(&mut self, target: &str) {
        self.present(Screen::Content {
            target: target.to_string(),
        });
    }

    fn show_home(&mut self) {
        self.present(Screen::Home);
    }

    fn show_onboarding(&mut self) {
        self.present(Screen::Onboarding);
    }
}
