//! Navigation coordinator: decides between onboarding, home, and content.
//!
//! Owns a single mutable fact, the pending target, and arbitrates every
//! navigation request against the surface's onboarding answer. Onboarding
//! status is never cached; it is re-queried at each decision point.

use tracing::{debug, info, warn};

use super::screen::Entry;
use super::state::NavigationState;
use super::surface::ScreenSurface;

/// Decides which screen the window presents on startup and on new requests.
///
/// A coordinator always holds a surface, so every operation has somewhere to
/// send its effect. To keep the pending target across window recreation,
/// either [`bind`](Self::bind) the new surface or [`detach`](Self::detach)
/// and later re-attach with [`from_state`](Self::from_state).
#[derive(Debug)]
pub struct NavigationCoordinator<S> {
    pending_target: Option<String>,
    surface: S,
}

impl<S: ScreenSurface> NavigationCoordinator<S> {
    /// Create a coordinator with no pending target.
    pub fn new(surface: S) -> Self {
        Self::from_state(NavigationState::default(), surface)
    }

    /// Re-attach previously detached state to a surface.
    pub fn from_state(state: NavigationState, surface: S) -> Self {
        Self {
            pending_target: state.pending_target,
            surface,
        }
    }

    /// Replace the bound surface, returning the previous one.
    ///
    /// The pending target is kept.
    pub fn bind(&mut self, surface: S) -> S {
        debug!(
            pending = self.pending_target.is_some(),
            "Rebinding navigation surface"
        );
        std::mem::replace(&mut self.surface, surface)
    }

    /// Split the coordinator into its state and its surface.
    pub fn detach(self) -> (NavigationState, S) {
        let state = NavigationState {
            pending_target: self.pending_target,
        };
        (state, self.surface)
    }

    pub fn pending_target(&self) -> Option<&str> {
        self.pending_target.as_deref()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NavigationState {
        NavigationState {
            pending_target: self.pending_target.clone(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Store `target` for later dispatch, replacing any earlier one.
    ///
    /// Has no effect on the surface.
    pub fn record_target(&mut self, target: impl Into<String>) {
        let target = target.into();
        if let Some(previous) = self.pending_target.as_deref() {
            debug!(previous = %previous, target = %target, "Replacing pending target");
        } else {
            debug!(target = %target, "Recording pending target");
        }
        self.pending_target = Some(target);
    }

    /// Show the content screen for the pending target, unless onboarding blocks it.
    ///
    /// The target is cleared in the same step it is dispatched. With no
    /// pending target, or while onboarding is required, nothing happens.
    pub fn dispatch_if_ready(&mut self) {
        if self.pending_target.is_none() {
            return;
        }
        if self.surface.should_show_onboarding() {
            debug!("Onboarding required, keeping target pending");
            return;
        }
        self.dispatch_pending();
    }

    /// Take the pending target and show it. Onboarding must already be known
    /// not to be required.
    fn dispatch_pending(&mut self) {
        if let Some(target) = self.pending_target.take() {
            info!(target = %target, "Dispatching pending target");
            self.surface.show_content(&target);
        }
    }

    /// Called by the host once the onboarding flow completes.
    ///
    /// Dispatches the pending target if there is one, otherwise shows home.
    pub fn onboarding_finished(&mut self) {
        if self.pending_target.is_none() {
            debug!("Onboarding finished, showing home");
            self.surface.show_home();
            return;
        }

        self.dispatch_if_ready();

        if let Some(target) = self.pending_target.as_deref() {
            warn!(
                target = %target,
                "Onboarding finished but surface still requires onboarding; target stays pending"
            );
        }
    }

    /// Single entry point for a launch or an explicit view request.
    pub fn handle_entry(&mut self, entry: Entry) {
        let onboarding_required = self.surface.should_show_onboarding();
        debug!(
            view = entry.is_view_request(),
            onboarding_required, "Handling navigation entry"
        );

        match (entry, onboarding_required) {
            (Entry::View { target }, true) => {
                self.record_target(target);
                self.surface.show_onboarding();
            }
            (Entry::View { target }, false) => {
                self.record_target(target);
                self.dispatch_pending();
            }
            (Entry::Launch, true) => self.surface.show_onboarding(),
            (Entry::Launch, false) => self.surface.show_home(),
        }
    }
}
