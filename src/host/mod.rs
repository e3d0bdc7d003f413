//! Host side: a simulated window driven by interactive commands.
//!
//! [`Host`] owns the coordinator for the lifetime of the logical window and
//! is the only caller into it, which serializes every navigation decision.

pub mod cli;
pub mod command;
pub mod window;

pub use cli::run;
pub use command::HostCommand;
pub use window::{OnboardingFlag, SimulatedWindow};

use tracing::info;

use crate::config::HostConfig;
use crate::error::Result;
use crate::navigation::{Entry, NavigationCoordinator, Screen};

/// Window-lifetime owner of the navigation coordinator.
pub struct Host {
    coordinator: NavigationCoordinator<SimulatedWindow>,
    onboarding: OnboardingFlag,
    next_window_id: u64,
    /// Entry the first window was started with; redelivered on relaunch.
    launch_entry: Entry,
}

impl Host {
    /// Create the host and its first window. No screen is requested yet.
    pub fn new(config: &HostConfig) -> Self {
        let onboarding = OnboardingFlag::new(config.onboarding_complete);
        let window = SimulatedWindow::new(1, onboarding.clone());
        Self {
            coordinator: NavigationCoordinator::new(window),
            onboarding,
            next_window_id: 2,
            launch_entry: Entry::Launch,
        }
    }

    /// Perform the entry the window was created with.
    pub fn start(&mut self, entry: Entry) {
        self.launch_entry = entry.clone();
        self.coordinator.handle_entry(entry);
    }

    pub fn window(&self) -> &SimulatedWindow {
        self.coordinator.surface()
    }

    /// Parse and apply one line of input.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>> {
        let command: HostCommand = line.parse()?;
        Ok(self.apply(command))
    }

    /// Apply one command. Returns the text to print, or `None` to quit.
    pub fn apply(&mut self, command: HostCommand) -> Option<String> {
        match command {
            HostCommand::Launch => self.coordinator.handle_entry(Entry::Launch),
            HostCommand::View(target) => self.coordinator.handle_entry(Entry::View { target }),
            HostCommand::Record(target) => self.coordinator.record_target(target),
            HostCommand::Share(text) => self.share(text),
            HostCommand::Dispatch => self.coordinator.dispatch_if_ready(),
            HostCommand::Finish => {
                self.onboarding.mark_complete();
                self.coordinator.onboarding_finished();
            }
            HostCommand::Recreate => self.recreate_window(),
            HostCommand::Relaunch => self.relaunch(),
            HostCommand::Status => return Some(self.status().to_string()),
            HostCommand::Quit => return None,
        }
        Some(self.summary())
    }

    /// Record shared text as the pending target, then dispatch it once the
    /// window resumes. Empty text leaves any pending target untouched.
    fn share(&mut self, text: String) {
        if text.is_empty() {
            info!("Ignoring empty share");
        } else {
            self.coordinator.record_target(text);
        }
        self.coordinator.dispatch_if_ready();
    }

    /// Reopen from recent apps: a new window receives the original entry
    /// again, downgraded to a plain launch when no content session is active.
    fn relaunch(&mut self) {
        let session_active = matches!(self.window().current(), Some(Screen::Content { .. }));
        self.recreate_window();
        let entry = if session_active {
            self.launch_entry.clone()
        } else {
            Entry::Launch
        };
        info!(
            session_active,
            view = entry.is_view_request(),
            "Relaunched from history"
        );
        self.coordinator.handle_entry(entry);
    }

    /// Replace the window with a fresh one, keeping navigation state.
    fn recreate_window(&mut self) {
        let id = self.next_window_id;
        self.next_window_id += 1;
        let old = self
            .coordinator
            .bind(SimulatedWindow::new(id, self.onboarding.clone()));
        info!(
            old_window = old.id(),
            new_window = id,
            pending = self.coordinator.pending_target().is_some(),
            "Window recreated"
        );
    }

    /// JSON snapshot of the window and navigation state.
    pub fn status(&self) -> serde_json::Value {
        serde_json::json!({
            "window": self.window().id(),
            "screen": self.window().current(),
            "state": self.coordinator.state(),
            "onboarding_complete": self.onboarding.is_complete(),
        })
    }

    fn summary(&self) -> String {
        let screen = self
            .window()
            .current()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(none)".to_string());
        match self.coordinator.pending_target() {
            Some(target) => format!("screen: {screen}, pending: {target}"),
            None => format!("screen: {screen}"),
        }
    }
}
