//! Plugin entry points for a game server host.

use std::path::Path;
use std::sync::Arc;

use crate::config::{load_or_default, PluginSettings};
use crate::coordinator::{ActorId, ChangeCoordinator};
use crate::host::{commands, polls, Command, Host, LifecycleEvent};
use crate::lifecycle::build_coordinator;

/// The map change plugin: one per server process.
///
/// The host registers [`MapChangePlugin::commands`] and
/// [`MapChangePlugin::poll_type`] at load time, forwards matching
/// dispatches to the entry points below, and removes the registrations on
/// unload.
#[derive(Debug, Clone)]
pub struct MapChangePlugin {
    coordinator: Arc<ChangeCoordinator>,
    host: Arc<dyn Host>,
}

impl MapChangePlugin {
    pub const NAME: &'static str = "Map Change";

    /// Load settings (if any) and build the plugin.
    pub fn init<H: Host + 'static>(settings_path: Option<&Path>, host: Arc<H>) -> Self {
        Self::with_settings(&load_or_default(settings_path), host)
    }

    pub fn with_settings<H: Host + 'static>(settings: &PluginSettings, host: Arc<H>) -> Self {
        let coordinator = build_coordinator(settings, host.clone());
        Self { coordinator, host }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Slash command names to register.
    pub fn commands(&self) -> Vec<&'static str> {
        Command::ALL.iter().map(Command::name).collect()
    }

    /// Poll type and parameter label to register.
    pub fn poll_type(&self) -> (&'static str, &'static str) {
        (polls::POLL_TYPE, polls::POLL_PARAMETER)
    }

    pub fn coordinator(&self) -> &Arc<ChangeCoordinator> {
        &self.coordinator
    }

    pub fn handle_event(&self, event: LifecycleEvent) {
        event.apply(self.coordinator.match_gate());
    }

    /// Returns false when the command is not one of ours.
    pub fn slash_command(&self, actor: ActorId, command: &str, params: &[String]) -> bool {
        let Some(command) = Command::from_name(command) else {
            return false;
        };

        commands::dispatch(&self.coordinator, self.host.as_ref(), actor, command, params);
        true
    }

    pub fn poll_open(&self, actor: ActorId, action: &str, parameters: &str) -> bool {
        polls::open(&self.coordinator, self.host.as_ref(), actor, action, parameters)
    }

    pub fn poll_close(&self, action: &str, parameters: &str, passed: bool) {
        polls::close(&self.coordinator, self.host.as_ref(), action, parameters, passed);
    }
}
