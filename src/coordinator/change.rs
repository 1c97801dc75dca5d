//! The change coordinator.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::coordinator::types::{ActorId, ChangeError, ChangeKind, ChangeReceipt, ChangeResult};
use crate::coordinator::ServerControl;
use crate::lifecycle::MatchGate;
use crate::observability::metrics;
use crate::publish::OutputPublisher;
use crate::registry::ConfigRegistry;

/// Orchestrates configuration changes for one server process.
#[derive(Debug)]
pub struct ChangeCoordinator {
    registry: ConfigRegistry,
    publisher: Box<dyn OutputPublisher>,
    control: Arc<dyn ServerControl>,
    gate: MatchGate,
    pub(crate) pending: Mutex<Option<ActorId>>,
}

impl ChangeCoordinator {
    pub fn new(
        registry: ConfigRegistry,
        publisher: Box<dyn OutputPublisher>,
        control: Arc<dyn ServerControl>,
    ) -> Self {
        Self {
            registry,
            publisher,
            control,
            gate: MatchGate::new(),
            pending: Mutex::new(None),
        }
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    pub fn match_gate(&self) -> &MatchGate {
        &self.gate
    }

    /// Change to the configuration registered under `name`.
    pub fn request_change(&self, name: &str, requestor: ActorId) -> ChangeResult {
        self.change_named(ChangeKind::Named, name, requestor)
    }

    /// Change to a randomly selected configuration.
    pub fn request_random(&self, requestor: ActorId) -> ChangeResult {
        let result = self.ensure_no_match().and_then(|()| {
            let entry = self
                .registry
                .pick_random()
                .ok_or(ChangeError::NoConfigurationsAvailable)?;

            tracing::debug!(name = %entry.name, path = %entry.path, "Random configuration picked");
            self.apply(ChangeKind::Random, entry.path, requestor)
        });

        self.record(ChangeKind::Random, requestor, &result);
        result
    }

    pub(crate) fn change_named(&self, kind: ChangeKind, name: &str, requestor: ActorId) -> ChangeResult {
        let result = self.ensure_no_match().and_then(|()| {
            let path = self
                .registry
                .resolve(name)
                .ok_or_else(|| ChangeError::UnknownConfiguration {
                    name: name.to_string(),
                })?;

            self.apply(kind, path, requestor)
        });

        self.record(kind, requestor, &result);
        result
    }

    fn ensure_no_match(&self) -> Result<(), ChangeError> {
        if self.gate.is_match_active() {
            return Err(ChangeError::MatchInProgress);
        }
        Ok(())
    }

    /// Publish, announce, then ask the host to restart.
    fn apply(&self, kind: ChangeKind, path: String, requestor: ActorId) -> ChangeResult {
        self.publisher.publish(&path)?;

        let callsign = self
            .control
            .callsign(requestor)
            .unwrap_or_else(|| "unknown".to_string());

        let announcement = match kind {
            ChangeKind::Random => format!(
                "Server restarting with randomly selected configuration ({path}): Requested by {callsign}"
            ),
            ChangeKind::Named | ChangeKind::Poll => {
                format!("Server restarting with configuration {path}: Requested by {callsign}")
            }
        };
        self.control.broadcast(&announcement);
        self.control.request_restart();

        Ok(ChangeReceipt {
            request_id: Uuid::new_v4(),
            kind,
            path,
            requestor,
        })
    }

    fn record(&self, kind: ChangeKind, requestor: ActorId, result: &ChangeResult) {
        match result {
            Ok(receipt) => {
                tracing::info!(
                    request_id = %receipt.request_id,
                    kind = kind.as_str(),
                    requestor = %requestor,
                    path = %receipt.path,
                    "Configuration change accepted"
                );
                metrics::record_change(kind, "success");
            }
            Err(ChangeError::Publish(e)) => {
                tracing::error!(kind = kind.as_str(), requestor = %requestor, error = %e, "Configuration change aborted");
                metrics::record_change(kind, "publish_failed");
            }
            Err(e) => {
                tracing::info!(kind = kind.as_str(), requestor = %requestor, reason = %e, "Configuration change refused");
                metrics::record_change(kind, e.label());
            }
        }
    }
}
