//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn validated settings into a ready coordinator
//! - Wire the registry, publisher and host control together
//!
//! # Design Decisions
//! - One coordinator per process, shared by handle with every adapter
//! - Unset paths are not fatal: the registry reads as empty and publishing
//!   fails, so every change is refused with a notice

use std::sync::Arc;

use crate::config::PluginSettings;
use crate::coordinator::{ChangeCoordinator, ServerControl};
use crate::publish::FilePublisher;
use crate::registry::ConfigRegistry;

/// Build the process-wide coordinator from startup settings.
pub fn build_coordinator(
    settings: &PluginSettings,
    control: Arc<dyn ServerControl>,
) -> Arc<ChangeCoordinator> {
    let cfg = &settings.mapchange;

    tracing::info!(
        configuration_file = %cfg.configuration_file,
        output_file = %cfg.output_file,
        "Map change initialized"
    );

    let registry = ConfigRegistry::new(&cfg.configuration_file);
    let publisher = FilePublisher::new(&cfg.output_file);

    Arc::new(ChangeCoordinator::new(registry, Box::new(publisher), control))
}
