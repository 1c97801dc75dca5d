//! Slash command adapters.
//!
//! | Command      | Operation      | Requires                       |
//! |--------------|----------------|--------------------------------|
//! | `/maplist`   | list-configs   | nothing                        |
//! | `/mapchange` | change-config  | `mapchange` permission + op    |
//! | `/maprandom` | random-config  | `mapchange` permission + op    |

use crate::coordinator::{ActorId, ChangeCoordinator, ChangeError, ChangeResult};
use crate::host::{Host, PERM_MAPCHANGE};

pub const USAGE: &str = "Usage: /mapchange <confname>";

/// Commands owned by the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ChangeConfig,
    ListConfigs,
    RandomConfig,
}

impl Command {
    pub const ALL: [Command; 3] = [
        Command::ChangeConfig,
        Command::ListConfigs,
        Command::RandomConfig,
    ];

    /// Name the command is registered under with the host.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ChangeConfig => "mapchange",
            Command::ListConfigs => "maplist",
            Command::RandomConfig => "maprandom",
        }
    }

    /// Look up a command by its registered name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
    }

    pub fn is_privileged(&self) -> bool {
        !matches!(self, Command::ListConfigs)
    }
}

/// Run one command for `actor`. Every reply goes to `actor` only.
pub fn dispatch(
    coordinator: &ChangeCoordinator,
    host: &dyn Host,
    actor: ActorId,
    command: Command,
    params: &[String],
) {
    if !command.is_privileged() {
        list_configs(coordinator, host, actor);
        return;
    }

    if !(host.has_permission(actor, PERM_MAPCHANGE) && host.is_operator(actor)) {
        tracing::info!(actor = %actor, command = command.name(), "Permission denied");
        host.send_message(
            actor,
            &format!(
                "You do not have permission to run the /{} command",
                command.name()
            ),
        );
        return;
    }

    if coordinator.match_gate().is_match_active() {
        host.send_message(actor, &ChangeError::MatchInProgress.notice());
        return;
    }

    let result = match (command, params) {
        (Command::RandomConfig, _) => coordinator.request_random(actor),
        (Command::ChangeConfig, [name]) => coordinator.request_change(name, actor),
        _ => {
            host.send_message(actor, USAGE);
            return;
        }
    };

    report(host, actor, result);
}

fn list_configs(coordinator: &ChangeCoordinator, host: &dyn Host, actor: ActorId) {
    let names = coordinator.registry().list_names();

    if names.is_empty() {
        host.send_message(actor, &ChangeError::NoConfigurationsAvailable.notice());
        return;
    }

    host.send_message(actor, "Available configurations: ");
    for name in names {
        host.send_message(actor, &format!(" - {name}"));
    }
}

/// Tell the requestor why a change did not happen.
pub(crate) fn report(host: &dyn Host, actor: ActorId, result: ChangeResult) {
    if let Err(e) = result {
        host.send_message(actor, &e.notice());
    }
}
