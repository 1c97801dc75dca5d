//! Poll adapters.

use crate::coordinator::{ActorId, ChangeCoordinator};
use crate::host::commands::report;
use crate::host::{Host, PERM_MAPCHANGE, PERM_POLL_MAPCHANGE};

/// Poll type registered with the host.
pub const POLL_TYPE: &str = "mapchange";

/// Label of the poll's single parameter.
pub const POLL_PARAMETER: &str = "mapname";

/// Host asks whether `actor` may open a poll. Returns true to let it open.
pub fn open(
    coordinator: &ChangeCoordinator,
    host: &dyn Host,
    actor: ActorId,
    action: &str,
    name: &str,
) -> bool {
    if !action.eq_ignore_ascii_case(POLL_TYPE) {
        return false;
    }

    if !(host.has_permission(actor, PERM_POLL_MAPCHANGE) && host.has_permission(actor, PERM_MAPCHANGE)) {
        host.send_message(actor, "You do not have permissions to initiate a mapchange poll.");
        return false;
    }

    if !coordinator.open_poll(actor, name) {
        host.send_message(actor, &format!("The {name} map configuration does not exist."));
        return false;
    }

    true
}

/// Host reports the end of a poll.
pub fn close(coordinator: &ChangeCoordinator, host: &dyn Host, action: &str, name: &str, passed: bool) {
    if !action.eq_ignore_ascii_case(POLL_TYPE) {
        return;
    }

    let requestor = coordinator.pending_requestor();
    if let (Some(result), Some(requestor)) = (coordinator.close_poll(name, passed), requestor) {
        report(host, requestor, result);
    }
}
