//! Console host: drives the plugin from an operator terminal.
//!
//! The console actor holds every permission and the operator flag.
//! Notices are printed to stdout; a restart request fires the
//! [`RestartSignal`] so the session can end.

use crate::coordinator::{ActorId, ServerControl};
use crate::host::Host;
use crate::lifecycle::RestartSignal;

/// Actor id used for requests typed at the console.
pub const CONSOLE_ACTOR: ActorId = ActorId(0);

#[derive(Debug, Clone)]
pub struct ConsoleHost {
    callsign: String,
    restart: RestartSignal,
}

impl ConsoleHost {
    pub fn new(callsign: impl Into<String>, restart: RestartSignal) -> Self {
        Self {
            callsign: callsign.into(),
            restart,
        }
    }
}

impl ServerControl for ConsoleHost {
    fn callsign(&self, actor: ActorId) -> Option<String> {
        (actor == CONSOLE_ACTOR).then(|| self.callsign.clone())
    }

    fn broadcast(&self, message: &str) {
        println!("[all] {message}");
    }

    fn request_restart(&self) {
        self.restart.trigger();
    }
}

impl Host for ConsoleHost {
    fn send_message(&self, _to: ActorId, message: &str) {
        println!("{message}");
    }

    fn has_permission(&self, actor: ActorId, _permission: &str) -> bool {
        actor == CONSOLE_ACTOR
    }

    fn is_operator(&self, actor: ActorId) -> bool {
        actor == CONSOLE_ACTOR
    }
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// `/command args...`
    Slash { command: String, params: Vec<String> },
    /// `match start` / `match end`
    Match(bool),
    /// `poll open <name>`
    PollOpen(String),
    /// `poll close <name> pass|fail`
    PollClose { name: String, passed: bool },
    Quit,
    Blank,
}

impl ConsoleInput {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ConsoleInput::Blank);
        }

        if let Some(rest) = line.strip_prefix('/') {
            let mut words = rest.split_whitespace().map(str::to_string);
            let command = words.next().unwrap_or_default();
            return Ok(ConsoleInput::Slash {
                command,
                params: words.collect(),
            });
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["match", "start"] => Ok(ConsoleInput::Match(true)),
            ["match", "end"] => Ok(ConsoleInput::Match(false)),
            ["poll", "open", name] => Ok(ConsoleInput::PollOpen(name.to_string())),
            ["poll", "close", name, outcome] => match *outcome {
                "pass" => Ok(ConsoleInput::PollClose { name: name.to_string(), passed: true }),
                "fail" => Ok(ConsoleInput::PollClose { name: name.to_string(), passed: false }),
                other => Err(format!("unknown poll outcome: {other}")),
            },
            ["quit"] | ["exit"] => Ok(ConsoleInput::Quit),
            _ => Err(format!("unrecognized input: {line}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_console_input() {
        assert_eq!(
            ConsoleInput::parse("/mapchange arena1").unwrap(),
            ConsoleInput::Slash {
                command: "mapchange".into(),
                params: vec!["arena1".into()]
            }
        );
        assert_eq!(ConsoleInput::parse("  ").unwrap(), ConsoleInput::Blank);
        assert_eq!(ConsoleInput::parse("match start").unwrap(), ConsoleInput::Match(true));
        assert_eq!(ConsoleInput::parse("match end").unwrap(), ConsoleInput::Match(false));
        assert_eq!(
            ConsoleInput::parse("poll close arena1 pass").unwrap(),
            ConsoleInput::PollClose { name: "arena1".into(), passed: true }
        );
        assert!(ConsoleInput::parse("poll close arena1 maybe").is_err());
        assert!(ConsoleInput::parse("dance").is_err());
        assert_eq!(ConsoleInput::parse("quit").unwrap(), ConsoleInput::Quit);
    }

    #[test]
    fn test_console_permissions() {
        let host = ConsoleHost::new("admin", RestartSignal::new());
        assert!(host.has_permission(CONSOLE_ACTOR, "mapchange"));
        assert!(host.is_operator(CONSOLE_ACTOR));
        assert!(!host.is_operator(ActorId(5)));
        assert_eq!(host.callsign(CONSOLE_ACTOR).as_deref(), Some("admin"));
        assert_eq!(host.callsign(ActorId(5)), None);
    }
}
