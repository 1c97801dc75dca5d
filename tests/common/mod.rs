//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mapchange::{ActorId, Host, MapChangePlugin, PluginSettings, ServerControl};
use tempfile::TempDir;

/// A fake game server that records everything the plugin tells it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    callsigns: HashMap<ActorId, String>,
    permissions: HashMap<ActorId, HashSet<String>>,
    operators: HashSet<ActorId>,
    messages: Mutex<Vec<(ActorId, String)>>,
    broadcasts: Mutex<Vec<String>>,
    restarts: AtomicUsize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, id: i32, callsign: &str, perms: &[&str], operator: bool) -> Self {
        let actor = ActorId(id);
        self.callsigns.insert(actor, callsign.to_string());
        self.permissions
            .insert(actor, perms.iter().map(|p| p.to_string()).collect());
        if operator {
            self.operators.insert(actor);
        }
        self
    }

    pub fn messages_to(&self, id: i32) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _)| *to == ActorId(id))
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn broadcasts(&self) -> Vec<String> {
        self.broadcasts.lock().unwrap().clone()
    }

    pub fn restarts(&self) -> usize {
        self.restarts.load(Ordering::SeqCst)
    }
}

impl ServerControl for RecordingHost {
    fn callsign(&self, actor: ActorId) -> Option<String> {
        self.callsigns.get(&actor).cloned()
    }

    fn broadcast(&self, message: &str) {
        self.broadcasts.lock().unwrap().push(message.to_string());
    }

    fn request_restart(&self) {
        self.restarts.fetch_add(1, Ordering::SeqCst);
    }
}

impl Host for RecordingHost {
    fn send_message(&self, to: ActorId, message: &str) {
        self.messages.lock().unwrap().push((to, message.to_string()));
    }

    fn has_permission(&self, actor: ActorId, permission: &str) -> bool {
        self.permissions
            .get(&actor)
            .is_some_and(|perms| perms.contains(permission))
    }

    fn is_operator(&self, actor: ActorId) -> bool {
        self.operators.contains(&actor)
    }
}

/// A registry file and output location in a private temp dir.
pub struct Fixture {
    pub dir: TempDir,
    pub list: PathBuf,
    pub output: PathBuf,
}

impl Fixture {
    pub fn new(list_contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("maps.txt");
        let output = dir.path().join("nextmap.txt");
        fs::write(&list, list_contents).unwrap();
        Self { dir, list, output }
    }

    pub fn settings(&self) -> PluginSettings {
        let mut settings = PluginSettings::default();
        settings.mapchange.configuration_file = self.list.to_string_lossy().into_owned();
        settings.mapchange.output_file = self.output.to_string_lossy().into_owned();
        settings
    }

    pub fn plugin(&self, host: Arc<RecordingHost>) -> MapChangePlugin {
        MapChangePlugin::with_settings(&self.settings(), host)
    }

    /// Contents of the output file, `None` if nothing was published.
    pub fn published(&self) -> Option<String> {
        fs::read_to_string(&self.output).ok()
    }
}

pub const LIST: &str = "arena1 maps/a1.conf\nArena2\tmaps/a2.conf\n\nbroken-line\n";

/// Player 1: operator with `mapchange`. Player 2: no permissions.
/// Player 3: may open polls. Player 4: `mapchange` but not operator.
pub fn standard_host() -> Arc<RecordingHost> {
    Arc::new(
        RecordingHost::new()
            .with_player(1, "alice", &["mapchange"], true)
            .with_player(2, "bob", &[], false)
            .with_player(3, "carol", &["mapchange", "pollMapchange"], false)
            .with_player(4, "dave", &["mapchange"], false),
    )
}
