//! Test doubles for the coordinator's collaborators.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::coordinator::{ActorId, ServerControl};
use crate::publish::{OutputPublisher, PublishError};

/// Records broadcasts and restart requests. Non-negative ids are named `player<id>`.
#[derive(Debug, Default)]
pub struct RecordingControl {
    broadcasts: Mutex<Vec<String>>,
    restarts: AtomicUsize,
}

impl RecordingControl {
    pub fn broadcasts(&self) -> Vec<String> {
        self.broadcasts.lock().unwrap().clone()
    }

    pub fn restarts(&self) -> usize {
        self.restarts.load(Ordering::SeqCst)
    }
}

impl ServerControl for RecordingControl {
    fn callsign(&self, actor: ActorId) -> Option<String> {
        (actor.0 >= 0).then(|| format!("player{}", actor.0))
    }

    fn broadcast(&self, message: &str) {
        self.broadcasts.lock().unwrap().push(message.to_string());
    }

    fn request_restart(&self) {
        self.restarts.fetch_add(1, Ordering::SeqCst);
    }
}

/// Keeps published values in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingPublisher {
    pub fn published(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

impl OutputPublisher for RecordingPublisher {
    fn publish(&self, path: &str) -> Result<(), PublishError> {
        if self.fail.swap(false, Ordering::SeqCst) {
            return Err(PublishError::Unconfigured);
        }
        self.published.lock().unwrap().push(path.to_string());
        Ok(())
    }
}
