//! File-backed publisher.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::publish::{OutputPublisher, PublishError};

/// Publishes into a single well-known file.
#[derive(Debug, Clone)]
pub struct FilePublisher {
    target: PathBuf,
}

impl FilePublisher {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    fn write(&self, path: &str) -> std::io::Result<()> {
        // File::create truncates any previous content
        let mut file = File::create(&self.target)?;
        file.write_all(path.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        file.sync_all()
    }
}

impl OutputPublisher for FilePublisher {
    fn publish(&self, path: &str) -> Result<(), PublishError> {
        if self.target.as_os_str().is_empty() {
            return Err(PublishError::Unconfigured);
        }

        self.write(path).map_err(|source| PublishError::Io {
            path: self.target.display().to_string(),
            source,
        })?;

        tracing::info!(output = %self.target.display(), configuration = %path, "Configuration published");
        Ok(())
    }
}
