//! Local file event source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{EventSource, SourceError};
use crate::events::Event;

/// Reads the events feed from a JSON document on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EventSource for FileSource {
    fn source_type(&self) -> &str {
        "file"
    }

    async fn load_events(&self) -> Result<Vec<Event>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(self.path.display().to_string())
            } else {
                SourceError::Io(err.to_string())
            }
        })?;

        let events: Vec<Event> =
            serde_json::from_str(&content).map_err(|err| SourceError::InvalidData(err.to_string()))?;

        Ok(events)
    }
}
