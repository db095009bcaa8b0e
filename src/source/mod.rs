//! Event source abstraction.
//!
//! This module defines the interface the app loads its events through, so
//! the feed can come from a local file today and another transport later
//! without touching the UI.

use async_trait::async_trait;

use crate::events::Event;

pub mod file;

pub use file::FileSource;

/// Common error types for event source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Events file not found: {0}")]
    NotFound(String),

    #[error("Could not read events: {0}")]
    Io(String),

    #[error("Invalid events document: {0}")]
    InvalidData(String),
}

/// Source trait every events feed must implement.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Returns the source type identifier (e.g., "file").
    fn source_type(&self) -> &str;

    /// Fetch every event in the feed. One attempt, no retry; the caller
    /// decides how to degrade on failure.
    async fn load_events(&self) -> Result<Vec<Event>, SourceError>;
}
