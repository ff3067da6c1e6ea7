//! Content sources for imports
//!
//! A source yields the whole text of one import in a single asynchronous
//! read. There is no streaming and no partial progress.

use crate::domain::ImportError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Something an import can read its text from
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable name used in logs and summaries
    fn describe(&self) -> String;

    /// Reads the complete content as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be read or is not UTF-8.
    async fn read_to_string(&self) -> Result<String, ImportError>;
}

/// A file on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_to_string(&self) -> Result<String, ImportError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ImportError::read_failed(self.describe(), e.to_string()))?;

        String::from_utf8(bytes).map_err(|_| ImportError::InvalidEncoding(self.describe()))
    }
}

/// Text already held in memory
#[derive(Debug, Clone)]
pub struct TextSource {
    name: String,
    text: String,
}

impl TextSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl ContentSource for TextSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn read_to_string(&self) -> Result<String, ImportError> {
        Ok(self.text.clone())
    }
}
