//! Import orchestrator
//!
//! Reads a content source, decodes it, and appends one record per decoded
//! row to a directory in file order. Rows are appended one at a time with
//! no batching: records added by earlier imports are never rolled back.

use super::source::ContentSource;
use super::summary::ImportSummary;
use crate::config::ImportConfig;
use crate::core::codec::{CsvDecoder, CsvDialect};
use crate::core::directory::BusinessDirectory;
use crate::domain::Result;
use std::time::Instant;

/// Drives CSV imports into a directory
///
/// The orchestrator keeps no per-source state, so the same source can be
/// imported repeatedly; each run appends new records with fresh ids.
#[derive(Debug, Default)]
pub struct ImportOrchestrator {
    decoder: CsvDecoder,
}

impl ImportOrchestrator {
    pub fn new(decoder: CsvDecoder) -> Self {
        Self { decoder }
    }

    /// Create an orchestrator from import settings
    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(CsvDecoder::new(config.dialect))
    }

    pub fn dialect(&self) -> CsvDialect {
        self.decoder.dialect()
    }

    /// Import one source into the directory
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read. The directory is not
    /// touched in that case.
    pub async fn import<S>(
        &self,
        source: &S,
        directory: &mut BusinessDirectory,
    ) -> Result<ImportSummary>
    where
        S: ContentSource + ?Sized,
    {
        let started = Instant::now();
        let source_name = source.describe();
        crate::log_import_start!(source_name, self.dialect());

        let text = match source.read_to_string().await {
            Ok(text) => text,
            Err(e) => {
                crate::log_error_with_context!(&e, "Import read failed");
                return Err(e.into());
            }
        };

        let mut summary = ImportSummary::new(source_name, self.dialect());
        for decoded in self.decoder.decode(&text) {
            summary.warnings.extend(decoded.warnings);
            directory.add(decoded.business)?;
            summary.rows_imported += 1;
        }

        let summary = summary.with_duration(started.elapsed());
        crate::log_import_complete!(
            summary.rows_imported,
            summary.warnings.len(),
            summary.duration
        );
        Ok(summary)
    }
}
