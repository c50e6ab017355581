use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info};

/// Configuration for source reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for a single source read
#[derive(Debug, Clone, Serialize)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// A source report loaded whole into memory
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: PathBuf,
    content: String,
}

impl SourceDocument {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Async reader that loads each source file in full
pub struct SourceReader {
    config: ReaderConfig,
}

impl SourceReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a whole file as UTF-8 text.
    ///
    /// Missing files, permission errors and invalid UTF-8 all surface as errors
    /// carrying the path; nothing partial is ever returned.
    pub async fn read_source<P: AsRef<Path>>(&self, file_path: P) -> Result<(SourceDocument, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of source: {}", path.display());

        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open source {}", path.display()))?;

        // WHY: read_to_string rejects invalid UTF-8 instead of returning partial text
        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut content = String::new();
        let bytes_read = reader
            .read_to_string(&mut content)
            .await
            .with_context(|| format!("Failed to read source {} as UTF-8", path.display()))?;

        let document = SourceDocument::new(path.to_path_buf(), content);
        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: document.line_count() as u64,
            bytes_read: bytes_read as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} lines, {} bytes in {}ms",
            stats.file_path, stats.lines_read, stats.bytes_read, stats.duration_ms
        );

        Ok((document, stats))
    }

    /// Read every source in order, stopping at the first failure
    pub async fn read_sources<P: AsRef<Path>>(
        &self,
        file_paths: &[P],
    ) -> Result<Vec<(SourceDocument, ReadStats)>> {
        info!("Starting read of {} sources", file_paths.len());

        let mut results = Vec::with_capacity(file_paths.len());
        for file_path in file_paths {
            results.push(self.read_source(file_path).await?);
        }

        info!("Completed read of {} sources", results.len());
        Ok(results)
    }
}

/// Read a single source with default configuration
pub async fn read_source<P: AsRef<Path>>(file_path: P) -> Result<SourceDocument> {
    let reader = SourceReader::new(ReaderConfig::default());
    let (document, _stats) = reader.read_source(file_path).await?;
    Ok(document)
}
