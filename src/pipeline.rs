// Single linear run: read sources, assemble, overwrite the output, report.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::assembler::{self, OutputDocument};
use crate::config::UnifyConfig;
use crate::normalizer::TemporalNormalizer;
use crate::reader::{ReadStats, ReaderConfig, SourceDocument, SourceReader};

/// Per-source statistics
#[derive(Serialize, Debug, Clone)]
pub struct SourceStats {
    #[serde(flatten)]
    pub read: ReadStats,
    /// Temporal markers found in the source; only set when scanning is enabled
    pub temporal_mentions: Option<u64>,
}

/// Summary of one run, optionally written as JSON
#[derive(Serialize, Debug, Clone)]
pub struct RunStats {
    /// Unix timestamp (seconds) of run start
    pub run_start: u64,
    pub total_processing_time_ms: u64,
    pub output_path: String,
    pub output_lines: u64,
    pub output_bytes: u64,
    pub sources: Vec<SourceStats>,
}

/// Generate the unified roadmap described by `config`.
///
/// Every source is read before anything is written, so a missing input leaves
/// any existing output untouched.
pub async fn run(config: &UnifyConfig) -> Result<RunStats> {
    let start_time = std::time::Instant::now();
    let run_start = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    println!("🚀 Gerando roadmap unificado completo (Estilo Ultra)...");

    println!("📖 Lendo arquivos fonte...");
    let reader = SourceReader::new(ReaderConfig::default());
    let input_paths = config.input_paths();
    // WHY: all sources are loaded before the output is opened, so a missing
    // input never truncates an existing unified document
    let loaded = reader.read_sources(&input_paths).await?;

    let sources: Vec<SourceStats> = if config.scan_temporal {
        let normalizer = TemporalNormalizer::new()?;
        loaded.iter()
            .map(|(document, stats)| scan_source(&normalizer, document, stats))
            .collect()
    } else {
        loaded.into_iter()
            .map(|(_document, read)| SourceStats { read, temporal_mentions: None })
            .collect()
    };

    println!("🔨 Gerando conteúdo unificado...");
    let document = assembler::assemble();
    debug!("Assembled document: {} lines, {} bytes", document.line_count(), document.len());

    let output_path = config.output_path();
    println!("💾 Salvando arquivo em {}...", output_path.display());
    write_output(&output_path, &document).await?;

    println!("✅ Arquivo gerado com sucesso!");
    println!("📊 Linhas geradas: {}", document.line_count());

    let stats = RunStats {
        run_start,
        total_processing_time_ms: start_time.elapsed().as_millis() as u64,
        output_path: output_path.display().to_string(),
        output_lines: document.line_count() as u64,
        output_bytes: document.len() as u64,
        sources,
    };

    if let Some(stats_path) = &config.stats_out {
        write_stats(stats_path, &stats).await?;
    }

    info!(
        "Unified roadmap written to {}: {} lines in {}ms",
        stats.output_path, stats.output_lines, stats.total_processing_time_ms
    );

    Ok(stats)
}

fn scan_source(normalizer: &TemporalNormalizer, document: &SourceDocument, read: &ReadStats) -> SourceStats {
    let mentions = normalizer.count_matches(document.content()) as u64;
    info!("Temporal mentions in {}: {}", document.path().display(), mentions);
    SourceStats {
        read: read.clone(),
        temporal_mentions: Some(mentions),
    }
}

/// Overwrite `path` with the document contents
pub async fn write_output(path: &Path, document: &OutputDocument) -> Result<()> {
    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create output {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(document.content().as_bytes())
        .await
        .with_context(|| format!("Failed to write output {}", path.display()))?;
    // WHY: the document fits in the buffer, so disk errors surface here
    writer.flush()
        .await
        .with_context(|| format!("Failed to write output {}", path.display()))?;

    Ok(())
}

async fn write_stats(path: &Path, stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write stats {}", path.display()))?;
    info!("Run stats written to {}", path.display());
    Ok(())
}
