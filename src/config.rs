use std::path::{Path, PathBuf};

/// Capacity roadmap, first of the three source reports
pub const CAPACITY_ROADMAP_FILE: &str = "ROADMAP_ULTRA_COMPLETO_CAPACITACAO_TOTAL.md";
/// Error prevention/resolution roadmap
pub const PREVENTION_ROADMAP_FILE: &str = "ROADMAP_ULTRA_COMPLETO_PREVENCAO_RESOLUCAO_ERROS.md";
/// Audit gap analysis
pub const AUDIT_ANALYSIS_FILE: &str = "ANALISE_AUDITORIA_LACUNAS_ROADMAP.md";
/// Unified document, overwritten on every run
pub const UNIFIED_OUTPUT_FILE: &str = "ROADMAP_ULTRA_COMPLETO_UNIFICADO.md";

/// Where the run reads its sources from and writes its output to
#[derive(Debug, Clone)]
pub struct UnifyConfig {
    /// Directory the input and output file names are resolved against
    pub base_dir: PathBuf,
    /// Source file names, read in this order
    pub input_files: Vec<String>,
    /// Output file name
    pub output_file: PathBuf,
    /// Count temporal mentions in each source (reporting only)
    pub scan_temporal: bool,
    /// Optional JSON run-stats destination
    pub stats_out: Option<PathBuf>,
}

impl Default for UnifyConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            input_files: vec![
                CAPACITY_ROADMAP_FILE.to_string(),
                PREVENTION_ROADMAP_FILE.to_string(),
                AUDIT_ANALYSIS_FILE.to_string(),
            ],
            output_file: PathBuf::from(UNIFIED_OUTPUT_FILE),
            scan_temporal: false,
            stats_out: None,
        }
    }
}

impl UnifyConfig {
    /// Default file layout rooted at `base_dir`
    pub fn with_base_dir<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.input_files.iter()
            .map(|name| self.base_dir.join(name))
            .collect()
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_file)
    }
}
