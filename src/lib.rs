pub mod assembler;
pub mod config;
pub mod normalizer;
pub mod pipeline;
pub mod reader;

pub use assembler::{assemble, executive_summary, OutputDocument, TITLE_LINE};
pub use config::UnifyConfig;
pub use normalizer::{NormalizationRule, TemporalNormalizer};
pub use pipeline::{run, RunStats, SourceStats};
pub use reader::{read_source, ReadStats, ReaderConfig, SourceDocument, SourceReader};
