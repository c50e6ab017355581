// Integration test utilities and common code

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use unify_roadmap::config::{
    AUDIT_ANALYSIS_FILE, CAPACITY_ROADMAP_FILE, PREVENTION_ROADMAP_FILE, UNIFIED_OUTPUT_FILE,
};

/// Temporary directory laid out like a roadmap working folder
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Fixture with all three source reports present
    pub fn with_sources() -> Self {
        let fixture = Self::new();
        fixture.create_source(CAPACITY_ROADMAP_FILE, "# Capacitação Total\n\nFASE 0 adicionado anteriormente.\n");
        fixture.create_source(PREVENTION_ROADMAP_FILE, "# Prevenção e Resolução\n\nAtualmente 76+ erros.\n");
        fixture.create_source(AUDIT_ANALYSIS_FILE, "# Auditoria de Lacunas\n\nSem marcadores.\n");
        fixture
    }

    pub fn create_source<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        fs::write(&file_path, content).expect("Failed to write source file");
        file_path
    }

    pub fn output_path(&self) -> PathBuf {
        self.root_path.join(UNIFIED_OUTPUT_FILE)
    }

    pub fn read_output(&self) -> Result<String, std::io::Error> {
        fs::read_to_string(self.output_path())
    }
}
