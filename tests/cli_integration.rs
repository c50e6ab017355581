use serde_json::Value;
use std::fs;
use std::process::{Command, Output};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

use unify_roadmap::config::{PREVENTION_ROADMAP_FILE, UNIFIED_OUTPUT_FILE};
use unify_roadmap::TITLE_LINE;

fn run_unify(fixture: &TestFixture, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_unify-roadmap"))
        .arg("--base-dir")
        .arg(fixture.root_path.as_os_str())
        .args(extra_args)
        .output()
        .expect("Failed to run unify-roadmap")
}

/// Zero-argument invocation works from inside the roadmap folder
#[test]
fn test_runs_without_arguments_in_current_dir() {
    let fixture = TestFixture::with_sources();

    let output = Command::new(env!("CARGO_BIN_EXE_unify-roadmap"))
        .current_dir(&fixture.root_path)
        .output()
        .expect("Failed to run unify-roadmap");

    assert!(output.status.success(), "unify-roadmap failed: {}", String::from_utf8_lossy(&output.stderr));

    let content = fixture.read_output().expect("Output should exist");
    assert!(content.starts_with(TITLE_LINE));
}

/// Progress messages go to stdout, ending with the generated line count
#[test]
fn test_progress_messages_and_line_count() {
    let fixture = TestFixture::with_sources();

    let output = run_unify(&fixture, &[]);
    assert!(output.status.success(), "unify-roadmap failed: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(lines.len(), 6, "unexpected stdout: {stdout}");
    assert!(lines[0].contains("Gerando roadmap unificado completo"));
    assert!(lines[1].contains("Lendo arquivos fonte"));
    assert!(lines[2].contains("Gerando conteúdo unificado"));
    assert!(lines[3].contains("Salvando arquivo em"));
    assert!(lines[3].contains(UNIFIED_OUTPUT_FILE));
    assert!(lines[4].contains("Arquivo gerado com sucesso"));

    let content = fixture.read_output().expect("Output should exist");
    let expected = format!("📊 Linhas geradas: {}", content.lines().count());
    assert_eq!(lines[5], expected);
}

/// Two runs over unchanged sources give byte-identical output
#[test]
fn test_repeated_runs_are_identical() {
    let fixture = TestFixture::with_sources();

    assert!(run_unify(&fixture, &[]).status.success());
    let first = fs::read(fixture.output_path()).expect("First output should exist");

    assert!(run_unify(&fixture, &[]).status.success());
    let second = fs::read(fixture.output_path()).expect("Second output should exist");

    assert_eq!(first, second);
}

/// A missing source aborts with a non-zero exit and writes nothing
#[test]
fn test_missing_source_fails_without_output() {
    let fixture = TestFixture::with_sources();
    fs::remove_file(fixture.root_path.join(PREVENTION_ROADMAP_FILE)).expect("Failed to remove source");

    let output = run_unify(&fixture, &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains(PREVENTION_ROADMAP_FILE));
    assert!(!fixture.output_path().exists(), "No output should be written");
}

#[test]
fn test_nonexistent_base_dir_rejected() {
    let fixture = TestFixture::new();
    let missing = fixture.root_path.join("does-not-exist");

    let output = Command::new(env!("CARGO_BIN_EXE_unify-roadmap"))
        .arg("--base-dir")
        .arg(missing.as_os_str())
        .output()
        .expect("Failed to run unify-roadmap");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Base directory does not exist"));
}

#[test]
fn test_custom_output_name() {
    let fixture = TestFixture::with_sources();

    let output = run_unify(&fixture, &["--output", "UNIFICADO_TESTE.md"]);
    assert!(output.status.success(), "unify-roadmap failed: {}", String::from_utf8_lossy(&output.stderr));

    assert!(fixture.root_path.join("UNIFICADO_TESTE.md").exists());
    assert!(!fixture.output_path().exists());
}

/// An output path that cannot be written fails the run and names the path
#[test]
fn test_unwritable_output_fails_with_path() {
    let fixture = TestFixture::with_sources();
    fs::create_dir(fixture.root_path.join("ocupado.md")).expect("Failed to create directory");

    let output = run_unify(&fixture, &["--output", "ocupado.md"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ocupado.md"));
    assert!(fixture.root_path.join("ocupado.md").is_dir());
}

/// --stats-out writes a JSON summary; --scan-temporal fills mention counts
#[test]
fn test_stats_output_json_structure() {
    let fixture = TestFixture::with_sources();
    let stats_file = fixture.root_path.join("run_stats.json");

    let output = run_unify(
        &fixture,
        &["--scan-temporal", "--stats-out", stats_file.to_str().expect("utf-8 temp path")],
    );
    assert!(output.status.success(), "unify-roadmap failed: {}", String::from_utf8_lossy(&output.stderr));

    let json_content = fs::read_to_string(&stats_file).expect("Failed to read stats file");
    let stats: Value = serde_json::from_str(&json_content).expect("Failed to parse JSON");

    let obj = stats.as_object().expect("Stats should be a JSON object");
    assert!(obj.contains_key("run_start"), "Missing run_start field");
    assert!(obj.contains_key("total_processing_time_ms"), "Missing total_processing_time_ms field");

    let content = fixture.read_output().expect("Output should exist");
    assert_eq!(obj["output_lines"].as_u64().unwrap() as usize, content.lines().count());
    assert_eq!(obj["output_bytes"].as_u64().unwrap() as usize, content.len());

    let sources = obj["sources"].as_array().expect("sources should be an array");
    assert_eq!(sources.len(), 3);

    let mentions: Vec<_> = sources.iter()
        .map(|s| s["temporal_mentions"].as_u64().unwrap())
        .collect();
    assert_eq!(mentions, vec![2, 1, 0]);

    for source in sources {
        assert!(source["file_path"].is_string());
        assert!(source["bytes_read"].as_u64().unwrap() > 0);
        assert!(source["lines_read"].as_u64().unwrap() > 0);
    }
}

/// Without --scan-temporal the mention counts are null
#[test]
fn test_stats_without_scan_have_null_mentions() {
    let fixture = TestFixture::with_sources();
    let stats_file = fixture.root_path.join("run_stats.json");

    let output = run_unify(&fixture, &["--stats-out", stats_file.to_str().expect("utf-8 temp path")]);
    assert!(output.status.success());

    let stats: Value = serde_json::from_str(&fs::read_to_string(&stats_file).unwrap()).unwrap();
    for source in stats["sources"].as_array().unwrap() {
        assert!(source["temporal_mentions"].is_null());
    }
}
