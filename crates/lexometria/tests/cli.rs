//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Analyze Command
// =============================================================================

const GATO_CONLLU: &str = "\
# text = O gato correu rápido.
1\tO\to\tDET\t_\t_\t2\tdet\t_\t_
2\tgato\tgato\tNOUN\t_\t_\t3\tnsubj\t_\t_
3\tcorreu\tcorrer\tVERB\t_\t_\t0\troot\t_\t_
4\trápido\trápido\tADV\t_\t_\t3\tadvmod\t_\t_
5\t.\t.\tPUNCT\t_\t_\t3\tpunct\t_\tSpaceAfter=No

";

/// A command that never reaches the parsing service unless told to.
fn offline() -> Command {
    let mut c = cmd();
    c.env("LEXOMETRIA_UDPIPE__ENABLED", "false");
    c
}

fn write(dir: &std::path::Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn stdout_json(output: &assert_cmd::assert::Assert) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[test]
fn analyze_json_has_every_metric() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write(tmp.path(), "texto.txt", "O gato dorme. O cão late alto.");
    let output = cmd()
        .args(["--json", "analyze", &file, "--no-parse"])
        .assert()
        .success();

    let json = stdout_json(&output);
    for key in [
        "MLC",
        "MLS",
        "DCC",
        "CPC",
        "profundidade_media",
        "profundidade_max",
        "ttr",
        "lexical_density",
        "token_quantity",
        "noun_freq",
        "verb_freq",
        "adj_freq",
        "adv_freq",
        "avg_word_length",
        "long_words_ratio",
        "sentence_length_variance",
        "punctuation_ratio",
        "flesch_reading_ease",
        "per_count",
        "org_count",
        "loc_count",
        "lemmas",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["MLS"], 0.0, "parse disabled leaves complexity at zero");
    assert_eq!(json["lemmas"], "");
    assert!(json["noun_freq"].as_f64().unwrap() > 0.0);
}

#[test]
fn analyze_uses_supplied_annotation() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write(tmp.path(), "texto.txt", "O gato correu rápido.");
    let conllu = write(tmp.path(), "texto.conllu", GATO_CONLLU);
    // The service URL is unreachable; the supplied annotation means it is never called.
    let output = cmd()
        .env("LEXOMETRIA_UDPIPE__URL", "http://127.0.0.1:9/process")
        .args(["--json", "analyze", &file, "--annotation", &conllu])
        .assert()
        .success();

    let json = stdout_json(&output);
    assert_eq!(json["token_quantity"], 4);
    assert_eq!(json["MLS"], 4.0);
    assert_eq!(json["lexical_density"], 0.5);
    assert_eq!(json["profundidade_max"], 2);
    assert_eq!(json["lemmas"], "o gato correr rápido");
}

#[test]
fn analyze_no_lemmas_empties_lemma_string() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write(tmp.path(), "texto.txt", "O gato correu rápido.");
    let conllu = write(tmp.path(), "texto.conllu", GATO_CONLLU);
    let output = cmd()
        .args([
            "--json",
            "analyze",
            &file,
            "--annotation",
            &conllu,
            "--no-lemmas",
        ])
        .assert()
        .success();

    let json = stdout_json(&output);
    assert_eq!(json["lemmas"], "");
    assert_eq!(json["token_quantity"], 4);
}

#[test]
fn analyze_malformed_annotation_degrades_to_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write(tmp.path(), "texto.txt", "O gato correu rápido.");
    let conllu = write(tmp.path(), "ruim.conllu", "1\tO\to\tDET\n");
    let output = cmd()
        .args(["--json", "analyze", &file, "--annotation", &conllu])
        .assert()
        .success();

    let json = stdout_json(&output);
    assert_eq!(json["token_quantity"], 0);
    assert_eq!(json["noun_freq"], 0.0);
}

#[test]
fn analyze_no_ner_zeroes_entities() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write(
        tmp.path(),
        "texto.txt",
        "A Maria trabalha na Universidade de Coimbra.",
    );
    let with = stdout_json(&offline().args(["--json", "analyze", &file]).assert().success());
    assert_eq!(with["per_count"], 1);
    assert_eq!(with["org_count"], 1);

    let without = stdout_json(
        &offline()
            .args(["--json", "analyze", &file, "--no-ner"])
            .assert()
            .success(),
    );
    assert_eq!(without["per_count"], 0);
    assert_eq!(without["org_count"], 0);
    assert_eq!(without["noun_freq"], with["noun_freq"]);
}

#[test]
fn analyze_reads_stdin() {
    let output = offline()
        .args(["--json", "analyze", "-"])
        .write_stdin("Olá. Tudo bem?")
        .assert()
        .success();
    let json = stdout_json(&output);
    assert!(json["punctuation_ratio"].as_f64().unwrap() > 0.0);
}

#[test]
fn analyze_empty_text_is_all_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write(tmp.path(), "vazio.txt", "   \n");
    let json = stdout_json(&offline().args(["--json", "analyze", &file]).assert().success());
    assert_eq!(json["noun_freq"], 0.0);
    assert_eq!(json["flesch_reading_ease"], 0.0);
}

#[test]
fn analyze_strips_markdown_files() {
    let tmp = tempfile::tempdir().unwrap();
    let md = write(
        tmp.path(),
        "resposta.md",
        "# Título\n\n```\nlet x = 1;\n```\n\nO gato dorme.",
    );
    let txt = write(tmp.path(), "resposta.txt", "Título\n\nO gato dorme.");
    let from_md = stdout_json(&offline().args(["--json", "analyze", &md]).assert().success());
    let from_txt = stdout_json(&offline().args(["--json", "analyze", &txt]).assert().success());
    assert_eq!(from_md, from_txt);
}

#[test]
fn analyze_text_output_lists_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write(tmp.path(), "texto.txt", "O gato dorme.");
    offline()
        .args(["--color", "never", "analyze", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("noun_freq"))
        .stdout(predicate::str::contains("profundidade_max"))
        .stdout(predicate::str::contains("dependency parsing disabled"));
}

#[test]
fn analyze_missing_file_fails() {
    offline()
        .args(["analyze", "/nao/existe.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Batch Command
// =============================================================================

#[test]
fn batch_merges_metrics_into_rows() {
    let tmp = tempfile::tempdir().unwrap();
    let conllu = serde_json::to_string(GATO_CONLLU).unwrap();
    let input = write(
        tmp.path(),
        "entrada.jsonl",
        &format!(
            "{{\"id\": 1, \"response\": \"O gato correu rápido.\", \"udpipe_result\": {conllu}}}\n\
             {{\"id\": 2, \"response\": \"O cão late.\", \"udpipe_result\": \"nan\"}}\n\
             isto não é json\n"
        ),
    );
    let output = tmp.path().join("saida.jsonl");
    offline()
        .args([
            "batch",
            &input,
            "-o",
            output.to_str().unwrap(),
            "--no-parse",
        ])
        .assert()
        .success();

    let rows: Vec<serde_json::Value> = std::fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["id"], 1);
    assert!(rows[0]["udpipe_result"].is_string());
    assert!(rows[1]["noun_freq"].as_f64().unwrap() > 0.0);
    assert_eq!(rows[2]["line"], 3);
    assert_eq!(rows[2]["noun_freq"], 0.0);
}

#[test]
fn batch_uses_annotation_column() {
    let tmp = tempfile::tempdir().unwrap();
    let row = serde_json::json!({
        "texto": "O gato correu rápido.",
        "conllu": GATO_CONLLU,
    });
    let input = write(tmp.path(), "entrada.jsonl", &format!("{row}\n"));
    let output = cmd()
        .env("LEXOMETRIA_UDPIPE__URL", "http://127.0.0.1:9/process")
        .args([
            "-q",
            "batch",
            &input,
            "--text-field",
            "texto",
            "--annotation-field",
            "conllu",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["token_quantity"], 4);
    assert_eq!(json["lemmas"], "o gato correr rápido");
}

#[test]
fn batch_jobs_keep_row_order() {
    let tmp = tempfile::tempdir().unwrap();
    let mut input = String::new();
    for id in 0..50 {
        let row = serde_json::json!({"id": id, "response": format!("Ela viu {id} gatos.")});
        input.push_str(&format!("{row}\n"));
    }
    let input = write(tmp.path(), "entrada.jsonl", &input);

    let run = |jobs: &str| {
        let output = offline()
            .args(["-q", "batch", &input, "--jobs", jobs])
            .assert()
            .success();
        String::from_utf8_lossy(&output.get_output().stdout).into_owned()
    };
    let sequential = run("1");
    let parallel = run("4");
    assert_eq!(parallel, sequential);

    let ids: Vec<u64> = parallel
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (0..50).collect::<Vec<u64>>());
}

#[test]
fn batch_missing_input_fails() {
    offline()
        .args(["batch", "/nao/existe.jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

// =============================================================================
// Syllables & Schema
// =============================================================================

#[test]
fn syllables_prints_each_word() {
    let output = cmd()
        .args(["--json", "syllables", "casa", "português"])
        .assert()
        .success();
    let json = stdout_json(&output);
    assert_eq!(json[0]["word"], "casa");
    assert_eq!(json[0]["syllables"], 2);
    assert_eq!(json[1]["syllables"], 3);
}

#[test]
fn syllables_requires_a_word() {
    cmd().arg("syllables").assert().failure();
}

#[test]
fn schema_is_json() {
    let output = cmd().arg("schema").assert().success();
    let json = stdout_json(&output);
    assert!(json["properties"]["profundidade_media"].is_object());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    // NOTE: body was truncated upstream; only the closing brace was restored.
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
