//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn quizform() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizform").unwrap();
    cmd.env_remove("QUIZFORM_IDS")
        .env_remove("QUIZFORM_DEFAULT_PROMPT")
        .env_remove("RUST_LOG");
    cmd
}

fn parse_json(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout should be JSON")
}

#[test]
fn parse_evaluation_document() {
    let output = quizform()
        .arg("parse")
        .arg("--input")
        .arg("../../samples/evaluation.txt")
        .arg("--ids")
        .arg("sequential")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let template = parse_json(&output);
    let questions = template["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 6);

    assert_eq!(questions[0]["id"], "q1");
    assert_eq!(questions[0]["prompt"], "Avaliação de satisfação");
    assert_eq!(questions[1]["prompt"], "Nome:");
    assert_eq!(
        questions[2]["prompt"],
        "Qual sua idade? Informe um número entre 18 e 99."
    );
    assert_eq!(questions[3]["type"], "radio");
    assert_eq!(
        questions[3]["options"],
        serde_json::json!(["Indicação", "Internet", "Outro"])
    );
    assert_eq!(
        questions[4]["prompt"],
        "Descreva sua experiência __________"
    );
    assert!(questions[4].get("options").is_none());
    assert_eq!(questions[5]["options"], serde_json::json!(["Sim", "Não"]));
}

#[test]
fn parse_orphan_options_with_custom_prompt() {
    let output = quizform()
        .arg("parse")
        .arg("--input")
        .arg("../../samples/orphan-options.txt")
        .arg("--default-prompt")
        .arg("Selecione uma opção:")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let template = parse_json(&output);
    let question = &template["questions"][0];
    assert_eq!(question["type"], "radio");
    assert_eq!(question["prompt"], "Selecione uma opção:");
    assert_eq!(question["options"], serde_json::json!(["Azul", "Verde"]));
    assert_eq!(question["id"].as_str().unwrap().len(), 12);
}

#[test]
fn parse_stdin_compact() {
    quizform()
        .arg("parse")
        .arg("--input")
        .arg("-")
        .arg("--ids")
        .arg("sequential")
        .arg("--compact")
        .write_stdin("Nome:\na) Sim\nb) Não\n")
        .assert()
        .success()
        .stdout(predicate::eq(
            "{\"questions\":[{\"id\":\"q1\",\"type\":\"radio\",\"prompt\":\"Nome:\",\"options\":[\"Sim\",\"Não\"]}]}\n",
        ));
}

#[test]
fn parse_empty_input() {
    quizform()
        .arg("parse")
        .arg("--input")
        .arg("-")
        .arg("--compact")
        .write_stdin("\n   \n")
        .assert()
        .success()
        .stdout("{\"questions\":[]}\n");
}

#[test]
fn parse_rejects_unknown_id_strategy() {
    quizform()
        .arg("parse")
        .arg("--input")
        .arg("-")
        .arg("--ids")
        .arg("uuid")
        .write_stdin("Nome:\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown id strategy"));
}

#[test]
fn parse_nonexistent_file() {
    quizform()
        .arg("parse")
        .arg("--input")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn parse_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        "default_prompt = \"Escolha:\"\nids = \"sequential\"\nid_prefix = \"field-\"\nblank_width = 4\n",
    )
    .unwrap();

    let output = quizform()
        .arg("parse")
        .arg("--input")
        .arg("-")
        .arg("--config")
        .arg(&config)
        .write_stdin("- Sim\nFale __________\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let template = parse_json(&output);
    assert_eq!(template["questions"][0]["id"], "field-1");
    assert_eq!(template["questions"][0]["prompt"], "Escolha:");
    assert_eq!(template["questions"][1]["prompt"], "Fale ____");
}

#[test]
fn parse_with_missing_config_file() {
    quizform()
        .arg("parse")
        .arg("--input")
        .arg("../../samples/evaluation.txt")
        .arg("--config")
        .arg("no_such_config.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn parse_to_file_then_validate_and_inspect() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out/evaluation.json");

    quizform()
        .arg("parse")
        .arg("--input")
        .arg("../../samples/evaluation.txt")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 6 question(s)"));

    assert!(out.exists());

    quizform()
        .arg("validate")
        .arg("--template")
        .arg(&out)
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 questions"))
        .stdout(predicate::str::contains("Template valid."));

    quizform()
        .arg("inspect")
        .arg("--template")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Indicação | Internet | Outro"))
        .stdout(predicate::str::contains(
            "6 question(s): 4 text, 2 radio (5 options)",
        ));
}

#[test]
fn parse_directory() {
    let dir = TempDir::new().unwrap();

    quizform()
        .arg("parse")
        .arg("--input")
        .arg("../../samples/batch")
        .arg("--output")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 2 document(s)"));

    assert!(dir.path().join("evaluation.json").exists());
    assert!(dir.path().join("nested/short.json").exists());
    assert!(!dir.path().join("notes.json").exists());
}

#[test]
fn parse_directory_requires_output() {
    quizform()
        .arg("parse")
        .arg("--input")
        .arg("../../samples/batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn explain_shows_classification() {
    quizform()
        .arg("explain")
        .arg("--input")
        .arg("../../samples/conflicts.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("question_start"))
        .stdout(predicate::str::contains("answer_blank"))
        .stdout(predicate::str::contains(
            "5 line(s), 2 resolved by precedence",
        ));
}

#[test]
fn explain_conflicts_only() {
    quizform()
        .arg("explain")
        .arg("--input")
        .arg("../../samples/conflicts.txt")
        .arg("--conflicts")
        .assert()
        .success()
        .stdout(predicate::str::contains("b) Outra ____"))
        .stdout(predicate::str::contains("Observações").not());
}

#[test]
fn validate_broken_template() {
    quizform()
        .arg("validate")
        .arg("--template")
        .arg("../../samples/broken-template.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate question ID: q1"))
        .stdout(predicate::str::contains("still has a list marker"))
        .stdout(predicate::str::contains("[q3] WARNING: radio question has no options"))
        .stdout(predicate::str::contains("3 warning(s) found."));
}

#[test]
fn validate_strict_fails_on_warnings() {
    quizform()
        .arg("validate")
        .arg("--template")
        .arg("../../samples/broken-template.json")
        .arg("--strict")
        .assert()
        .failure();
}

#[test]
fn validate_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    quizform()
        .arg("validate")
        .arg("--template")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid template JSON"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizform()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizform.toml"))
        .stdout(predicate::str::contains("Created documents/example.txt"));

    assert!(dir.path().join("quizform.toml").exists());
    assert!(dir.path().join("documents/example.txt").exists());

    // The generated config is picked up from the working directory.
    quizform()
        .current_dir(dir.path())
        .arg("parse")
        .arg("--input")
        .arg("documents/example.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Sales\""));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizform()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizform()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    quizform()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Evaluation template builder for extracted document text",
        ));
}

#[test]
fn version_output() {
    quizform()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizform"));
}
