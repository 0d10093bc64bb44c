//! End-to-end runs of the lettergroups binary

use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const SYMBOLS: usize = 27;

/// Two hidden states: state 0 emits vowels and space, state 1 consonants
fn vowel_consonant_emission() -> Vec<Vec<f64>> {
    let alphabet = "abcdefghijklmnopqrstuvwxyz ";
    let vowel_like = |c: char| "aeiou ".contains(c);

    let vowel_count = alphabet.chars().filter(|&c| vowel_like(c)).count() as f64;
    let consonant_count = SYMBOLS as f64 - vowel_count;

    let state = |emits_vowels: bool| -> Vec<f64> {
        alphabet
            .chars()
            .map(|c| match (vowel_like(c), emits_vowels) {
                (true, true) => 1.0 / vowel_count,
                (false, false) => 1.0 / consonant_count,
                _ => 0.0,
            })
            .collect()
    };

    vec![state(true), state(false)]
}

fn write_input(dir: &TempDir, name: &str, body: &Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(body).unwrap()).unwrap();
    path
}

#[test]
fn test_analyze_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "n2.json",
        &serde_json::json!({ "label": "N=2", "emission": vowel_consonant_emission() }),
    );

    let output = Command::new(env!("CARGO_BIN_EXE_lettergroups"))
        .current_dir(dir.path())
        .arg("analyze")
        .arg(&input)
        .args(["--format", "json", "--top", "3"])
        .output()
        .expect("Failed to run lettergroups");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let reports: Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &reports[0];
    assert_eq!(report["label"], "N=2");
    assert_eq!(report["hidden_states"], 2);

    let groups = report["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["symbols"].as_array().unwrap().len(), 6);
    assert_eq!(groups[1]["seed"], "b");

    assert_eq!(report["subsets"][0]["name"], "vowels");
    let vowel_average = report["subsets"][0]["average"].as_f64().unwrap();
    assert!((vowel_average - 1.0).abs() < 1e-12);
    assert_eq!(report["cross_subsets"][0]["average"], 0.0);

    let top_pairs = report["top_pairs"].as_array().unwrap();
    assert_eq!(top_pairs.len(), 3);
    for pair in top_pairs {
        assert!((pair["similarity"].as_f64().unwrap() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_analyze_terminal_output_for_two_runs() {
    let dir = TempDir::new().unwrap();
    let emission = vowel_consonant_emission();
    let first = write_input(&dir, "n2.json", &serde_json::json!(emission));
    let mut three_states = emission.clone();
    three_states.push(vec![1.0 / SYMBOLS as f64; SYMBOLS]);
    let second = write_input(&dir, "n3.json", &serde_json::json!(three_states));

    let output = Command::new(env!("CARGO_BIN_EXE_lettergroups"))
        .current_dir(dir.path())
        .arg("analyze")
        .arg(&first)
        .arg(&second)
        .arg("--plain")
        .output()
        .expect("Failed to run lettergroups");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Results for N=2 hidden states"));
    assert!(stdout.contains("Results for N=3 hidden states"));
    assert!(stdout.contains("Letter groupings (threshold=0.65):"));
    assert!(stdout.contains("Group 1: ['a', 'e', 'i', 'o', 'u', ' ']"));
    assert!(stdout.contains("Average similarity within vowels (a,e,i,o,u): 1.0000"));
    assert!(stdout.contains("Top 10 most similar letter pairs:"));
}

#[test]
fn test_analyze_rejects_wrong_column_count() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad.json", &serde_json::json!([[0.5, 0.5], [0.1, 0.9]]));

    let output = Command::new(env!("CARGO_BIN_EXE_lettergroups"))
        .current_dir(dir.path())
        .arg("analyze")
        .arg(&input)
        .output()
        .expect("Failed to run lettergroups");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Shape error"), "stderr: {}", stderr);
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    let run = |force: bool| {
        let mut command = Command::new(env!("CARGO_BIN_EXE_lettergroups"));
        command.current_dir(dir.path()).arg("init");
        if force {
            command.arg("--force");
        }
        command.output().expect("Failed to run lettergroups")
    };

    assert!(run(false).status.success());
    assert!(dir.path().join(".lettergroups.toml").exists());
    assert!(!run(false).status.success());
    assert!(run(true).status.success());
}
