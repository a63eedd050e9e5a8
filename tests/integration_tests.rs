//! Integration tests for the extfilter CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG_ENV_VARS: &[&str] = &[
    "EXTFILTER_INPUT_DIR",
    "EXTFILTER_INPUT_SUFFIX",
    "EXTFILTER_OUTPUT_SUFFIX",
    "EXTFILTER_ON_ERROR",
    "EXTFILTER_SOURCES",
    "EXTFILTER_EXTENSIONS",
];

fn extfilter() -> Command {
    Command::cargo_bin("extfilter").unwrap()
}

/// Command running in `dir` with `HOME` set to it and no config variables,
/// so only the embedded defaults and files under `dir` apply
fn extfilter_in(dir: &Path) -> Command {
    let mut cmd = extfilter();
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    for var in CONFIG_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    extfilter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("recognized, unknown and malformed"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    extfilter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("extfilter"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    extfilter()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_run_writes_filter_reports() {
    let temp_dir = TempDir::new().unwrap();
    let lists = temp_dir.path().join("output");
    fs::create_dir(&lists).unwrap();
    fs::write(
        lists.join("fx.txt"),
        "smoke.wav\nsmoke.WAV\nflash.TGA01\nflash.psd\nbad.name.tex\nREADME\n",
    )
    .unwrap();

    extfilter_in(temp_dir.path())
        .args(["run", "fx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 source(s) processed"));

    let report = fs::read_to_string(lists.join("fx.filter.txt")).unwrap();
    assert_eq!(
        report,
        "flash.tga\nsmoke.wav\n\n##############UNKNOW##############\nflash.psd\n\n##############ERROR##############\nbad.name.tex\n"
    );
}

#[test]
fn test_run_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();

    extfilter_in(temp_dir.path())
        .args(["run", "character"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character.txt"));
}

#[test]
fn test_run_keep_going_processes_remaining_sources() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("map.txt"), "hill.tga\n").unwrap();

    extfilter_in(temp_dir.path())
        .args(["run", "--input-dir", "", "--keep-going", "absent", "map"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 source(s) failed"));

    assert!(temp_dir.path().join("map.filter.txt").exists());
}

#[test]
fn test_run_uses_config_file_sources() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("tile.txt"), "grass.arp9\n").unwrap();
    fs::write(
        temp_dir.path().join("extfilter.toml"),
        "input_dir = \"\"\nsources = [\"tile\"]\n",
    )
    .unwrap();

    extfilter_in(temp_dir.path())
        .arg("run")
        .assert()
        .success();

    let report = fs::read_to_string(temp_dir.path().join("tile.filter.txt")).unwrap();
    assert!(report.starts_with("grass.arp\n"));
}

#[test]
fn test_run_dry_run_json() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("helper.txt"), "a.py\nb.exe\n").unwrap();

    extfilter_in(temp_dir.path())
        .args(["run", "--input-dir", ".", "--dry-run", "--format", "json", "helper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recognized\": 1"))
        .stdout(predicate::str::contains("\"unrecognized\": 1"));

    assert!(!temp_dir.path().join("helper.filter.txt").exists());
}

#[test]
fn test_classify_prints_report() {
    let temp_dir = TempDir::new().unwrap();
    let listing = temp_dir.path().join("listing.lst");
    fs::write(&listing, "a.tex\na.tex\nb.xyz\nweird\n").unwrap();

    extfilter_in(temp_dir.path())
        .arg("classify")
        .arg(&listing)
        .assert()
        .success()
        .stdout("a.tex\n\n##############UNKNOW##############\nb.xyz\n\n##############ERROR##############\n");
}

#[test]
fn test_classify_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let listing = temp_dir.path().join("listing.txt");
    let out = temp_dir.path().join("listing.out");
    fs::write(&listing, "clip.mp3x\n").unwrap();

    extfilter_in(temp_dir.path())
        .arg("classify")
        .arg(&listing)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("clip.mp3\n"));
}

#[test]
fn test_config_show_and_validate() {
    let temp_dir = TempDir::new().unwrap();

    extfilter_in(temp_dir.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"gacshell\""));

    extfilter_in(temp_dir.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9 source(s), 17 extension(s)"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "extensions = []\n").unwrap();

    extfilter_in(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("canonical extension"));
}

#[test]
fn test_user_config_and_env_layers() {
    let temp_dir = TempDir::new().unwrap();
    let user_dir = temp_dir.path().join(".config/extfilter");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("config.toml"), "sources = [\"fx\", \"map\"]\n").unwrap();

    extfilter_in(temp_dir.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 source(s), 17 extension(s)"));

    extfilter_in(temp_dir.path())
        .env("EXTFILTER_INPUT_DIR", "2024")
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input_dir\": \"2024\""));
}
