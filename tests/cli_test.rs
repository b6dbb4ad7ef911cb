use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sumup_js() -> Command {
    let mut cmd = Command::cargo_bin("sumup-js").unwrap();
    cmd.env_remove("SUMUP_JS_TARGET_DIR").env("NO_COLOR", "1");
    cmd
}

fn read(temp: &TempDir, name: &str) -> String {
    fs::read_to_string(temp.path().join(name)).unwrap()
}

#[test]
fn test_help_output() {
    sumup_js().arg("--help").assert().success();
}

#[test]
fn test_bootstrap_help() {
    sumup_js()
        .arg("bootstrap")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--target-dir"))
        .stdout(predicate::str::contains("--eslint"));
}

#[test]
fn test_bootstrap_eslint_base() {
    let temp = TempDir::new().unwrap();
    sumup_js()
        .arg("bootstrap")
        .arg("--target-dir")
        .arg(temp.path())
        .arg("--eslint")
        .assert()
        .success()
        .stdout(predicate::str::contains(".eslintrc.js"));

    assert_eq!(
        read(&temp, ".eslintrc.js"),
        "module.exports = require('sumup-js/eslint').base"
    );
    assert!(!temp.path().join("prettier.config.js").exists());
    assert!(!temp.path().join("babel.config.js").exists());
}

#[test]
fn test_bootstrap_babel_variant() {
    let temp = TempDir::new().unwrap();
    sumup_js()
        .current_dir(temp.path())
        .arg("bootstrap")
        .arg("--babel")
        .arg("react")
        .assert()
        .success();

    assert_eq!(
        read(&temp, "babel.config.js"),
        "module.exports = require('sumup-js/babel').react"
    );
    assert_eq!(
        read(&temp, ".babelrc"),
        "{\n  \"presets\": [\n    \"./babel.config\"\n  ]\n}"
    );
}

#[test]
fn test_bootstrap_unsupported_variant_warns() {
    let temp = TempDir::new().unwrap();
    sumup_js()
        .arg("bootstrap")
        .arg("-t")
        .arg(temp.path())
        .arg("--prettier")
        .arg("unsupported-variant")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Config unsupported-variant is not available for prettier",
        ));

    assert_eq!(
        read(&temp, "prettier.config.js"),
        "module.exports = require('sumup-js/prettier').base"
    );
}

#[test]
fn test_bootstrap_all_overrides_variants() {
    let temp = TempDir::new().unwrap();
    sumup_js()
        .arg("bootstrap")
        .arg("-t")
        .arg(temp.path())
        .arg("--all")
        .arg("--eslint")
        .arg("react")
        .assert()
        .success();

    assert_eq!(
        read(&temp, ".eslintrc.js"),
        "module.exports = require('sumup-js/eslint').base"
    );
    assert!(temp.path().join("prettier.config.js").exists());
    assert!(temp.path().join("babel.config.js").exists());
    assert!(temp.path().join(".babelrc").exists());
}

#[test]
fn test_bootstrap_target_dir_from_env() {
    let temp = TempDir::new().unwrap();
    sumup_js()
        .env("SUMUP_JS_TARGET_DIR", temp.path())
        .arg("bootstrap")
        .arg("--prettier")
        .assert()
        .success();

    assert!(temp.path().join("prettier.config.js").exists());
}

#[test]
fn test_bootstrap_nothing_selected() {
    let temp = TempDir::new().unwrap();
    sumup_js()
        .arg("bootstrap")
        .arg("-t")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No tools selected"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_bootstrap_missing_target_dir_fails() {
    let temp = TempDir::new().unwrap();
    sumup_js()
        .arg("bootstrap")
        .arg("-t")
        .arg(temp.path().join("missing"))
        .arg("--eslint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to bootstrap configs"));
}

#[test]
fn test_bootstrap_parameter_file() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("web");
    fs::create_dir(&project).unwrap();
    fs::write(
        temp.path().join("sumup.toml"),
        "target_dir = \"web\"\neslint = \"node\"\nbabel = true\n",
    )
    .unwrap();

    sumup_js()
        .current_dir(temp.path())
        .arg("bootstrap")
        .arg("--config")
        .arg("sumup.toml")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(project.join(".eslintrc.js")).unwrap(),
        "module.exports = require('sumup-js/eslint').node"
    );
    assert!(project.join("babel.config.js").exists());
    assert!(project.join(".babelrc").exists());
}

#[test]
fn test_bootstrap_parameter_file_unknown_tool() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sumup.toml"), "tslint = true\n").unwrap();

    sumup_js()
        .current_dir(temp.path())
        .arg("bootstrap")
        .arg("-c")
        .arg("sumup.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No filename found for config tslint.",
        ));
}

#[test]
fn test_variants_lists_every_tool() {
    sumup_js()
        .arg("variants")
        .assert()
        .success()
        .stdout(predicate::str::contains(".eslintrc.js -> base, react, node"))
        .stdout(predicate::str::contains("prettier.config.js -> base"))
        .stdout(predicate::str::contains("babel.config.js -> base, react, node"));
}

#[test]
fn test_variants_unknown_tool() {
    sumup_js()
        .arg("variants")
        .arg("tslint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool 'tslint'"));
}
