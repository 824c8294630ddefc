//! Integration tests for the dbusrunner binary. None of them needs a bus.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's config and environment.
fn dbusrunner(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("dbusrunner");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("DBUSRUNNER_SERVICE__APP_NAME");
    cmd
}

#[test]
fn help_lists_every_command() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn list_as_ids() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("runner\nrunner-scoped\n");
}

#[test]
fn list_as_json() {
    let temp = TempDir::new().unwrap();
    let out = dbusrunner(temp.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["id"], "runner-scoped");
    assert_eq!(items[1]["path_style"], "app-scoped");
    assert_eq!(items[1]["files"], 5);
}

#[test]
fn new_generates_project() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .args([
            "new",
            "WebSearch",
            "--author",
            "Jane Doe",
            "--email",
            "jane@example.org",
            "--year",
            "2030",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Runner 'WebSearch' created!"));

    let root = temp.path().join("websearch");
    for file in [
        "Cargo.toml",
        "src/main.rs",
        "websearch.desktop",
        "org.kde.websearch.service",
        "README.md",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }

    let desktop = fs::read_to_string(root.join("websearch.desktop")).unwrap();
    assert!(desktop.contains("SPDX-FileCopyrightText: 2030 Jane Doe <jane@example.org>"));
    assert!(desktop.contains("X-Plasma-DBusRunner-Service=org.kde.websearch"));
    assert!(desktop.contains("X-Plasma-DBusRunner-Path=/runner"));
}

fn exec_line(root: &Path, service_file: &str) -> String {
    let service = fs::read_to_string(root.join(service_file)).unwrap();
    service
        .lines()
        .find_map(|l| l.strip_prefix("Exec="))
        .unwrap()
        .to_owned()
}

#[test]
fn new_activation_file_execs_cargo_bin() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .env_remove("CARGO_HOME")
        .args(["new", "WebSearch", "--yes"])
        .assert()
        .success();

    let exec = exec_line(&temp.path().join("websearch"), "org.kde.websearch.service");
    assert!(Path::new(&exec).is_absolute(), "{exec}");
    assert_eq!(
        PathBuf::from(exec),
        temp.path().join(".cargo/bin/websearch")
    );
}

#[test]
fn new_bindir_flag_and_cargo_home() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .env("CARGO_HOME", temp.path().join("cargo"))
        .args(["new", "Greeter", "--yes"])
        .assert()
        .success();
    assert_eq!(
        PathBuf::from(exec_line(&temp.path().join("greeter"), "org.kde.greeter.service")),
        temp.path().join("cargo/bin/greeter")
    );

    dbusrunner(temp.path())
        .args(["new", "Other", "--bindir", "/opt/runners/bin", "--yes"])
        .assert()
        .success();
    assert_eq!(
        exec_line(&temp.path().join("other"), "org.kde.other.service"),
        "/opt/runners/bin/other"
    );
}

#[test]
fn new_scoped_template_uses_app_path() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .args(["new", "Greeter", "--template", "runner-scoped", "--yes"])
        .assert()
        .success();

    let main_rs = fs::read_to_string(temp.path().join("greeter/src/main.rs")).unwrap();
    assert!(main_rs.contains(r#"const OBJECT_PATH: &str = "/greeter";"#));
}

#[test]
fn new_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .args(["new", "Greeter", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("greeter.desktop"));

    assert!(!temp.path().join("greeter").exists());
}

#[test]
fn new_uses_config_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("cfg.toml");
    fs::write(
        &config,
        "[author]\nname = \"Config Author\"\nemail = \"cfg@example.org\"\n\n[templates]\ndefault = \"runner-scoped\"\n",
    )
    .unwrap();

    dbusrunner(temp.path())
        .args(["--config", config.to_str().unwrap(), "new", "Greeter", "--yes"])
        .assert()
        .success();

    let cargo_toml = fs::read_to_string(temp.path().join("greeter/Cargo.toml")).unwrap();
    assert!(cargo_toml.contains("Config Author <cfg@example.org>"));
    let desktop = fs::read_to_string(temp.path().join("greeter/greeter.desktop")).unwrap();
    assert!(desktop.contains("X-Plasma-DBusRunner-Path=/greeter"));
}

#[test]
fn new_force_overwrites() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("greeter");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("stale.txt"), "old").unwrap();

    dbusrunner(temp.path())
        .args(["new", "Greeter", "--yes", "--force"])
        .assert()
        .success();

    assert!(!root.join("stale.txt").exists());
    assert!(root.join("Cargo.toml").exists());
}

#[test]
fn config_get_reads_file_and_env() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("cfg.toml");
    fs::write(&config, "[service]\napp_name = \"FromFile\"\n").unwrap();

    dbusrunner(temp.path())
        .args(["--config", config.to_str().unwrap(), "config", "get", "service.app_name"])
        .assert()
        .success()
        .stdout("FromFile\n");

    dbusrunner(temp.path())
        .env("DBUSRUNNER_SERVICE__APP_NAME", "FromEnv")
        .args(["--config", config.to_str().unwrap(), "config", "get", "service.app_name"])
        .assert()
        .success()
        .stdout("FromEnv\n");
}

#[test]
fn init_local_writes_defaults_once() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join(".dbusrunner.toml")).unwrap();
    assert!(written.contains("app_name = \"DBusRunner\""));

    fs::write(temp.path().join(".dbusrunner.toml"), "# mine\n").unwrap();
    dbusrunner(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(temp.path().join(".dbusrunner.toml")).unwrap(),
        "# mine\n"
    );
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    dbusrunner(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dbusrunner"));
}
