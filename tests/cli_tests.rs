//! CLI integration tests

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with config, data and runtime dirs redirected into `home`
fn clip_buddy(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clip-buddy").expect("binary is built");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("XDG_RUNTIME_DIR", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    clip_buddy(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clipboard history"))
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--max-history-items"))
        .stdout(predicate::str::contains("--hotkey"))
        .stdout(predicate::str::contains("--notify"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    clip_buddy(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clip-buddy"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    clip_buddy(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clip-buddy"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn daemon_help_lists_actions() {
    let home = TempDir::new().unwrap();
    clip_buddy(home.path())
        .args(["daemon", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trigger"))
        .stdout(predicate::str::contains("select-recent"))
        .stdout(predicate::str::contains("select-pinned"))
        .stdout(predicate::str::contains("pin"))
        .stdout(predicate::str::contains("unpin"))
        .stdout(predicate::str::contains("clear"));
}

#[test]
fn config_init_set_get_round() {
    let home = TempDir::new().unwrap();

    clip_buddy(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file created"));

    clip_buddy(home.path())
        .args(["config", "get", "max_history_items"])
        .assert()
        .success()
        .stdout(predicate::str::diff("200\n"));

    clip_buddy(home.path())
        .args(["config", "set", "max_history_items", "50"])
        .assert()
        .success();

    clip_buddy(home.path())
        .args(["config", "set", "hotkey", "ctrl+shift+v"])
        .assert()
        .success();

    clip_buddy(home.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_history_items: 50"))
        .stdout(predicate::str::contains("hotkey: Control+Shift+V"))
        .stdout(predicate::str::contains("mode: default"));
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();
    clip_buddy(home.path()).args(["config", "init"]).assert().success();
    clip_buddy(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn daemon_commands_need_running_daemon() {
    let home = TempDir::new().unwrap();
    clip_buddy(home.path())
        .args(["daemon", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No daemon running"));
}

#[test]
fn invalid_startup_mode_is_usage_error() {
    let home = TempDir::new().unwrap();
    clip_buddy(home.path())
        .args(["--mode", "shuffle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid mode"));
}

#[test]
fn invalid_startup_capacity_is_usage_error() {
    let home = TempDir::new().unwrap();
    clip_buddy(home.path())
        .args(["--max-history-items", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid history capacity"));
}

#[cfg(unix)]
mod running_daemon {
    use super::*;
    use std::process::{Child, Command as StdCommand, Stdio};
    use std::thread::sleep;
    use std::time::{Duration, Instant};

    struct DaemonGuard(Child);

    impl Drop for DaemonGuard {
        fn drop(&mut self) {
            let _ = self.0.kill();
            let _ = self.0.wait();
        }
    }

    fn start_daemon(home: &Path) -> DaemonGuard {
        let child = StdCommand::new(env!("CARGO_BIN_EXE_clip-buddy"))
            .args(["--mode", "stack", "--poll-interval-ms", "100"])
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join("config"))
            .env("XDG_DATA_HOME", home.join("data"))
            .env("XDG_RUNTIME_DIR", home)
            .env_remove("DISPLAY")
            .env_remove("WAYLAND_DISPLAY")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("daemon starts");
        let guard = DaemonGuard(child);

        let socket = home.join("clip-buddy.sock");
        let deadline = Instant::now() + Duration::from_secs(10);
        while !socket.exists() {
            assert!(Instant::now() < deadline, "daemon socket never appeared");
            sleep(Duration::from_millis(50));
        }
        guard
    }

    #[test]
    fn control_a_running_daemon() {
        let home = TempDir::new().unwrap();
        let _daemon = start_daemon(home.path());

        clip_buddy(home.path())
            .args(["daemon", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("mode: stack"))
            .stdout(predicate::str::contains("not registered"));

        clip_buddy(home.path())
            .args(["daemon", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Recent:"))
            .stdout(predicate::str::contains("Pinned:"));

        clip_buddy(home.path())
            .args(["daemon", "select-recent", "3"])
            .assert()
            .success()
            .stderr(predicate::str::contains("No entry at index 3"));

        clip_buddy(home.path())
            .args(["daemon", "mode", "queue"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Queue"));

        clip_buddy(home.path())
            .args(["daemon", "trigger"])
            .assert()
            .success()
            .stderr(predicate::str::contains("ignored"));

        clip_buddy(home.path())
            .args(["config", "set", "max_history_items", "5"])
            .assert()
            .success()
            .stderr(predicate::str::contains("running daemon"));

        // No desktop session, so the new hotkey cannot be bound either
        clip_buddy(home.path())
            .args(["config", "set", "hotkey", "super+v"])
            .assert()
            .success()
            .stderr(predicate::str::contains("triggers are disabled"));

        clip_buddy(home.path())
            .args(["daemon", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("mode: queue"))
            .stdout(predicate::str::contains("/ 5"));
    }

    #[test]
    fn second_daemon_is_refused() {
        let home = TempDir::new().unwrap();
        let _daemon = start_daemon(home.path());

        clip_buddy(home.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("already running"));
    }
}
