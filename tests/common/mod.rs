//! Shared helpers for e2e tests: a scratch git repository plus a way to
//! run the `git-tessera` binary and script the editor it invokes.

use std::path::PathBuf;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::TempDir;

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// A fresh git repository with a committer identity configured.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create tempdir");
        run_git(&dir, &["init", "-q"]);
        run_git(&dir, &["config", "user.name", "Test User"]);
        run_git(&dir, &["config", "user.email", "test@example.org"]);
        Self { dir }
    }

    /// A plain directory that is not a git repository.
    pub fn bare_dir() -> Self {
        Self {
            dir: TempDir::new().expect("create tempdir"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// The binary, rooted in this workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("git-tessera").expect("binary exists");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Pin `core.editor` in `.tesserae/config`.
    ///
    /// `"true"` leaves the template untouched and reports success;
    /// `"false"` simulates an aborted edit.
    pub fn set_editor(&self, editor: &str) {
        let config = self.dir.path().join(".tesserae").join("config");
        std::fs::write(config, format!("[core]\neditor = \"{editor}\"\n"))
            .expect("write config");
    }

    /// Install a one-line shell script as the editor, so edits actually
    /// change the file.
    pub fn set_appending_editor(&self, appended_line: &str) {
        let script = self.dir.path().join("fake-editor.sh");
        std::fs::write(
            &script,
            format!("#!/bin/sh\necho \"{appended_line}\" >> \"$1\"\n"),
        )
        .expect("write editor script");
        make_executable(&script);
        self.set_editor(&script.display().to_string());
    }

    /// Ids of all tessera directories currently under `.tesserae/`.
    pub fn tessera_ids(&self) -> Vec<String> {
        let root = self.dir.path().join(".tesserae");
        let mut ids = Vec::new();
        if let Ok(entries) = std::fs::read_dir(root) {
            for entry in entries.flatten() {
                if entry.path().is_dir() {
                    ids.push(entry.file_name().to_string_lossy().into_owned());
                }
            }
        }
        ids.sort();
        ids
    }

    /// One-line-per-commit git log.
    pub fn git_log(&self) -> String {
        let out = StdCommand::new("git")
            .args(["log", "--format=%s"])
            .current_dir(self.dir.path())
            .output()
            .expect("run git log");
        String::from_utf8_lossy(&out.stdout).into_owned()
    }

    /// Overwrite a tessera's body file directly on disk.
    pub fn write_body(&self, id: &str, body: &str) {
        let path: PathBuf = self.dir.path().join(".tesserae").join(id).join("tessera");
        std::fs::write(path, body).expect("write body");
    }
}

fn run_git(dir: &TempDir, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir.path())
        .status()
        .expect("run git");
    assert!(status.success(), "git {args:?} failed");
}

#[cfg(unix)]
fn make_executable(path: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path).expect("stat").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("chmod");
}

#[cfg(not(unix))]
fn make_executable(_path: &std::path::Path) {}
