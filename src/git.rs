//! Version-control adapter over the `git` binary.
//!
//! The rest of the crate never touches git internals; it goes through
//! this adapter and always names an explicit file set per commit, never
//! "commit everything".

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{Result, TesseraError};

/// Handle on a git working tree.
#[derive(Debug, Clone)]
pub struct Git {
    work_dir: PathBuf,
}

impl Git {
    /// Open the working tree containing `path`.
    ///
    /// # Errors
    ///
    /// Returns `NotARepository` if `path` is not inside a git working
    /// tree (or git itself is unavailable).
    pub fn discover(path: impl Into<PathBuf>) -> Result<Self> {
        let git = Self {
            work_dir: path.into(),
        };
        if git.is_working_tree() {
            Ok(git)
        } else {
            Err(TesseraError::NotARepository)
        }
    }

    /// Whether the directory is inside a git working tree.
    #[must_use]
    pub fn is_working_tree(&self) -> bool {
        self.run(&["rev-parse", "--is-inside-work-tree"])
            .is_ok_and(|out| out.trim() == "true")
    }

    /// Absolute path of the working tree's top-level directory.
    ///
    /// # Errors
    ///
    /// Returns `NotARepository` if git cannot report a top level.
    pub fn toplevel(&self) -> Result<PathBuf> {
        let out = self
            .run(&["rev-parse", "--show-toplevel"])
            .map_err(|_| TesseraError::NotARepository)?;
        Ok(PathBuf::from(out.trim()))
    }

    /// The committer identity from git config, with "unknown" fallbacks.
    #[must_use]
    pub fn user_identity(&self) -> (String, String) {
        let name = self
            .run(&["config", "user.name"])
            .map_or_else(|_| "unknown".to_string(), |v| v.trim().to_string());
        let email = self
            .run(&["config", "user.email"])
            .map_or_else(|_| "unknown".to_string(), |v| v.trim().to_string());
        (name, email)
    }

    /// Stage the given paths and commit them with `message`.
    ///
    /// # Errors
    ///
    /// Returns `CommitFailed` if staging or committing fails.
    pub fn commit(&self, paths: &[impl AsRef<Path>], message: &str) -> Result<()> {
        let paths = path_strings(paths);
        self.stage(&["add", "--"], &paths)?;
        self.commit_staged(&paths, message)
    }

    /// Stage removal of the given (already deleted) paths and commit.
    ///
    /// # Errors
    ///
    /// Returns `CommitFailed` if staging or committing fails.
    pub fn remove_and_commit(&self, paths: &[impl AsRef<Path>], message: &str) -> Result<()> {
        let paths = path_strings(paths);
        self.stage(&["rm", "-r", "-q", "--ignore-unmatch", "--"], &paths)?;
        self.commit_staged(&paths, message)
    }

    fn stage(&self, prefix: &[&str], paths: &[String]) -> Result<()> {
        let mut args: Vec<&str> = prefix.to_vec();
        args.extend(paths.iter().map(String::as_str));
        self.run(&args).map_err(TesseraError::CommitFailed)?;
        Ok(())
    }

    fn commit_staged(&self, paths: &[String], message: &str) -> Result<()> {
        let mut args = vec!["commit", "-m", message, "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run(&args).map_err(TesseraError::CommitFailed)?;
        Ok(())
    }

    /// Run a git subcommand in the working directory, capturing stdout.
    fn run(&self, args: &[&str]) -> std::result::Result<String, String> {
        debug!(?args, "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| format!("failed to run git: {e}"))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(stderr.trim().to_string())
        }
    }
}

fn path_strings(paths: &[impl AsRef<Path>]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.as_ref().display().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_repo() -> (tempfile::TempDir, Git) {
        let dir = tempfile::tempdir().unwrap();
        let status = Command::new("git")
            .args(["init", "-q"])
            .current_dir(dir.path())
            .status()
            .unwrap();
        assert!(status.success());
        for (key, value) in [("user.name", "tester"), ("user.email", "t@example.org")] {
            Command::new("git")
                .args(["config", key, value])
                .current_dir(dir.path())
                .status()
                .unwrap();
        }
        let git = Git::discover(dir.path()).unwrap();
        (dir, git)
    }

    #[test]
    fn discover_rejects_plain_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Git::discover(dir.path()),
            Err(TesseraError::NotARepository)
        ));
    }

    #[test]
    fn commit_explicit_paths() {
        let (dir, git) = scratch_repo();
        let file = dir.path().join("note.txt");
        std::fs::write(&file, "hello\n").unwrap();
        let other = dir.path().join("untouched.txt");
        std::fs::write(&other, "keep out\n").unwrap();

        git.commit(&[&file], "add note").unwrap();

        let log = git.run(&["log", "--oneline"]).unwrap();
        assert!(log.contains("add note"));
        // the unrelated file must not have been swept into the commit
        let status = git.run(&["status", "--porcelain"]).unwrap();
        assert!(status.contains("untouched.txt"));
    }

    #[test]
    fn remove_and_commit_deleted_directory() {
        let (dir, git) = scratch_repo();
        let sub = dir.path().join("issue");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("tessera"), "# t\n").unwrap();
        git.commit(&[&sub], "add issue").unwrap();

        std::fs::remove_dir_all(&sub).unwrap();
        git.remove_and_commit(&[&sub], "remove issue").unwrap();

        let status = git.run(&["status", "--porcelain"]).unwrap();
        assert!(status.trim().is_empty());
    }

    #[test]
    fn user_identity_from_config() {
        let (_dir, git) = scratch_repo();
        let (name, email) = git.user_identity();
        assert_eq!(name, "tester");
        assert_eq!(email, "t@example.org");
    }
}
