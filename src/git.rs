use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Git error type
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Command failed: `{command}`\n{stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Everything we capture from the repository for one run. Immutable once
/// built; valid only for the working tree state at invocation time.
#[derive(Debug, Clone)]
pub struct RepoSnapshot {
    pub status: String,
    pub log: String,
    pub diff: String,
    pub branch: String,
}

/// Wrapper for executing git in a working directory.
///
/// Commands are always invoked with an argument list, never through a shell,
/// so branch names or paths with special characters cannot inject.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let command = format!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| GitError::Spawn {
                command: command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::CommandFailed { command, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Human-readable working tree status.
    pub fn status(&self) -> Result<String, GitError> {
        self.run(&["status"])
    }

    /// Commits on HEAD that are not on `base`, one line each, merges omitted.
    pub fn log(&self, base: &str) -> Result<String, GitError> {
        let range = format!("{}..HEAD", base);
        self.run(&["log", &range, "--oneline", "--no-merges"])
    }

    /// Diff of the working tree against `base` with the given context size.
    pub fn diff(&self, base: &str, context_lines: u32) -> Result<String, GitError> {
        let context = format!("-U{}", context_lines);
        self.run(&["diff", base, &context])
    }

    /// Current branch name ("HEAD" when detached).
    pub fn current_branch(&self) -> Result<String, GitError> {
        Ok(self
            .run(&["rev-parse", "--abbrev-ref", "HEAD"])?
            .trim()
            .to_string())
    }

    /// Capture status, log, diff, and branch name in one pass.
    pub fn snapshot(
        &self,
        base: &str,
        context_lines: u32,
        include_status: bool,
    ) -> Result<RepoSnapshot, GitError> {
        let status = if include_status {
            self.status()?
        } else {
            String::new()
        };
        let log = self.log(base)?;
        let diff = self.diff(base, context_lines)?;
        let branch = self.current_branch()?;

        Ok(RepoSnapshot {
            status,
            log,
            diff,
            branch,
        })
    }
}
