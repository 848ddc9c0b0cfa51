//! TmuxCommandRunner trait and TmuxExecutor (sync subprocess wrapper).

use std::process::Command;

use crate::error::TmuxError;

/// Trait for executing tmux commands. Enables mock injection for testing.
pub trait TmuxCommandRunner: Send + Sync {
    /// Run tmux with `args` and return its stdout.
    fn run(&self, args: &[&str]) -> Result<String, TmuxError>;

    /// Run tmux with `args` and report only whether it exited 0.
    ///
    /// A refusal from tmux (non-zero exit, no server) is `Ok(false)`;
    /// failing to start tmux at all is still an error.
    fn succeeds(&self, args: &[&str]) -> Result<bool, TmuxError> {
        match self.run(args) {
            Ok(_) => Ok(true),
            Err(e) if e.is_exit_failure() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<T: TmuxCommandRunner + ?Sized> TmuxCommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        (**self).run(args)
    }

    fn succeeds(&self, args: &[&str]) -> Result<bool, TmuxError> {
        (**self).succeeds(args)
    }
}

/// Real tmux executor using `std::process::Command`.
///
/// Each call spawns a new `tmux` process, so the executor holds no
/// state beyond its configuration.
#[derive(Debug, Clone)]
pub struct TmuxExecutor {
    tmux_bin: String,
    socket_path: Option<String>,
    socket_name: Option<String>,
}

impl TmuxExecutor {
    pub fn new(tmux_bin: impl Into<String>) -> Self {
        Self {
            tmux_bin: tmux_bin.into(),
            socket_path: None,
            socket_name: None,
        }
    }

    #[must_use]
    pub fn with_socket_path(mut self, path: impl Into<String>) -> Self {
        self.socket_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.socket_name = Some(name.into());
        self
    }

    pub fn tmux_bin(&self) -> &str {
        &self.tmux_bin
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.tmux_bin);
        // Socket path takes precedence over socket name
        if let Some(ref path) = self.socket_path {
            cmd.args(["-S", path]);
        } else if let Some(ref name) = self.socket_name {
            cmd.args(["-L", name]);
        }
        cmd.args(args);
        cmd
    }
}

impl Default for TmuxExecutor {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxCommandRunner for TmuxExecutor {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        tracing::debug!(bin = %self.tmux_bin, ?args, "running tmux");
        let output = self.command(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TmuxError::NotFound(self.tmux_bin.clone())
            } else {
                TmuxError::Io(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            tracing::debug!(?args, status = ?output.status.code(), stderr, "tmux exited non-zero");
            if is_no_server(stderr) {
                return Err(TmuxError::NoServer);
            }
            return Err(TmuxError::CommandFailed {
                command: args.first().copied().unwrap_or_default().to_string(),
                code: output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".into()),
                stderr: stderr.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// tmux reports a missing server on stderr in a couple of shapes depending
/// on version and on whether the socket file exists.
fn is_no_server(stderr: &str) -> bool {
    stderr.contains("no server running") || stderr.starts_with("error connecting to")
}
