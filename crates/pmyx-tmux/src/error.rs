//! Error types for the tmux object layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("tmux binary not found: {0}")]
    NotFound(String),

    #[error("no tmux server running")]
    NoServer,

    #[error("tmux {command} failed (exit {code}): {stderr}")]
    CommandFailed {
        command: String,
        code: String,
        stderr: String,
    },

    #[error("failed to parse tmux output line {line_num}: {detail}")]
    ParseError { line_num: usize, detail: String },

    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("window not found: {session}:{window}")]
    WindowNotFound { session: String, window: String },

    #[error("option not set on {target}: {name}")]
    OptionNotFound { target: String, name: String },

    #[error("invalid option name: {0:?}")]
    InvalidOptionName(String),

    #[error("tmux io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TmuxError {
    /// True for errors meaning tmux ran and refused, as opposed to tmux not
    /// running at all because the process could not be spawned.
    pub fn is_exit_failure(&self) -> bool {
        matches!(self, TmuxError::CommandFailed { .. } | TmuxError::NoServer)
    }
}
