//! Tmux: entry point bound to one tmux server.

use crate::command::TmuxCommand;
use crate::error::TmuxError;
use crate::executor::{TmuxCommandRunner, TmuxExecutor};
use crate::parse::{LIST_SESSIONS_FORMAT, SessionInfo, parse_sessions};
use crate::session::Session;

/// Settings for `new-session`. Sessions are always created detached.
#[derive(Debug, Clone, Default)]
pub struct NewSession {
    pub window_name: Option<String>,
    pub start_directory: Option<String>,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

/// A tmux server reached through a command runner.
///
/// `Tmux::default()` needs the runner spelled out, since default type
/// parameters do not drive inference: `Tmux::<TmuxExecutor>::default()`.
#[derive(Debug, Clone, Default)]
pub struct Tmux<R = TmuxExecutor> {
    runner: R,
}

impl<R: TmuxCommandRunner> Tmux<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Every session the server tracks. No server means no sessions.
    pub fn session_infos(&self) -> Result<Vec<SessionInfo>, TmuxError> {
        let command = TmuxCommand::new("list-sessions").option("-F", LIST_SESSIONS_FORMAT);
        match command.run(&self.runner) {
            Ok(Some(out)) => parse_sessions(&out),
            Ok(None) | Err(TmuxError::NoServer) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    pub fn sessions(&self) -> Result<Vec<Session<'_, R>>, TmuxError> {
        Ok(self
            .session_infos()?
            .into_iter()
            .map(|info| Session::new(&self.runner, info.name))
            .collect())
    }

    /// Handle for `name`; tmux is not consulted.
    pub fn session(&self, name: impl Into<String>) -> Session<'_, R> {
        Session::new(&self.runner, name)
    }

    /// Handle for `name` only if tmux knows that session.
    pub fn find_session(&self, name: &str) -> Result<Option<Session<'_, R>>, TmuxError> {
        let session = self.session(name);
        Ok(session.exists()?.then_some(session))
    }

    /// Create a detached session. The handle carries the name tmux actually
    /// assigned, which differs from `name` when it contains `.` or `:`.
    pub fn new_session(&self, name: &str, opts: &NewSession) -> Result<Session<'_, R>, TmuxError> {
        tracing::debug!(session = name, "creating session");
        let created = TmuxCommand::new("new-session")
            .flag("detached")
            .flag("-P")
            .option("-F", "#{session_name}")
            .option("-s", name)
            .option_if_some("-n", opts.window_name.clone())
            .option_if_some("-c", opts.start_directory.clone())
            .option_if_some("-x", opts.width.map(|w| w.to_string()))
            .option_if_some("-y", opts.height.map(|h| h.to_string()))
            .run(&self.runner)?;
        Ok(self.session(created.unwrap_or_else(|| name.to_string())))
    }

    pub fn kill_server(&self) -> Result<(), TmuxError> {
        TmuxCommand::new("kill-server").run(&self.runner).map(drop)
    }

    /// `tmux -V`, e.g. `tmux 3.4`.
    pub fn version(&self) -> Result<String, TmuxError> {
        Ok(TmuxCommand::new("-V")
            .run(&self.runner)?
            .unwrap_or_default())
    }
}
