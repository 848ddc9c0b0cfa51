//! Session handle: lookup, window enumeration and session-level commands.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::command::TmuxCommand;
use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;
use crate::object::TmuxObject;
use crate::parse::{
    LIST_SESSIONS_FORMAT, LIST_WINDOWS_FORMAT, SessionInfo, WindowInfo, default_line_for,
    parse_sessions, parse_windows,
};
use crate::window::Window;

/// A named tmux session. The handle holds only the name; every accessor asks
/// tmux afresh.
pub struct Session<'t, R> {
    runner: &'t R,
    name: String,
}

impl<R> Session<'_, R> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'t, R: TmuxCommandRunner> Session<'t, R> {
    pub(crate) fn new(runner: &'t R, name: impl Into<String>) -> Self {
        Self {
            runner,
            name: name.into(),
        }
    }

    pub fn info(&self) -> Result<SessionInfo, TmuxError> {
        let out = TmuxCommand::new("list-sessions")
            .option("-F", LIST_SESSIONS_FORMAT)
            .run(self.runner)
            .map_err(|e| self.not_found_if_no_server(e))?
            .unwrap_or_default();
        parse_sessions(&out)?
            .into_iter()
            .find(|s| s.name == self.name)
            .ok_or_else(|| TmuxError::SessionNotFound(self.name.clone()))
    }

    /// This session's line from plain `list-sessions`.
    pub fn describe(&self) -> Result<String, TmuxError> {
        let out = TmuxCommand::new("list-sessions")
            .run(self.runner)
            .map_err(|e| self.not_found_if_no_server(e))?
            .unwrap_or_default();
        default_line_for(&out, &self.name)
            .map(str::to_string)
            .ok_or_else(|| TmuxError::SessionNotFound(self.name.clone()))
    }

    pub fn window_count(&self) -> Result<usize, TmuxError> {
        Ok(self.window_infos()?.len())
    }

    pub fn size(&self) -> Result<String, TmuxError> {
        Ok(self.info()?.size())
    }

    pub fn width(&self) -> Result<u16, TmuxError> {
        Ok(self.info()?.width)
    }

    pub fn height(&self) -> Result<u16, TmuxError> {
        Ok(self.info()?.height)
    }

    pub fn created(&self) -> Result<DateTime<Utc>, TmuxError> {
        Ok(self.info()?.created)
    }

    pub fn is_attached(&self) -> Result<bool, TmuxError> {
        Ok(self.info()?.is_attached())
    }

    /// Whether tmux has a session with exactly this name.
    pub fn exists(&self) -> Result<bool, TmuxError> {
        self.succeeds(TmuxCommand::new("has-session"))
    }

    pub fn window_infos(&self) -> Result<Vec<WindowInfo>, TmuxError> {
        let out = self.cmd(TmuxCommand::new("list-windows").option("-F", LIST_WINDOWS_FORMAT))?;
        match out {
            Some(out) => parse_windows(&out),
            None => Ok(Vec::new()),
        }
    }

    /// Windows in index order.
    pub fn windows(&self) -> Result<Vec<Window<'t, R>>, TmuxError> {
        Ok(self
            .window_infos()?
            .into_iter()
            .map(|w| Window::new(self.clone(), w.index))
            .collect())
    }

    pub fn window(&self, index: u32) -> Result<Window<'t, R>, TmuxError> {
        if self.window_infos()?.iter().any(|w| w.index == index) {
            Ok(Window::new(self.clone(), index))
        } else {
            Err(self.window_not_found(index.to_string()))
        }
    }

    /// First window (lowest index) called `name`.
    pub fn window_by_name(&self, name: &str) -> Result<Window<'t, R>, TmuxError> {
        self.window_infos()?
            .into_iter()
            .find(|w| w.name == name)
            .map(|w| Window::new(self.clone(), w.index))
            .ok_or_else(|| self.window_not_found(name.to_string()))
    }

    /// The session's current window.
    pub fn active_window(&self) -> Result<Window<'t, R>, TmuxError> {
        self.window_infos()?
            .into_iter()
            .find(|w| w.active)
            .map(|w| Window::new(self.clone(), w.index))
            .ok_or_else(|| self.window_not_found("(active)".to_string()))
    }

    /// Create a window at the next free index.
    pub fn new_window(&self, name: Option<&str>) -> Result<Window<'t, R>, TmuxError> {
        let out = TmuxCommand::new("new-window")
            .flag("detached")
            .flag("-P")
            .option("-F", "#{window_index}")
            .target(format!("={}:", self.name))
            .option_if_some("-n", name)
            .run(self.runner)?
            .unwrap_or_default();
        let index = out.trim().parse::<u32>().map_err(|e| TmuxError::ParseError {
            line_num: 1,
            detail: format!("bad new-window index {out:?}: {e}"),
        })?;
        Ok(Window::new(self.clone(), index))
    }

    pub fn kill(&self) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new("kill-session")).map(drop)
    }

    pub fn lock(&self) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new("lock-session")).map(drop)
    }

    pub fn attach(&self) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new("attach-session")).map(drop)
    }

    /// Names of the clients attached to this session.
    pub fn list_clients(&self) -> Result<Vec<String>, TmuxError> {
        let out = self.cmd(TmuxCommand::new("list-clients").option("-F", "#{client_name}"))?;
        Ok(out
            .map(|o| o.lines().map(str::to_string).collect())
            .unwrap_or_default())
    }

    pub fn next_window(&self) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new("next-window")).map(drop)
    }

    pub fn previous_window(&self) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new("previous-window")).map(drop)
    }

    pub fn select_window(&self, index: u32) -> Result<(), TmuxError> {
        TmuxCommand::new("select-window")
            .target(format!("={}:{index}", self.name))
            .run(self.runner)
            .map(drop)
    }

    /// Rename the session and repoint this handle at the new name.
    pub fn rename(&mut self, new_name: &str) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new("rename-session").arg(new_name))?;
        tracing::debug!(from = %self.name, to = new_name, "session renamed");
        self.name = new_name.to_string();
        Ok(())
    }

    fn window_not_found(&self, window: String) -> TmuxError {
        TmuxError::WindowNotFound {
            session: self.name.clone(),
            window,
        }
    }

    fn not_found_if_no_server(&self, e: TmuxError) -> TmuxError {
        match e {
            TmuxError::NoServer => TmuxError::SessionNotFound(self.name.clone()),
            other => other,
        }
    }
}

impl<R: TmuxCommandRunner> TmuxObject for Session<'_, R> {
    type Runner = R;

    fn runner(&self) -> &R {
        self.runner
    }

    /// `=NAME`: a bare name would let tmux fall back to prefix matching.
    fn target(&self) -> String {
        format!("={}", self.name)
    }

    fn show_options_command(&self) -> &'static str {
        "show-options"
    }

    fn set_option_command(&self) -> &'static str {
        "set-option"
    }
}

impl<R> Clone for Session<'_, R> {
    fn clone(&self) -> Self {
        Self {
            runner: self.runner,
            name: self.name.clone(),
        }
    }
}

impl<R> PartialEq for Session<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<R> Eq for Session<'_, R> {}

impl<R> fmt::Debug for Session<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("name", &self.name).finish()
    }
}

impl<R> fmt::Display for Session<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Session {}>", self.name)
    }
}
