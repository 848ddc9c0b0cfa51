//! `list-sessions` / `list-windows` format strings and parsers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TmuxError;

/// Tab-delimited format for `tmux list-sessions -F`. The name goes last so a
/// stray tab in it cannot shift the numeric columns.
pub const LIST_SESSIONS_FORMAT: &str = "#{session_windows}\t#{session_created}\t#{session_width}\t#{session_height}\t#{session_attached}\t#{session_group}\t#{session_name}";

/// Tab-delimited format for `tmux list-windows -F`, name last.
pub const LIST_WINDOWS_FORMAT: &str = "#{window_index}\t#{window_active}\t#{window_panes}\t#{window_width}\t#{window_height}\t#{window_layout}\t#{window_name}";

const SESSION_FIELDS: usize = 7;
const WINDOW_FIELDS: usize = 7;

/// Snapshot of one session as reported by `list-sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionInfo {
    pub name: String,
    pub windows: u32,
    pub created: DateTime<Utc>,
    pub width: u16,
    pub height: u16,
    /// Number of attached clients.
    pub attached: u32,
    pub group: Option<String>,
}

impl SessionInfo {
    pub fn is_attached(&self) -> bool {
        self.attached > 0
    }

    /// `WIDTHxHEIGHT`, the way tmux prints session sizes.
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Snapshot of one window as reported by `list-windows`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowInfo {
    pub index: u32,
    pub name: String,
    pub active: bool,
    pub panes: u32,
    pub width: u16,
    pub height: u16,
    pub layout: String,
}

pub fn parse_sessions(output: &str) -> Result<Vec<SessionInfo>, TmuxError> {
    let mut sessions = Vec::new();
    for (idx, line) in output.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        sessions.push(parse_session_line(line, idx + 1)?);
    }
    Ok(sessions)
}

fn parse_session_line(line: &str, line_num: usize) -> Result<SessionInfo, TmuxError> {
    let parts: Vec<&str> = line.splitn(SESSION_FIELDS, '\t').collect();
    if parts.len() < SESSION_FIELDS {
        return Err(TmuxError::ParseError {
            line_num,
            detail: format!(
                "expected {SESSION_FIELDS} tab-separated session fields, got {}",
                parts.len()
            ),
        });
    }

    let created = parts[1]
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_default();
    let group = Some(parts[5].trim())
        .filter(|g| !g.is_empty())
        .map(str::to_string);

    Ok(SessionInfo {
        name: parts[6].to_string(),
        windows: parse_num(parts[0]),
        created,
        width: parse_num(parts[2]),
        height: parse_num(parts[3]),
        attached: parse_num(parts[4]),
        group,
    })
}

pub fn parse_windows(output: &str) -> Result<Vec<WindowInfo>, TmuxError> {
    let mut windows = Vec::new();
    for (idx, line) in output.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        windows.push(parse_window_line(line, idx + 1)?);
    }
    windows.sort_by_key(|w| w.index);
    Ok(windows)
}

fn parse_window_line(line: &str, line_num: usize) -> Result<WindowInfo, TmuxError> {
    let parts: Vec<&str> = line.splitn(WINDOW_FIELDS, '\t').collect();
    if parts.len() < WINDOW_FIELDS {
        return Err(TmuxError::ParseError {
            line_num,
            detail: format!(
                "expected {WINDOW_FIELDS} tab-separated window fields, got {}",
                parts.len()
            ),
        });
    }

    // The index is the window's identity; unlike the counters it has no
    // sensible default.
    let index = parts[0]
        .trim()
        .parse::<u32>()
        .map_err(|e| TmuxError::ParseError {
            line_num,
            detail: format!("bad window index {:?}: {e}", parts[0]),
        })?;

    Ok(WindowInfo {
        index,
        name: parts[6].to_string(),
        active: parts[1].trim() == "1",
        panes: parse_num(parts[2]),
        width: parse_num(parts[3]),
        height: parse_num(parts[4]),
        layout: parts[5].to_string(),
    })
}

/// Find `name`'s line in default (unformatted) `list-sessions` output, e.g.
/// `main: 3 windows (created Mon Oct 19 10:00:00 2026) (attached)`.
pub fn default_line_for<'a>(output: &'a str, name: &str) -> Option<&'a str> {
    output
        .lines()
        .find(|line| line.split_once(':').map(|(n, _)| n) == Some(name))
}

fn parse_num<T: std::str::FromStr + Default>(s: &str) -> T {
    s.trim().parse().unwrap_or_default()
}
