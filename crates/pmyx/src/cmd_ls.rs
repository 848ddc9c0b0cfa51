//! `pmyx ls` and `pmyx windows` — session and window listings.

use anyhow::Context;
use chrono::{DateTime, Utc};
use pmyx_tmux::{SessionInfo, Tmux, TmuxCommandRunner, WindowInfo};

use crate::context::relative_time;

/// Entry point for `pmyx ls`.
pub fn cmd_ls(tmux: &Tmux<impl TmuxCommandRunner>, json: bool) -> anyhow::Result<()> {
    let sessions = tmux.session_infos().context("listing sessions")?;
    tracing::debug!(count = sessions.len(), "sessions listed");

    let output = if json {
        serde_json::to_string_pretty(&sessions)?
    } else {
        format_sessions(&sessions, Utc::now())
    };
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Entry point for `pmyx windows SESSION`.
pub fn cmd_windows(
    tmux: &Tmux<impl TmuxCommandRunner>,
    session: &str,
    json: bool,
) -> anyhow::Result<()> {
    let windows = tmux
        .session(session)
        .window_infos()
        .with_context(|| format!("listing windows of {session}"))?;

    let output = if json {
        serde_json::to_string_pretty(&windows)?
    } else {
        format_windows(&windows)
    };
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// One line per session: name, window count, size, age, attached marker.
pub(crate) fn format_sessions(sessions: &[SessionInfo], now: DateTime<Utc>) -> String {
    let width = sessions
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for s in sessions {
        let age = relative_time((now - s.created).num_seconds());
        let attached = if s.is_attached() { "  (attached)" } else { "" };
        let group = s
            .group
            .as_deref()
            .map(|g| format!("  [group {g}]"))
            .unwrap_or_default();
        out.push_str(&format!(
            "{:<width$}  {} {:<7}  {:>9}  {:<8}{attached}{group}\n",
            s.name,
            s.windows,
            if s.windows == 1 { "window" } else { "windows" },
            s.size(),
            age,
        ));
    }
    out.trim_end().to_string()
}

/// One line per window, the active one starred, tmux style.
pub(crate) fn format_windows(windows: &[WindowInfo]) -> String {
    let mut out = String::new();
    for w in windows {
        let marker = if w.active { "*" } else { " " };
        out.push_str(&format!(
            "{}: {}{marker}  ({} {})  [{}x{}]\n",
            w.index,
            w.name,
            w.panes,
            if w.panes == 1 { "pane" } else { "panes" },
            w.width,
            w.height,
        ));
    }
    out.trim_end().to_string()
}
