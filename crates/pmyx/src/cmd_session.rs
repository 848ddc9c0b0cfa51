//! `pmyx exists|new|kill|rename|describe` — session lifecycle.

use anyhow::Context;
use pmyx_tmux::{NewSession, Tmux, TmuxCommandRunner};

use crate::cli::{NewOpts, RenameOpts};

/// Returns the process exit code: 0 when the session exists, 1 otherwise.
pub fn cmd_exists(tmux: &Tmux<impl TmuxCommandRunner>, session: &str) -> anyhow::Result<i32> {
    let exists = tmux
        .session(session)
        .exists()
        .with_context(|| format!("checking for session {session}"))?;
    Ok(if exists { 0 } else { 1 })
}

pub fn cmd_new(tmux: &Tmux<impl TmuxCommandRunner>, opts: &NewOpts) -> anyhow::Result<()> {
    let settings = NewSession {
        window_name: opts.window_name.clone(),
        start_directory: opts.start_directory.clone(),
        ..Default::default()
    };
    let session = tmux
        .new_session(&opts.session, &settings)
        .with_context(|| format!("creating session {}", opts.session))?;
    tracing::info!(session = session.name(), "session created");
    Ok(())
}

pub fn cmd_kill(tmux: &Tmux<impl TmuxCommandRunner>, session: &str) -> anyhow::Result<()> {
    tmux.session(session)
        .kill()
        .with_context(|| format!("killing session {session}"))
}

pub fn cmd_rename(tmux: &Tmux<impl TmuxCommandRunner>, opts: &RenameOpts) -> anyhow::Result<()> {
    let mut session = tmux.session(&opts.session);
    session
        .rename(&opts.new_name)
        .with_context(|| format!("renaming {} to {}", opts.session, opts.new_name))
}

pub fn cmd_describe(tmux: &Tmux<impl TmuxCommandRunner>, session: &str) -> anyhow::Result<()> {
    let line = tmux
        .session(session)
        .describe()
        .with_context(|| format!("describing session {session}"))?;
    println!("{line}");
    Ok(())
}
