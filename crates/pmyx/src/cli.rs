//! CLI definition using clap derive.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pmyx", about = "Inspect and configure tmux sessions and windows")]
pub struct Cli {
    /// tmux binary to run
    #[arg(long, global = true, env = "PMYX_TMUX_BIN", default_value = "tmux")]
    pub tmux_bin: String,

    /// tmux socket name (tmux -L)
    #[arg(long, short = 'L', global = true, env = "PMYX_SOCKET_NAME")]
    pub socket_name: Option<String>,

    /// tmux socket path (tmux -S), takes precedence over --socket-name
    #[arg(long, short = 'S', global = true, env = "PMYX_SOCKET_PATH")]
    pub socket_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List sessions (default)
    Ls(ListOpts),
    /// List the windows of a session
    Windows(WindowsOpts),
    /// Show all options of a session or window
    Show(ShowOpts),
    /// Print one option, falling back to the global value
    Get(GetOpts),
    /// Set an option
    Set(SetOpts),
    /// Remove an option so the global value applies
    Unset(GetOpts),
    /// Exit 0 if the session exists, 1 otherwise
    Exists(SessionArg),
    /// Create a detached session
    New(NewOpts),
    /// Kill a session
    Kill(SessionArg),
    /// Rename a session
    Rename(RenameOpts),
    /// Print tmux's own one-line summary of a session
    Describe(SessionArg),
    /// Print the tmux version
    Version,
}

#[derive(clap::Args, Default)]
pub struct ListOpts {
    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct WindowsOpts {
    pub session: String,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct ShowOpts {
    /// SESSION or SESSION:INDEX
    pub target: String,

    /// Treat a bare SESSION target as its current window
    #[arg(long, short = 'w')]
    pub window: bool,

    /// Show global defaults instead of the target's own options
    #[arg(long, short = 'g')]
    pub global: bool,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct GetOpts {
    /// SESSION or SESSION:INDEX
    pub target: String,

    /// Option name; `status_bg` and `status-bg` are equivalent
    pub option: String,

    /// Treat a bare SESSION target as its current window
    #[arg(long, short = 'w')]
    pub window: bool,
}

#[derive(clap::Args)]
pub struct SetOpts {
    /// SESSION or SESSION:INDEX
    pub target: String,

    /// Option name; `status_bg` and `status-bg` are equivalent
    pub option: String,

    /// Value as tmux spells it (`on`, `off`, `none`, numbers, text)
    pub value: String,

    /// Treat a bare SESSION target as its current window
    #[arg(long, short = 'w')]
    pub window: bool,

    /// Set the global default instead
    #[arg(long, short = 'g')]
    pub global: bool,
}

#[derive(clap::Args)]
pub struct SessionArg {
    pub session: String,
}

#[derive(clap::Args)]
pub struct NewOpts {
    pub session: String,

    /// Name of the first window
    #[arg(long, short = 'n')]
    pub window_name: Option<String>,

    /// Working directory of the first window
    #[arg(long, short = 'c')]
    pub start_directory: Option<String>,
}

#[derive(clap::Args)]
pub struct RenameOpts {
    pub session: String,
    pub new_name: String,
}
