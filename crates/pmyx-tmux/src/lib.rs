//! pmyx-tmux: tmux sessions and windows as objects.
//!
//! Every operation spawns the `tmux` binary once and parses what it prints;
//! tmux itself owns all state. `TmuxCommandRunner` is the process boundary
//! and can be swapped for a mock.

pub mod command;
pub mod error;
pub mod executor;
pub mod object;
pub mod options;
pub mod parse;
pub mod server;
pub mod session;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use command::TmuxCommand;
pub use error::TmuxError;
pub use executor::{TmuxCommandRunner, TmuxExecutor};
pub use object::TmuxObject;
pub use options::{OptionMap, OptionScope, OptionValue, ident_name, option_name, parse_show_options};
pub use parse::{
    LIST_SESSIONS_FORMAT, LIST_WINDOWS_FORMAT, SessionInfo, WindowInfo, parse_sessions,
    parse_windows,
};
pub use server::{NewSession, Tmux};
pub use session::Session;
pub use window::Window;
