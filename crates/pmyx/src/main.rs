//! pmyx: inspect and configure tmux sessions and windows from the shell.

use clap::Parser;
use pmyx_tmux::{Tmux, TmuxExecutor};

mod cli;
mod cmd_ls;
mod cmd_options;
mod cmd_session;
mod context;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("PMYX_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let mut executor = TmuxExecutor::new(&args.tmux_bin);
    if let Some(path) = args.socket_path {
        executor = executor.with_socket_path(path);
    } else if let Some(name) = args.socket_name {
        executor = executor.with_socket_name(name);
    }
    let tmux = Tmux::new(executor);

    let command = args
        .command
        .unwrap_or_else(|| cli::Command::Ls(cli::ListOpts::default()));

    match command {
        cli::Command::Ls(opts) => cmd_ls::cmd_ls(&tmux, opts.json)?,
        cli::Command::Windows(opts) => cmd_ls::cmd_windows(&tmux, &opts.session, opts.json)?,
        cli::Command::Show(opts) => cmd_options::cmd_show(&tmux, &opts)?,
        cli::Command::Get(opts) => cmd_options::cmd_get(&tmux, &opts)?,
        cli::Command::Set(opts) => cmd_options::cmd_set(&tmux, &opts)?,
        cli::Command::Unset(opts) => cmd_options::cmd_unset(&tmux, &opts)?,
        cli::Command::Exists(opts) => {
            let exit_code = cmd_session::cmd_exists(&tmux, &opts.session)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        cli::Command::New(opts) => cmd_session::cmd_new(&tmux, &opts)?,
        cli::Command::Kill(opts) => cmd_session::cmd_kill(&tmux, &opts.session)?,
        cli::Command::Rename(opts) => cmd_session::cmd_rename(&tmux, &opts)?,
        cli::Command::Describe(opts) => cmd_session::cmd_describe(&tmux, &opts.session)?,
        cli::Command::Version => println!("{}", tmux.version()?),
    }

    Ok(())
}
