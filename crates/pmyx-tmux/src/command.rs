//! TmuxCommand: argv builder for a single tmux invocation.
//!
//! Flags are named the way they read in calling code (`target`, `global`)
//! and collapse to tmux's single-letter switches on the command line.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// One flag of a tmux command, already reduced to its switch.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Flag {
    Switch(String),
    Value(String, String),
}

/// Builder for `tmux <command> [flags...] [args...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxCommand {
    name: String,
    flags: Vec<Flag>,
    args: Vec<String>,
}

impl TmuxCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: Vec::new(),
            args: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a value-less switch, e.g. `flag("global")` → `-g`.
    #[must_use]
    pub fn flag(mut self, name: &str) -> Self {
        self.flags.push(Flag::Switch(switch_for(name)));
        self
    }

    /// Add a switch only when `present` is true.
    #[must_use]
    pub fn flag_if(self, name: &str, present: bool) -> Self {
        if present { self.flag(name) } else { self }
    }

    /// Add a switch followed by its value, e.g. `option("target", "main")`.
    #[must_use]
    pub fn option(mut self, name: &str, value: impl Into<String>) -> Self {
        self.flags.push(Flag::Value(switch_for(name), value.into()));
        self
    }

    #[must_use]
    pub fn option_if_some(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.option(name, v),
            None => self,
        }
    }

    #[must_use]
    pub fn target(self, target: impl Into<String>) -> Self {
        self.option("target", target)
    }

    /// True when a `-t` has already been set.
    pub fn has_target(&self) -> bool {
        self.flags
            .iter()
            .any(|f| matches!(f, Flag::Value(s, _) if s == "-t"))
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Full argv after the tmux binary: name, flags in insertion order, args.
    pub fn to_args(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(1 + self.flags.len() * 2 + self.args.len());
        out.push(self.name.clone());
        for flag in &self.flags {
            match flag {
                Flag::Switch(s) => out.push(s.clone()),
                Flag::Value(s, v) => {
                    out.push(s.clone());
                    out.push(v.clone());
                }
            }
        }
        out.extend(self.args.iter().cloned());
        out
    }

    /// Execute and return trimmed stdout, or `None` when tmux printed nothing.
    pub fn run(&self, runner: &impl TmuxCommandRunner) -> Result<Option<String>, TmuxError> {
        let argv = self.to_args();
        let refs: Vec<&str> = argv.iter().map(String::as_str).collect();
        let stdout = runner.run(&refs)?;
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    /// Execute and report whether tmux exited 0.
    pub fn succeeds(&self, runner: &impl TmuxCommandRunner) -> Result<bool, TmuxError> {
        let argv = self.to_args();
        let refs: Vec<&str> = argv.iter().map(String::as_str).collect();
        runner.succeeds(&refs)
    }
}

/// `target` → `-t`, `t` → `-t`, `-x` → `-x`.
fn switch_for(name: &str) -> String {
    if name.starts_with('-') {
        return name.to_string();
    }
    match name.chars().next() {
        Some(c) => format!("-{c}"),
        None => String::new(),
    }
}
