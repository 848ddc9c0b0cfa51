//! Scripted mock runner shared by unit tests.

use std::sync::Mutex;

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

enum Reply {
    Stdout(String),
    Fail(String),
    NoServer,
}

struct Rule {
    tokens: Vec<String>,
    reply: Reply,
}

/// Answers tmux argv by rule. A rule matches when every one of its tokens
/// appears in the argv; among matching rules the one with most tokens wins.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    rules: Vec<Rule>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(self, command: &str, stdout: &str) -> Self {
        self.on_args(&[command], stdout)
    }

    pub(crate) fn on_args(mut self, tokens: &[&str], stdout: &str) -> Self {
        self.rules.push(Rule {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            reply: Reply::Stdout(stdout.to_string()),
        });
        self
    }

    pub(crate) fn fail(self, command: &str, stderr: &str) -> Self {
        self.fail_args(&[command], stderr)
    }

    pub(crate) fn fail_args(mut self, tokens: &[&str], stderr: &str) -> Self {
        self.rules.push(Rule {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            reply: Reply::Fail(stderr.to_string()),
        });
        self
    }

    pub(crate) fn no_server(mut self, command: &str) -> Self {
        self.rules.push(Rule {
            tokens: vec![command.to_string()],
            reply: Reply::NoServer,
        });
        self
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl TmuxCommandRunner for ScriptedRunner {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(args.iter().map(|a| a.to_string()).collect());

        let rule = self
            .rules
            .iter()
            .filter(|r| r.tokens.iter().all(|t| args.contains(&t.as_str())))
            .max_by_key(|r| r.tokens.len());

        let command = args.first().copied().unwrap_or_default().to_string();
        match rule.map(|r| &r.reply) {
            Some(Reply::Stdout(s)) => Ok(s.clone()),
            Some(Reply::Fail(stderr)) => Err(TmuxError::CommandFailed {
                command,
                code: "1".into(),
                stderr: stderr.clone(),
            }),
            Some(Reply::NoServer) => Err(TmuxError::NoServer),
            None => Err(TmuxError::CommandFailed {
                command,
                code: "1".into(),
                stderr: format!("unscripted: {args:?}"),
            }),
        }
    }
}
