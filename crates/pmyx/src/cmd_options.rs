//! `pmyx show|get|set|unset` — option access on sessions and windows.

use anyhow::Context;
use pmyx_tmux::{OptionMap, OptionScope, OptionValue, Tmux, TmuxCommandRunner, TmuxObject};

use crate::cli::{GetOpts, SetOpts, ShowOpts};
use crate::context::Target;

/// Resolve `raw` to a session or window and hand it to `f`.
fn with_object<R, T>(
    tmux: &Tmux<R>,
    raw: &str,
    window: bool,
    f: impl ObjectFn<T>,
) -> anyhow::Result<T>
where
    R: TmuxCommandRunner,
{
    match (Target::parse(raw), window) {
        (Target::Window(session, index), _) => {
            let window = tmux
                .session(session)
                .window(index)
                .with_context(|| format!("resolving {raw}"))?;
            f.call(&window)
        }
        (Target::Session(session), true) => {
            let window = tmux
                .session(session)
                .active_window()
                .with_context(|| format!("resolving active window of {raw}"))?;
            f.call(&window)
        }
        (Target::Session(session), false) => f.call(&tmux.session(session)),
    }
}

/// A closure generic over the object kind; sessions and windows are
/// different types.
trait ObjectFn<T> {
    fn call<O: TmuxObject>(self, obj: &O) -> anyhow::Result<T>;
}

struct Show(OptionScope);

impl ObjectFn<OptionMap> for Show {
    fn call<O: TmuxObject>(self, obj: &O) -> anyhow::Result<OptionMap> {
        obj.show_options(self.0)
            .with_context(|| format!("showing options of {}", obj.target()))
    }
}

struct Get<'a>(&'a str);

impl ObjectFn<OptionValue> for Get<'_> {
    fn call<O: TmuxObject>(self, obj: &O) -> anyhow::Result<OptionValue> {
        obj.get(self.0)
            .with_context(|| format!("reading {} on {}", self.0, obj.target()))
    }
}

struct Set<'a> {
    name: &'a str,
    value: OptionValue,
    scope: OptionScope,
}

impl ObjectFn<()> for Set<'_> {
    fn call<O: TmuxObject>(self, obj: &O) -> anyhow::Result<()> {
        obj.set_scoped(self.name, self.value, self.scope)
            .with_context(|| format!("setting {} on {}", self.name, obj.target()))
    }
}

struct Unset<'a>(&'a str);

impl ObjectFn<()> for Unset<'_> {
    fn call<O: TmuxObject>(self, obj: &O) -> anyhow::Result<()> {
        obj.unset(self.0)
            .with_context(|| format!("unsetting {} on {}", self.0, obj.target()))
    }
}

fn scope(global: bool) -> OptionScope {
    if global {
        OptionScope::Global
    } else {
        OptionScope::Local
    }
}

pub fn cmd_show(tmux: &Tmux<impl TmuxCommandRunner>, opts: &ShowOpts) -> anyhow::Result<()> {
    let options = with_object(tmux, &opts.target, opts.window, Show(scope(opts.global)))?;
    let output = if opts.json {
        serde_json::to_string_pretty(&options)?
    } else {
        format_options(&options)
    };
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

pub fn cmd_get(tmux: &Tmux<impl TmuxCommandRunner>, opts: &GetOpts) -> anyhow::Result<()> {
    let value = with_object(tmux, &opts.target, opts.window, Get(&opts.option))?;
    println!("{value}");
    Ok(())
}

pub fn cmd_set(tmux: &Tmux<impl TmuxCommandRunner>, opts: &SetOpts) -> anyhow::Result<()> {
    let set = Set {
        name: &opts.option,
        value: OptionValue::from_tmux(&opts.value),
        scope: scope(opts.global),
    };
    with_object(tmux, &opts.target, opts.window, set)
}

pub fn cmd_unset(tmux: &Tmux<impl TmuxCommandRunner>, opts: &GetOpts) -> anyhow::Result<()> {
    with_object(tmux, &opts.target, opts.window, Unset(&opts.option))
}

/// `name value` lines, the way tmux prints them.
pub(crate) fn format_options(options: &OptionMap) -> String {
    options
        .iter()
        .map(|(name, value)| format!("{name} {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
