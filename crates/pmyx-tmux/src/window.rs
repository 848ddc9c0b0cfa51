//! Window handle addressed as `=SESSION:INDEX`.

use std::fmt;

use crate::command::TmuxCommand;
use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;
use crate::object::TmuxObject;
use crate::parse::WindowInfo;
use crate::session::Session;

pub struct Window<'t, R> {
    session: Session<'t, R>,
    index: u32,
}

impl<'t, R: TmuxCommandRunner> Window<'t, R> {
    pub(crate) fn new(session: Session<'t, R>, index: u32) -> Self {
        Self { session, index }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn session(&self) -> &Session<'t, R> {
        &self.session
    }

    pub fn info(&self) -> Result<WindowInfo, TmuxError> {
        self.session
            .window_infos()?
            .into_iter()
            .find(|w| w.index == self.index)
            .ok_or_else(|| TmuxError::WindowNotFound {
                session: self.session.name().to_string(),
                window: self.index.to_string(),
            })
    }

    /// The window's own name (as opposed to its `SESSION:INDEX` target).
    pub fn name(&self) -> Result<String, TmuxError> {
        Ok(self.info()?.name)
    }

    pub fn kill(&self) -> Result<(), TmuxError> {
        self.run("kill-window")
    }

    pub fn select(&self) -> Result<(), TmuxError> {
        self.run("select-window")
    }

    pub fn rename(&self, new_name: &str) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new("rename-window").arg(new_name))
            .map(drop)
    }

    pub fn next_layout(&self) -> Result<(), TmuxError> {
        self.run("next-layout")
    }

    pub fn previous_layout(&self) -> Result<(), TmuxError> {
        self.run("previous-layout")
    }

    /// Apply a preset (`even-horizontal`, `tiled`, ...) or a layout string.
    pub fn select_layout(&self, layout: &str) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new("select-layout").arg(layout))
            .map(drop)
    }

    pub fn rotate(&self) -> Result<(), TmuxError> {
        self.run("rotate-window")
    }

    /// Restart the window's command; `kill` forces it if still running.
    pub fn respawn(&self, kill: bool) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new("respawn-window").flag_if("kill", kill))
            .map(drop)
    }

    pub fn unlink(&self) -> Result<(), TmuxError> {
        self.run("unlink-window")
    }

    pub fn display_panes(&self) -> Result<(), TmuxError> {
        self.run("display-panes")
    }

    pub fn last_pane(&self) -> Result<(), TmuxError> {
        self.run("last-pane")
    }

    /// Search the session's windows for `pattern` (names, titles and
    /// visible content) and switch to the match.
    pub fn find(&self, pattern: &str) -> Result<Option<String>, TmuxError> {
        self.cmd(TmuxCommand::new("find-window").arg(pattern))
    }

    fn run(&self, command: &str) -> Result<(), TmuxError> {
        self.cmd(TmuxCommand::new(command)).map(drop)
    }
}

impl<R: TmuxCommandRunner> TmuxObject for Window<'_, R> {
    type Runner = R;

    fn runner(&self) -> &R {
        self.session.runner()
    }

    fn target(&self) -> String {
        format!("={}:{}", self.session.name(), self.index)
    }

    fn show_options_command(&self) -> &'static str {
        "show-window-options"
    }

    fn set_option_command(&self) -> &'static str {
        "set-window-option"
    }
}

impl<R> Clone for Window<'_, R> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            index: self.index,
        }
    }
}

impl<R> PartialEq for Window<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && self.index == other.index
    }
}

impl<R> Eq for Window<'_, R> {}

impl<R> fmt::Debug for Window<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("session", &self.session.name())
            .field("index", &self.index)
            .finish()
    }
}

impl<R> fmt::Display for Window<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Window {}:{}>", self.session.name(), self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionScope, OptionValue};
    use crate::testing::ScriptedRunner;

    const WINDOWS: &str = "0\t1\t1\t200\t50\tlayout0\tshell\n2\t0\t3\t200\t50\tlayout2\tbuild\n";

    fn window(r: &ScriptedRunner, index: u32) -> Window<'_, ScriptedRunner> {
        Window::new(Session::new(r, "main"), index)
    }

    #[test]
    fn target_and_display() {
        let r = ScriptedRunner::new();
        let w = window(&r, 2);
        assert_eq!(w.target(), "=main:2");
        assert_eq!(w.to_string(), "<Window main:2>");
        assert_eq!(w.session().name(), "main");
        assert_eq!(w, window(&r, 2));
        assert_ne!(w, window(&r, 0));
    }

    #[test]
    fn info_and_name() {
        let r = ScriptedRunner::new().on("list-windows", WINDOWS);
        let w = window(&r, 2);
        let info = w.info().expect("info");
        assert_eq!(info.panes, 3);
        assert_eq!(w.name().expect("name"), "build");
        assert!(matches!(
            window(&r, 7).info(),
            Err(TmuxError::WindowNotFound { .. })
        ));
    }

    #[test]
    fn window_commands_target_the_window() {
        let r = ScriptedRunner::new()
            .on("kill-window", "")
            .on("select-window", "")
            .on("rename-window", "")
            .on("select-layout", "")
            .on("respawn-window", "")
            .on("rotate-window", "");
        let w = window(&r, 1);
        w.kill().expect("kill");
        w.select().expect("select");
        w.rename("logs").expect("rename");
        w.select_layout("tiled").expect("layout");
        w.respawn(true).expect("respawn");
        w.respawn(false).expect("respawn");
        w.rotate().expect("rotate");
        assert_eq!(
            r.calls(),
            [
                vec!["kill-window", "-t", "=main:1"],
                vec!["select-window", "-t", "=main:1"],
                vec!["rename-window", "-t", "=main:1", "logs"],
                vec!["select-layout", "-t", "=main:1", "tiled"],
                vec!["respawn-window", "-k", "-t", "=main:1"],
                vec!["respawn-window", "-t", "=main:1"],
                vec!["rotate-window", "-t", "=main:1"],
            ]
        );
    }

    #[test]
    fn untargeted_helpers_still_target_the_window() {
        let r = ScriptedRunner::new()
            .on("next-layout", "")
            .on("previous-layout", "")
            .on("unlink-window", "")
            .on("display-panes", "")
            .on("last-pane", "");
        let w = window(&r, 4);
        w.next_layout().expect("next");
        w.previous_layout().expect("prev");
        w.unlink().expect("unlink");
        w.display_panes().expect("display");
        w.last_pane().expect("last");
        let commands: Vec<_> = r.calls().into_iter().map(|c| c.join(" ")).collect();
        assert_eq!(
            commands,
            [
                "next-layout -t =main:4",
                "previous-layout -t =main:4",
                "unlink-window -t =main:4",
                "display-panes -t =main:4",
                "last-pane -t =main:4",
            ]
        );
    }

    #[test]
    fn find_passes_pattern() {
        let r = ScriptedRunner::new().on("find-window", "");
        assert_eq!(window(&r, 0).find("vim").expect("find"), None);
        assert_eq!(r.calls()[0], ["find-window", "-t", "=main:0", "vim"]);
    }

    #[test]
    fn failed_command_surfaces() {
        let r = ScriptedRunner::new().fail("kill-window", "can't find window: 9");
        let err = window(&r, 9).kill().unwrap_err();
        assert!(matches!(err, TmuxError::CommandFailed { ref command, .. } if command == "kill-window"));
    }

    #[test]
    fn window_options_use_window_commands() {
        let r = ScriptedRunner::new()
            .on("show-window-options", "mode-keys vi\n")
            .on_args(
                &["show-window-options", "-g"],
                "mode-keys emacs\naggressive-resize off\n",
            )
            .on("set-window-option", "");
        let w = window(&r, 0);
        assert_eq!(w.get("mode_keys").expect("get"), OptionValue::from("vi"));
        assert_eq!(
            w.get("aggressive_resize").expect("get"),
            OptionValue::Bool(false)
        );
        w.set("aggressive_resize", true).expect("set");
        w.set_scoped("mode-keys", OptionValue::from("vi"), OptionScope::Global)
            .expect("set");
        let calls = r.calls();
        assert_eq!(
            calls[calls.len() - 2],
            ["set-window-option", "-t", "=main:0", "aggressive-resize", "on"]
        );
        assert_eq!(
            calls[calls.len() - 1],
            ["set-window-option", "-g", "-t", "=main:0", "mode-keys", "vi"]
        );
    }
}
