//! Behavior shared by sessions and windows: targeted commands and
//! name-based option access.

use crate::command::TmuxCommand;
use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;
use crate::options::{OptionMap, OptionScope, OptionValue, option_name, parse_show_options};

/// A tmux entity addressable with `-t`.
pub trait TmuxObject {
    type Runner: TmuxCommandRunner;

    fn runner(&self) -> &Self::Runner;

    /// Value passed to `-t` for commands aimed at this object.
    fn target(&self) -> String;

    /// Command that lists this object's options.
    fn show_options_command(&self) -> &'static str;

    /// Command that sets one of this object's options.
    fn set_option_command(&self) -> &'static str;

    /// Run `command` aimed at this object, returning trimmed stdout.
    fn cmd(&self, command: TmuxCommand) -> Result<Option<String>, TmuxError> {
        self.targeted(command).run(self.runner())
    }

    /// Run `command` aimed at this object, reporting only its exit status.
    fn succeeds(&self, command: TmuxCommand) -> Result<bool, TmuxError> {
        self.targeted(command).succeeds(self.runner())
    }

    #[doc(hidden)]
    fn targeted(&self, command: TmuxCommand) -> TmuxCommand {
        if command.has_target() {
            command
        } else {
            command.target(self.target())
        }
    }

    fn show_options(&self, scope: OptionScope) -> Result<OptionMap, TmuxError> {
        let command =
            TmuxCommand::new(self.show_options_command()).flag_if("global", scope.is_global());
        Ok(self
            .cmd(command)?
            .map(|out| parse_show_options(&out))
            .unwrap_or_default())
    }

    /// Look up an option by tmux or identifier-style name. The object's own
    /// value wins; otherwise the global default applies.
    fn get(&self, name: &str) -> Result<OptionValue, TmuxError> {
        let name = option_name(name)?;
        if let Some(v) = self.show_options(OptionScope::Local)?.remove(&name) {
            return Ok(v);
        }
        self.show_options(OptionScope::Global)?
            .remove(&name)
            .ok_or_else(|| TmuxError::OptionNotFound {
                target: self.target(),
                name,
            })
    }

    fn set(&self, name: &str, value: impl Into<OptionValue>) -> Result<(), TmuxError>
    where
        Self: Sized,
    {
        self.set_scoped(name, value.into(), OptionScope::Local)
    }

    fn set_scoped(
        &self,
        name: &str,
        value: OptionValue,
        scope: OptionScope,
    ) -> Result<(), TmuxError> {
        let name = option_name(name)?;
        tracing::debug!(object = %self.target(), option = %name, value = %value, "set option");
        let command = TmuxCommand::new(self.set_option_command())
            .flag_if("global", scope.is_global())
            .arg(name)
            .arg(value.to_tmux());
        self.cmd(command).map(drop)
    }

    /// Remove the object's own value so the global default shows through.
    fn unset(&self, name: &str) -> Result<(), TmuxError> {
        let name = option_name(name)?;
        let command = TmuxCommand::new(self.set_option_command())
            .flag("unset")
            .arg(name);
        self.cmd(command).map(drop)
    }
}
