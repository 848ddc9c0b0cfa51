//! Option values and option-name translation.
//!
//! tmux speaks plain text: `on`/`off` switches, `none`, numbers and free
//! strings. `OptionValue` gives those a typed shape and converts back
//! losslessly when setting.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::TmuxError;

/// Parsed `show-options` output, keyed by tmux option name.
pub type OptionMap = BTreeMap<String, OptionValue>;

/// Which option table to read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionScope {
    /// Options set on the object itself.
    #[default]
    Local,
    /// Server-wide defaults (`-g`).
    Global,
}

impl OptionScope {
    pub fn is_global(self) -> bool {
        self == OptionScope::Global
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    None,
    Int(i64),
    Str(String),
}

impl OptionValue {
    /// Classify a raw tmux value.
    pub fn from_tmux(raw: &str) -> Self {
        let val = unquote(raw);
        let val: &str = &val;
        match val {
            "on" => OptionValue::Bool(true),
            "off" => OptionValue::Bool(false),
            "none" => OptionValue::None,
            _ if !val.is_empty() && val.bytes().all(|b| b.is_ascii_digit()) => val
                .parse()
                .map(OptionValue::Int)
                .unwrap_or_else(|_| OptionValue::Str(val.to_string())),
            _ => OptionValue::Str(val.to_string()),
        }
    }

    /// Render as the text tmux expects on `set-option`.
    pub fn to_tmux(&self) -> String {
        self.to_string()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(true) => f.write_str("on"),
            OptionValue::Bool(false) => f.write_str("off"),
            OptionValue::None => f.write_str("none"),
            OptionValue::Int(n) => write!(f, "{n}"),
            OptionValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Int(n)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(OptionValue::None, Into::into)
    }
}

/// Identifier-style name to tmux name: `status_bg` → `status-bg`.
///
/// Names starting with `_` never refer to tmux options.
pub fn option_name(ident: &str) -> Result<String, TmuxError> {
    if ident.is_empty() || ident.starts_with('_') {
        return Err(TmuxError::InvalidOptionName(ident.to_string()));
    }
    Ok(ident.replace('_', "-"))
}

/// tmux name to identifier style: `list-windows` → `list_windows`.
pub fn ident_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Parse `show-options` / `show-window-options` output.
///
/// Each line is `NAME VALUE`, where the value runs to end of line and may
/// contain spaces.
pub fn parse_show_options(output: &str) -> OptionMap {
    let mut map = OptionMap::new();
    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (name, value) = line.split_once(' ').unwrap_or((line, ""));
        map.insert(name.to_string(), OptionValue::from_tmux(value.trim()));
    }
    map
}

/// Undo `show-options` quoting: `''` for an empty value, and double quotes
/// around values with spaces, where `"`, `\\` and `$` are backslash-escaped.
fn unquote(raw: &str) -> Cow<'_, str> {
    if let Some(inner) = raw
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
    {
        return Cow::Borrowed(inner);
    }
    let Some(inner) = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) else {
        return Cow::Borrowed(raw);
    };
    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_switches_and_none() {
        assert_eq!(OptionValue::from_tmux("on"), OptionValue::Bool(true));
        assert_eq!(OptionValue::from_tmux("off"), OptionValue::Bool(false));
        assert_eq!(OptionValue::from_tmux("none"), OptionValue::None);
        assert_eq!(OptionValue::from_tmux("on").as_bool(), Some(true));
        assert_eq!(OptionValue::None.as_bool(), None);
    }

    #[test]
    fn classify_numbers() {
        assert_eq!(OptionValue::from_tmux("2000"), OptionValue::Int(2000));
        assert_eq!(OptionValue::from_tmux("0"), OptionValue::Int(0));
        assert_eq!(OptionValue::from_tmux("50").as_int(), Some(50));
        // only plain digits count, like tmux's own numeric options
        assert_eq!(OptionValue::from_tmux("-1"), OptionValue::Str("-1".into()));
        assert_eq!(OptionValue::from_tmux("1.5"), OptionValue::Str("1.5".into()));
        assert_eq!(
            OptionValue::from_tmux("99999999999999999999"),
            OptionValue::Str("99999999999999999999".into())
        );
    }

    #[test]
    fn classify_strings() {
        assert_eq!(OptionValue::from_tmux("emacs"), OptionValue::Str("emacs".into()));
        assert_eq!(OptionValue::from_tmux("emacs").as_str(), Some("emacs"));
        assert_eq!(OptionValue::from_tmux(""), OptionValue::Str(String::new()));
        assert_eq!(
            OptionValue::from_tmux("\"[#S] \""),
            OptionValue::Str("[#S] ".into())
        );
        // a quoted keyword is still the keyword
        assert_eq!(OptionValue::from_tmux("\"on\""), OptionValue::Bool(true));
    }

    #[test]
    fn render_for_tmux() {
        assert_eq!(OptionValue::Bool(true).to_tmux(), "on");
        assert_eq!(OptionValue::Bool(false).to_tmux(), "off");
        assert_eq!(OptionValue::None.to_tmux(), "none");
        assert_eq!(OptionValue::Int(42).to_tmux(), "42");
        assert_eq!(OptionValue::from("vi").to_tmux(), "vi");
        assert_eq!(OptionValue::from(None::<bool>).to_tmux(), "none");
    }

    #[test]
    fn serializes_as_plain_json() {
        let map: OptionMap = [
            ("mouse".to_string(), OptionValue::Bool(true)),
            ("base-index".to_string(), OptionValue::Int(1)),
            ("status-keys".to_string(), OptionValue::from("vi")),
            ("default-command".to_string(), OptionValue::None),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&map).expect("serialize");
        assert_eq!(
            json,
            r#"{"base-index":1,"default-command":null,"mouse":true,"status-keys":"vi"}"#
        );
    }

    #[test]
    fn name_translation() {
        assert_eq!(option_name("status_bg").expect("valid"), "status-bg");
        assert_eq!(option_name("status-bg").expect("valid"), "status-bg");
        assert_eq!(option_name("mouse").expect("valid"), "mouse");
        assert!(option_name("_private").is_err());
        assert!(option_name("").is_err());
        assert_eq!(ident_name("list-windows"), "list_windows");
    }

    #[test]
    fn parse_options_output() {
        let output = "base-index 1\nstatus on\nstatus-left \"[#S] \"\nstatus-keys emacs\n\ndefault-command none\n";
        let map = parse_show_options(output);
        assert_eq!(map.len(), 5);
        assert_eq!(map["base-index"], OptionValue::Int(1));
        assert_eq!(map["status"], OptionValue::Bool(true));
        assert_eq!(map["status-left"], OptionValue::Str("[#S] ".into()));
        assert_eq!(map["status-keys"], OptionValue::Str("emacs".into()));
        assert_eq!(map["default-command"], OptionValue::None);
    }

    #[test]
    fn parse_value_with_spaces_and_bare_name() {
        let map = parse_show_options("status-right %H:%M %d-%b-%y\nupdate-environment");
        assert_eq!(
            map["status-right"],
            OptionValue::Str("%H:%M %d-%b-%y".into())
        );
        assert_eq!(map["update-environment"], OptionValue::Str(String::new()));
    }

    #[test]
    fn parse_quoted_and_escaped_values() {
        let output = "status-left ''\nstatus-right \"x \\\"q\\\" \\$HOME\"\nword-separators \"a\\\\b\"\n";
        let map = parse_show_options(output);
        assert_eq!(map["status-left"], OptionValue::Str(String::new()));
        assert_eq!(map["status-right"], OptionValue::Str("x \"q\" $HOME".into()));
        assert_eq!(map["word-separators"], OptionValue::Str("a\\b".into()));
    }

    #[test]
    fn unquoted_value_survives_set() {
        let shown = parse_show_options("status-right \"x \\\"q\\\" \\$HOME\"\n");
        assert_eq!(shown["status-right"].to_tmux(), "x \"q\" $HOME");
    }

    #[test]
    fn parse_empty_output() {
        assert!(parse_show_options("").is_empty());
        assert!(parse_show_options("\n\n").is_empty());
    }
}
