//! Target parsing and display helpers for CLI output.

/// A CLI target: `SESSION` or `SESSION:INDEX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Session(String),
    Window(String, u32),
}

impl Target {
    /// Split on the last `:` only when what follows is a window index, so
    /// session names containing `:` still work.
    pub fn parse(raw: &str) -> Self {
        match raw.rsplit_once(':') {
            Some((session, idx)) if !session.is_empty() => match idx.parse::<u32>() {
                Ok(index) => Target::Window(session.to_string(), index),
                Err(_) => Target::Session(raw.to_string()),
            },
            _ => Target::Session(raw.to_string()),
        }
    }
}

/// Compact age: `just now`, `5m`, `3h`, `2d`, `6w`.
pub fn relative_time(seconds: i64) -> String {
    let s = seconds.unsigned_abs();
    if s < 60 {
        "just now".to_string()
    } else if s < 3600 {
        format!("{}m", s / 60)
    } else if s < 86400 {
        format!("{}h", s / 3600)
    } else if s < 86400 * 30 {
        format!("{}d", s / 86400)
    } else {
        format!("{}w", s / (86400 * 7))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_session_target() {
        assert_eq!(Target::parse("main"), Target::Session("main".into()));
    }

    #[test]
    fn parse_window_target() {
        assert_eq!(Target::parse("main:2"), Target::Window("main".into(), 2));
    }

    #[test]
    fn colon_without_index_stays_session() {
        assert_eq!(Target::parse("a:b"), Target::Session("a:b".into()));
        assert_eq!(Target::parse("main:"), Target::Session("main:".into()));
        assert_eq!(Target::parse(":3"), Target::Session(":3".into()));
    }

    #[test]
    fn parse_session_name_with_colon() {
        assert_eq!(Target::parse("a:b:1"), Target::Window("a:b".into(), 1));
    }

    #[test]
    fn relative_time_buckets() {
        assert_eq!(relative_time(30), "just now");
        assert_eq!(relative_time(180), "3m");
        assert_eq!(relative_time(7200), "2h");
        assert_eq!(relative_time(86400 * 3), "3d");
        assert_eq!(relative_time(86400 * 42), "6w");
    }
}
