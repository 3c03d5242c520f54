use crate::infrastructure::opener::OpenerCommand;
use std::path::{Path, PathBuf};

pub const BOOKMARKS_FILE_ENV: &str = "BIT_BOOKMARKS_FILE";
pub const OPENER_ENV: &str = "BIT_OPENER";
pub const EMIT_EVENTS_ENV: &str = "BIT_EMIT_EVENTS";

pub const DEFAULT_BOOKMARKS_FILE: &str = "~/.bookmarks.json";

/// Everything an invocation needs to know about its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bookmarks_path: PathBuf,
    pub opener: OpenerCommand,
    pub emit_events: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bookmarks_path = lookup(BOOKMARKS_FILE_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BOOKMARKS_FILE.to_string());

        let opener = lookup(OPENER_ENV)
            .and_then(|raw| OpenerCommand::parse(&raw))
            .unwrap_or_else(OpenerCommand::platform_default);

        let emit_events = lookup(EMIT_EVENTS_ENV)
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            bookmarks_path: expand_path(&bookmarks_path),
            opener,
            emit_events,
        }
    }

    pub fn with_bookmarks_path(path: impl AsRef<Path>) -> Self {
        Self {
            bookmarks_path: path.as_ref().to_path_buf(),
            opener: OpenerCommand::platform_default(),
            emit_events: false,
        }
    }
}

// Expands `~` and `$VARS`; falls back to the raw text if a variable is unset.
fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            log::warn!("could not expand bookmarks path {raw:?}: {e}");
            PathBuf::from(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_home_bookmarks_file_and_platform_opener() {
        let cfg = Config::from_lookup(lookup_from(&[]));

        assert!(cfg.bookmarks_path.ends_with(".bookmarks.json"));
        assert_eq!(
            cfg.bookmarks_path,
            PathBuf::from(shellexpand::tilde(DEFAULT_BOOKMARKS_FILE).as_ref())
        );
        assert_eq!(cfg.opener, OpenerCommand::platform_default());
        assert!(!cfg.emit_events);
    }

    #[test]
    fn env_overrides_path_opener_and_events() {
        let cfg = Config::from_lookup(lookup_from(&[
            (BOOKMARKS_FILE_ENV, "./test.json"),
            (OPENER_ENV, "firefox --new-tab"),
            (EMIT_EVENTS_ENV, "TRUE"),
        ]));

        assert_eq!(cfg.bookmarks_path, PathBuf::from("./test.json"));
        assert_eq!(cfg.opener.program, "firefox");
        assert_eq!(cfg.opener.args, vec!["--new-tab".to_string()]);
        assert!(cfg.emit_events);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = Config::from_lookup(lookup_from(&[
            (BOOKMARKS_FILE_ENV, "  "),
            (OPENER_ENV, ""),
            (EMIT_EVENTS_ENV, "0"),
        ]));

        assert!(cfg.bookmarks_path.ends_with(".bookmarks.json"));
        assert_eq!(cfg.opener, OpenerCommand::platform_default());
        assert!(!cfg.emit_events);
    }
}
