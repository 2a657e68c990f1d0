//! `.lit/config` parsing — `spec.md` §4.14 (ambient: not named as its own
//! component in the distilled spec, but every operation that gates extra
//! diagnostics on `debug` needs it).
//!
//! Flat `key=value` lines; `#` and blank lines are skipped; only `debug` is
//! recognised, everything else is ignored rather than rejected, so a config
//! file from a newer `lit` still loads. Missing file means defaults.

use std::fs;
use std::path::Path;

/// Parsed `.lit/config`. Only one key exists today; more keys should be
/// added here as plain fields, not a map, to keep `Config` the single
/// source of truth for what `lit` recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub debug: bool,
}

impl Config {
    /// Read `<root>/.lit/config`. Returns the default configuration
    /// (`debug: false`) if the file does not exist — this is not an error,
    /// matching the original `read_config`.
    pub fn read(root: &Path) -> Self {
        let path = root.join(".lit").join("config");
        let Ok(text) = fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Self {
        let mut config = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                "debug" => config.debug = value.trim() == "true",
                _ => {}
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::read(dir.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_debug_true() {
        let config = Config::parse("debug=true\n");
        assert!(config.debug);
    }

    #[test]
    fn parses_debug_false() {
        let config = Config::parse("debug=false\n");
        assert!(!config.debug);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let config = Config::parse("# a comment\n\ndebug=true\n");
        assert!(config.debug);
    }

    #[test]
    fn ignores_unknown_keys() {
        let config = Config::parse("origin=upstream\ndebug=true\n");
        assert!(config.debug);
    }

    #[test]
    fn read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".lit")).unwrap();
        fs::write(dir.path().join(".lit/config"), "debug=true\n").unwrap();

        let config = Config::read(dir.path());
        assert!(config.debug);
    }
}
