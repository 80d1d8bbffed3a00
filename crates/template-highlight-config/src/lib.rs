//! User configuration for the template-highlight hosts.
//!
//! Read from `~/.config/template-highlight/config.toml`. Every field is
//! optional; a missing file or table falls back to the defaults.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use template_highlight_engine::{DelimiterKind, Highlighter, Palette};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period after the last edit before a highlight cycle runs.
    pub debounce_ms: u64,
    /// Extraction order; kinds left out are not highlighted.
    pub scan_order: Vec<DelimiterKind>,
    /// Template opened by the editor when no file is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            scan_order: DelimiterKind::ALL.to_vec(),
            template_path: None,
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Reads the config at `path`. A file that does not exist yields `None`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.template_path = config.template_path.map(expand_path);
        Ok(Some(config))
    }

    /// Reads the config from [`Config::config_path`].
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        expand_path(PathBuf::from("~/.config/template-highlight/config.toml"))
    }

    /// Highlighter using the configured scan order.
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::with_scan_order(self.scan_order.iter().copied())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Expands `~` and `$VARS` in `path`, leaving it unchanged if a variable is unset.
fn expand_path(path: PathBuf) -> PathBuf {
    let expanded = shellexpand::full(&path.to_string_lossy())
        .map(|e| PathBuf::from(e.as_ref()))
        .ok();
    expanded.unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use template_highlight_engine::HighlightColor;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn config_path_is_under_home_config() {
        let path = Config::config_path();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with(".config/template-highlight/config.toml"));
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.scan_order, DelimiterKind::ALL.to_vec());
        assert_eq!(config.palette, Palette::default());
        assert!(config.template_path.is_none());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from_path(dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        // a directory exists but cannot be read as a file
        let dir = TempDir::new().unwrap();
        let err = Config::load_from_path(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn full_file_loads_every_field() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
debounce_ms = 50
scan_order = ["round", "curly"]
template_path = "/tmp/template.txt"

[palette]
curly = "magenta"
"#,
        );

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(
            config,
            Config {
                debounce_ms: 50,
                scan_order: vec![DelimiterKind::Round, DelimiterKind::Curly],
                template_path: Some(PathBuf::from("/tmp/template.txt")),
                palette: Palette {
                    curly: HighlightColor::Magenta,
                    ..Palette::default()
                },
            }
        );
    }

    #[test]
    fn serialized_config_reads_back() {
        let config = Config {
            debounce_ms: 150,
            palette: Palette {
                round: HighlightColor::Yellow,
                ..Palette::default()
            },
            template_path: Some(PathBuf::from("/tmp/template.txt")),
            ..Config::default()
        };

        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn partial_palette_keeps_other_colors() {
        let config: Config = toml::from_str("[palette]\nsquare = \"cyan\"\n").unwrap();
        assert_eq!(config.palette.square, HighlightColor::Cyan);
        assert_eq!(config.palette.curly, HighlightColor::Green);
        assert_eq!(config.palette.round, HighlightColor::Red);
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn scan_order_builds_highlighter() {
        let config: Config = toml::from_str(r#"scan_order = ["square", "square", "curly"]"#).unwrap();
        assert_eq!(
            config.highlighter().scan_order(),
            &[DelimiterKind::Square, DelimiterKind::Curly]
        );
    }

    #[test]
    fn unknown_delimiter_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"scan_order = ["angle"]"#);

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn expand_path_handles_tilde_vars_and_plain_paths() {
        unsafe {
            env::set_var("TEMPLATE_HIGHLIGHT_EXPAND_VAR", "/from/env");
        }

        let home = expand_path(PathBuf::from("~/templates"));
        assert!(!home.to_string_lossy().starts_with('~'));
        assert!(home.ends_with("templates"));

        assert_eq!(
            expand_path(PathBuf::from("$TEMPLATE_HIGHLIGHT_EXPAND_VAR/offer.txt")),
            PathBuf::from("/from/env/offer.txt")
        );
        assert_eq!(
            expand_path(PathBuf::from("/absolute/offer.txt")),
            PathBuf::from("/absolute/offer.txt")
        );
        // unset variables leave the path as written
        assert_eq!(
            expand_path(PathBuf::from("$TEMPLATE_HIGHLIGHT_UNSET_VAR/x")),
            PathBuf::from("$TEMPLATE_HIGHLIGHT_UNSET_VAR/x")
        );

        unsafe {
            env::remove_var("TEMPLATE_HIGHLIGHT_EXPAND_VAR");
        }
    }

    #[test]
    fn template_path_is_expanded_on_load() {
        unsafe {
            env::set_var("TEMPLATE_HIGHLIGHT_ROOT", "/custom/templates");
        }

        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"template_path = "$TEMPLATE_HIGHLIGHT_ROOT/offer.txt""#);
        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(
            config.template_path,
            Some(PathBuf::from("/custom/templates/offer.txt"))
        );

        unsafe {
            env::remove_var("TEMPLATE_HIGHLIGHT_ROOT");
        }
    }
}
