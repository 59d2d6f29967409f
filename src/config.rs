//! Configuration loading
//!
//! Configuration is optional TOML. Lookup order:
//!
//! 1. an explicit `--config PATH`
//! 2. `.shtags.toml` in the current directory
//! 3. `<config dir>/shtags/config.toml` (e.g. `~/.config/shtags/config.toml`)
//! 4. built-in defaults
//!
//! ```toml
//! extensions = ["ebuild", "eclass"]
//! default_suppressions = true
//!
//! [[suppress]]
//! file = "ltmain.sh"
//! name = "func_help"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::detectors::suppress::{SuppressionRule, SuppressionRules};
use crate::error::{Result, ShtagsError};
use crate::lang::Lang;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".shtags.toml";

/// On-disk configuration layout
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    extensions: Vec<String>,
    default_suppressions: bool,
    suppress: Vec<SuppressionRule>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            default_suppressions: true,
            suppress: Vec::new(),
        }
    }
}

/// Resolved scan configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Extra extensions routed to the shell scanner
    pub extensions: Vec<String>,
    /// Suppression rules, built-in rule first when enabled
    pub rules: SuppressionRules,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            rules: SuppressionRules::default(),
            source: None,
        }
    }
}

impl Config {
    /// Load configuration using the standard lookup order
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let user_dir = dirs::config_dir().map(|d| d.join("shtags"));
        Self::load_from(explicit, &cwd, user_dir.as_deref())
    }

    /// Lookup with the working and user config directories given explicitly
    pub fn load_from(explicit: Option<&Path>, cwd: &Path, user_dir: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ShtagsError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            return Self::from_file(path);
        }

        let candidates = [
            Some(cwd.join(LOCAL_CONFIG_FILE)),
            user_dir.map(|d| d.join("config.toml")),
        ];

        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ShtagsError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_toml_str(&text, path)?;
        config.source = Some(path.to_path_buf());
        debug!(path = %path.display(), rules = config.rules.len(), "loaded configuration");
        Ok(config)
    }

    /// Parse TOML text; `origin` only names the source in errors
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text).map_err(|e| ShtagsError::Config {
            path: origin.display().to_string(),
            message: e.message().to_string(),
        })?;

        let mut rules = if file.default_suppressions {
            SuppressionRules::default()
        } else {
            SuppressionRules::empty()
        };
        for rule in file.suppress {
            rules.push(rule);
        }

        let extensions = file
            .extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();

        Ok(Self {
            extensions,
            rules,
            source: None,
        })
    }

    /// Language for `path` from its extension alone, honoring configured extensions
    pub fn lang_for_path(&self, path: &Path) -> Option<Lang> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        if self.extensions.iter().any(|e| e == ext) {
            return Some(Lang::Sh);
        }
        Lang::from_extension(ext).ok()
    }

    /// Language for `path`, falling back to the `#!` line of `content`
    pub fn route(&self, path: &Path, content: &[u8]) -> Result<Lang> {
        match self.lang_for_path(path) {
            Some(lang) => Ok(lang),
            None => Lang::detect(path, content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(text: &str) -> Result<Config> {
        Config::from_toml_str(text, Path::new("test.toml"))
    }

    #[test]
    fn test_empty_config_matches_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.rules.vetoes("configure", "main"));
    }

    #[test]
    fn test_extra_rules_follow_default() {
        let config = parse(
            r#"
[[suppress]]
file = "ltmain.sh"
name = "func_help"
"#,
        )
        .unwrap();
        let rules: Vec<_> = config.rules.iter().cloned().collect();
        assert_eq!(
            rules,
            vec![
                SuppressionRule::new("configure", "main"),
                SuppressionRule::new("ltmain.sh", "func_help"),
            ]
        );
    }

    #[test]
    fn test_default_suppressions_can_be_disabled() {
        let config = parse("default_suppressions = false").unwrap();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_extensions_route_to_shell() {
        let config = parse(r#"extensions = [".ebuild", "eclass"]"#).unwrap();
        assert_eq!(config.extensions, ["ebuild", "eclass"]);
        assert_eq!(config.lang_for_path(Path::new("x.ebuild")), Some(Lang::Sh));
        assert_eq!(config.lang_for_path(Path::new("x.bash")), Some(Lang::Sh));
        assert_eq!(config.lang_for_path(Path::new("x.py")), None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = parse("colour = true").unwrap_err();
        assert!(matches!(err, ShtagsError::Config { .. }));
    }

    #[test]
    fn test_malformed_rule_is_rejected() {
        let err = parse("[[suppress]]\nfile = \"configure\"\n").unwrap_err();
        assert!(matches!(err, ShtagsError::Config { .. }));
    }

    #[test]
    fn test_lookup_prefers_local_file() {
        let cwd = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(cwd.path().join(LOCAL_CONFIG_FILE), "extensions = [\"local\"]").unwrap();
        fs::write(user.path().join("config.toml"), "extensions = [\"user\"]").unwrap();

        let config = Config::load_from(None, cwd.path(), Some(user.path())).unwrap();
        assert_eq!(config.extensions, ["local"]);
        assert_eq!(config.source, Some(cwd.path().join(LOCAL_CONFIG_FILE)));
    }

    #[test]
    fn test_lookup_falls_back_to_user_dir() {
        let cwd = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(user.path().join("config.toml"), "extensions = [\"user\"]").unwrap();

        let config = Config::load_from(None, cwd.path(), Some(user.path())).unwrap();
        assert_eq!(config.extensions, ["user"]);
    }

    #[test]
    fn test_lookup_without_files_uses_defaults() {
        let cwd = TempDir::new().unwrap();
        let config = Config::load_from(None, cwd.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let cwd = TempDir::new().unwrap();
        let missing = cwd.path().join("nope.toml");
        let err = Config::load_from(Some(&missing), cwd.path(), None).unwrap_err();
        assert!(matches!(err, ShtagsError::FileNotFound { .. }));
    }
}
