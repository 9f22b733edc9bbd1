//! Configuration management

use crate::domain::WrapperTag;
use crate::error::{Result, TagStripError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".tagstrip.toml";

/// Environment variable overriding the configured tag.
pub const TAG_ENV: &str = "TAGSTRIP_TAG";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_tag() -> String {
    crate::domain::wrapper_tag::DEFAULT_TAG.to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["tsx".to_string(), "jsx".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag: default_tag(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Load `.tagstrip.toml` from the given directory, falling back to defaults
    /// when the file does not exist.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(TagStripError::Read {
                    path: config_path,
                    source: e,
                })
            }
        };

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(TagStripError::Config(format!(
                "{}: extensions must list at least one file extension",
                CONFIG_FILE
            )));
        }

        if let Some(bad) = self
            .extensions
            .iter()
            .find(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(TagStripError::Config(format!(
                "{}: invalid extension {:?}",
                CONFIG_FILE, bad
            )));
        }

        Ok(())
    }

    /// Apply the environment override, then the command-line override.
    pub fn with_overrides(mut self, env_tag: Option<String>, cli_tag: Option<String>) -> Self {
        if let Some(tag) = cli_tag.or(env_tag).filter(|t| !t.trim().is_empty()) {
            self.tag = tag;
        }
        self
    }

    /// Read the tag override from the process environment.
    pub fn env_tag() -> Option<String> {
        std::env::var(TAG_ENV).ok()
    }

    pub fn wrapper_tag(&self) -> Result<WrapperTag> {
        WrapperTag::from_str(&self.tag)
    }

    /// Whether a file found while walking a directory should be processed.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }
}
