//! Builder configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ids::{IdSource, IdStrategy};

/// Environment variable overriding [`BuilderConfig::default_prompt`].
pub const ENV_DEFAULT_PROMPT: &str = "QUIZFORM_DEFAULT_PROMPT";
/// Environment variable overriding [`BuilderConfig::ids`].
pub const ENV_IDS: &str = "QUIZFORM_IDS";

/// Settings for turning lines into a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Prompt given to a choice question whose options appear with no
    /// question line before them.
    #[serde(default = "default_prompt")]
    pub default_prompt: String,
    /// Number of underscores every answer blank is normalized to.
    #[serde(default = "default_blank_width")]
    pub blank_width: usize,
    /// How question ids are generated.
    #[serde(default)]
    pub ids: IdStrategy,
    /// Prefix for sequential ids.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_prompt() -> String {
    "Select an option:".to_string()
}
fn default_blank_width() -> usize {
    10
}
fn default_id_prefix() -> String {
    "q".to_string()
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_prompt: default_prompt(),
            blank_width: default_blank_width(),
            ids: IdStrategy::default(),
            id_prefix: default_id_prefix(),
        }
    }
}

/// Narrowest blank that still reads as a blank.
pub const MIN_BLANK_WIDTH: usize = 2;

impl BuilderConfig {
    /// Blank width actually used when building, never below [`MIN_BLANK_WIDTH`].
    pub fn effective_blank_width(&self) -> usize {
        self.blank_width.max(MIN_BLANK_WIDTH)
    }

    /// Trimmed default prompt, or the built-in one when the configured prompt is blank.
    pub fn effective_default_prompt(&self) -> String {
        match self.default_prompt.trim() {
            "" => default_prompt(),
            prompt => prompt.to_string(),
        }
    }

    /// Create the id source for one template.
    pub fn id_source(&self) -> Box<dyn IdSource> {
        self.ids.source(&self.id_prefix)
    }

    /// Reject settings that would break template invariants.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.default_prompt.trim().is_empty(),
            "default_prompt must not be empty"
        );
        anyhow::ensure!(
            self.blank_width >= MIN_BLANK_WIDTH,
            "blank_width must be at least {MIN_BLANK_WIDTH}, got {}",
            self.blank_width
        );
        Ok(())
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prompt) = lookup(ENV_DEFAULT_PROMPT) {
            self.default_prompt = prompt;
        }
        if let Some(ids) = lookup(ENV_IDS) {
            self.ids = ids
                .parse()
                .map_err(|e: String| anyhow::anyhow!("{ENV_IDS}: {e}"))?;
        }
        Ok(())
    }
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<BuilderConfig> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizform.toml` in the current directory
/// 2. `~/.config/quizform/config.toml`
///
/// Environment variable overrides: `QUIZFORM_DEFAULT_PROMPT`, `QUIZFORM_IDS`.
pub fn load_config() -> Result<BuilderConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<BuilderConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizform.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content, &path)?
        }
        None => BuilderConfig::default(),
    };

    config.apply_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizform"))
}
