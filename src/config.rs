//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/aggtree/aggtree.toml`
//! 3. Local config: `<scan_dir>/.aggtree.toml`
//! 4. Environment variables: `AGGTREE_*` prefix

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Rendering style for tree output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    /// Indented transcript, one line per node
    #[default]
    Plain,
    /// Box-drawing tree
    Fancy,
}

/// Application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default rendering style for the `tree` command
    pub render: RenderKind,
    /// Show measures as binary-prefixed sizes (KiB, MiB, ...)
    pub human_sizes: bool,
}

impl Settings {
    /// Load settings with layered precedence. `scan_dir` is the directory
    /// being scanned; its `.aggtree.toml` (if any) overrides the global
    /// config, and `AGGTREE_*` environment variables override both.
    pub fn load(scan_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("render", "plain")?
            .set_default("human_sizes", false)?;

        if let Some(dirs) = ProjectDirs::from("", "", "aggtree") {
            let global = dirs.config_dir().join("aggtree.toml");
            builder = builder.add_source(File::from(global).required(false));
        }

        if let Some(dir) = scan_dir {
            let local = dir.join(".aggtree.toml");
            builder = builder.add_source(File::from(local).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("AGGTREE").try_parsing(true));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_plain_and_exact() {
        let settings = Settings::default();
        assert_eq!(settings.render, RenderKind::Plain);
        assert!(!settings.human_sizes);
    }
}
