//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use salon_data::SourceSpec;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names looked up from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["salon.toml", ".salon.toml", "salon.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Catalog location given with `--source`.
    pub source_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, source: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
            source_override: source,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Catalog location: `--source` first, then `[catalog]`.
    pub fn source_spec(&self) -> Result<SourceSpec> {
        let location = self
            .source_override
            .as_deref()
            .or_else(|| self.config.catalog.location())
            .context("No catalog source. Pass --source or set [catalog] url/path in salon.toml")?;

        Ok(match SourceSpec::parse(location) {
            SourceSpec::Path(path) => SourceSpec::Path(self.resolve_path(&path)),
            url => url,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(source: Option<&str>, config: CliConfig) -> Context {
        Context {
            config,
            output: Output::new(false, true),
            cwd: PathBuf::from("/srv/salon"),
            source_override: source.map(str::to_string),
        }
    }

    #[test]
    fn test_override_wins() {
        let mut config = CliConfig::default();
        config.catalog.url = Some("https://docs.example/catalog.csv".to_string());

        let ctx = context(Some("local.csv"), config);
        assert_eq!(
            ctx.source_spec().unwrap(),
            SourceSpec::Path(PathBuf::from("/srv/salon/local.csv"))
        );
    }

    #[test]
    fn test_config_url() {
        let mut config = CliConfig::default();
        config.catalog.url = Some("https://docs.example/catalog.csv".to_string());

        let ctx = context(None, config);
        assert_eq!(
            ctx.source_spec().unwrap(),
            SourceSpec::Url("https://docs.example/catalog.csv".to_string())
        );
    }

    #[test]
    fn test_missing_source() {
        let ctx = context(None, CliConfig::default());
        assert!(ctx.source_spec().is_err());
    }
}
