//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use inventory_core::catalog::Catalog;
use tracing::debug;

use crate::config::{is_json, CliConfig};
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["inventory.toml", ".inventory.toml", "inventory.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        debug!(config = ?config_path, "context loaded");
        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.exists() {
                    return Some(candidate);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Get the catalog file path.
    pub fn catalog_path(&self) -> PathBuf {
        resolve(&self.base_dir(), &self.config.catalog.path)
    }

    /// Get the purchase order directory.
    pub fn purchase_orders_dir(&self) -> PathBuf {
        resolve(&self.base_dir(), &self.config.purchase_orders.dir)
    }

    /// Load and validate the catalog.
    pub async fn load_catalog(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        let content = tokio::fs::read_to_string(&path).await.with_context(|| {
            format!(
                "Failed to read catalog: {} (set [catalog] path in inventory.toml)",
                path.display()
            )
        })?;

        let catalog: Catalog = if is_json(&path) {
            Catalog::from_json_str(&content)?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))?
        };
        catalog
            .validate()
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;

        self.output.debug(&format!("Loaded catalog: {}", path.display()));
        Ok(catalog)
    }

    /// Write the catalog back in the format it was read in.
    pub async fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        let path = self.catalog_path();
        let content = if is_json(&path) {
            catalog.to_json_string()?
        } else {
            toml::to_string_pretty(catalog)?
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;

        self.output.debug(&format!("Saved catalog: {}", path.display()));
        Ok(())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
