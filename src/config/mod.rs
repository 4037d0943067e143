//! Configuration parsing and management

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::types::{Error, Result};

/// Configuration for mkdtoc
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to config file to extend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Relative heading levels listed in the TOC (absent or empty: all)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_levels: Option<Vec<usize>>,
}

/// Supplies the heading levels eligible for the TOC
pub trait ConfigProvider {
    /// Relative levels to list; an empty slice means every level
    fn toc_levels(&self) -> &[usize];
}

impl ConfigProvider for Config {
    fn toc_levels(&self) -> &[usize] {
        self.toc_level_filter().unwrap_or(&[])
    }
}

impl ConfigProvider for [usize] {
    fn toc_levels(&self) -> &[usize] {
        self
    }
}

impl ConfigProvider for Vec<usize> {
    fn toc_levels(&self) -> &[usize] {
        self
    }
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration listing only the given levels in the TOC
    pub fn with_toc_levels(levels: impl IntoIterator<Item = usize>) -> Self {
        Self {
            toc_levels: Some(levels.into_iter().collect()),
            ..Default::default()
        }
    }

    /// The configured TOC levels, or `None` when every level is listed
    pub fn toc_level_filter(&self) -> Option<&[usize]> {
        self.toc_levels.as_deref().filter(|levels| !levels.is_empty())
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str());

        let config: Self = match ext {
            Some("json") => Self::from_json_file(path)?,
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            Some("toml") => Self::from_toml_file(path)?,
            _ => {
                // Try JSON first, then YAML, then TOML
                Self::from_json_file(path)
                    .or_else(|_| Self::from_yaml_file(path))
                    .or_else(|_| Self::from_toml_file(path))?
            }
        };
        config.validate()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Config file names to search for during auto-discovery
    const DISCOVERY_NAMES: [&str; 4] =
        [".mkdtoc.json", ".mkdtoc.yaml", ".mkdtoc.yml", ".mkdtoc.toml"];

    /// Walk up from `start_dir` looking for a config file
    pub fn discover(start_dir: impl AsRef<Path>) -> Option<Self> {
        let mut dir = start_dir.as_ref().to_path_buf();
        loop {
            for name in &Self::DISCOVERY_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    match Self::from_file(&candidate) {
                        Ok(config) => return Some(config),
                        Err(e) => log::warn!("ignoring {}: {}", candidate.display(), e),
                    }
                }
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Resolve the `extends` chain: load the parent config and merge self on top.
    ///
    /// A chain that returns to a file it already loaded is rejected.
    pub fn resolve_extends(&self) -> Result<Self> {
        self.resolve_extends_from(&mut HashSet::new())
    }

    fn resolve_extends_from(&self, visited: &mut HashSet<PathBuf>) -> Result<Self> {
        let Some(ref extends_path) = self.extends else {
            return Ok(self.clone());
        };
        let key = std::fs::canonicalize(extends_path).unwrap_or_else(|_| extends_path.into());
        if !visited.insert(key) {
            return Err(Error::InvalidConfig(format!(
                "circular extends chain through {}",
                extends_path
            )));
        }

        let parent = Config::from_file(extends_path)?;
        let mut resolved = parent.resolve_extends_from(visited)?;
        resolved.merge(self.clone());
        resolved.extends = None;
        Ok(resolved)
    }

    /// Merge another configuration into this one
    pub fn merge(&mut self, other: Config) {
        if other.toc_levels.is_some() {
            self.toc_levels = other.toc_levels;
        }
    }

    /// Reject levels that can never match a heading
    pub fn validate(&self) -> Result<()> {
        if let Some(levels) = &self.toc_levels
            && levels.contains(&0)
        {
            return Err(Error::InvalidConfig(
                "toc_levels are relative levels and start at 1".to_string(),
            ));
        }
        Ok(())
    }
}
