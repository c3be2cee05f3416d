//! Shared project resolution for CLI commands.

use anyhow::{Context, Result};
use neogen_core::ProjectConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project root plus the configuration loaded from it.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root every configured path is relative to
    pub root: PathBuf,
    /// Configuration from `neogen.toml`, or defaults
    pub config: ProjectConfig,
}

impl ProjectContext {
    /// Resolves the project root and loads its configuration.
    ///
    /// `project` defaults to the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or
    /// the configuration file is unreadable or invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use neogen_cli::commands::common::ProjectContext;
    /// # use tempfile::TempDir;
    ///
    /// # let temp = TempDir::new().unwrap();
    /// let project = ProjectContext::load(Some(temp.path().to_path_buf())).unwrap();
    /// assert_eq!(project.config.wiki_suffix, "wiki");
    /// ```
    pub fn load(project: Option<PathBuf>) -> Result<Self> {
        let root = match project {
            Some(root) => root,
            None => std::env::current_dir().context("failed to determine current directory")?,
        };

        let config = ProjectConfig::load(&root)
            .with_context(|| format!("failed to load configuration from {}", root.display()))?;
        debug!("Project root: {}", root.display());

        Ok(Self { root, config })
    }

    /// Creates a context from an already loaded configuration.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Returns the project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Joins paths into display strings for summaries.
#[must_use]
pub(crate) fn display_paths(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use neogen_core::CONFIG_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();
        let project = ProjectContext::load(Some(temp.path().to_path_buf())).unwrap();

        assert_eq!(project.root(), temp.path());
        assert_eq!(project.config, ProjectConfig::default());
    }

    #[test]
    fn test_load_reads_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "base_package = \"org.example\"\n",
        )
        .unwrap();

        let project = ProjectContext::load(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(project.config.base_package, "org.example");
    }

    #[test]
    fn test_load_invalid_config_has_context() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "wiki_suffix = \"\"\n").unwrap();

        let err = ProjectContext::load(Some(temp.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("failed to load configuration"));
        assert!(err.downcast_ref::<neogen_core::Error>().is_some());
    }
}
