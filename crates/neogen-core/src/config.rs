//! Project configuration for neogen.
//!
//! Generators never depend on the process working directory: every path is
//! derived from an explicit project root plus this configuration. Settings
//! are read from `neogen.toml` at the project root when present.
//!
//! # Examples
//!
//! ```toml
//! source_dir = "src/main/java"
//! base_package = "net.ericaro.neoitertools"
//! source_suffix = "java"
//! wiki_dir = "../neoitertools-wiki"
//! wiki_suffix = "wiki"
//! ```
//!
//! ```
//! use neogen_core::{GeneratorKind, ProjectConfig};
//! use std::path::{Path, PathBuf};
//!
//! let config = ProjectConfig::default();
//! let dir = config.output_dir(Path::new("/work/neoitertools"), GeneratorKind::Iterator).unwrap();
//! assert_eq!(
//!     dir,
//!     PathBuf::from("/work/neoitertools/src/main/java/net/ericaro/neoitertools/primitives"),
//! );
//! ```

use crate::{Error, GeneratorKind, PackageName, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the configuration file looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "neogen.toml";

/// Layout of the Java project the generators write into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Java source root, relative to the project root
    pub source_dir: PathBuf,

    /// Package the generated sub-packages live under
    pub base_package: String,

    /// Extension of source files scanned by wiki discovery (without dot)
    pub source_suffix: String,

    /// Wiki checkout receiving the stub pages, relative to the project root
    pub wiki_dir: PathBuf,

    /// Extension of generated wiki stubs (without dot)
    pub wiki_suffix: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src/main/java"),
            base_package: "net.ericaro.neoitertools".to_string(),
            source_suffix: "java".to_string(),
            wiki_dir: PathBuf::from("../neoitertools-wiki"),
            wiki_suffix: "wiki".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Loads `neogen.toml` from `project_root`, or returns defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// fails validation.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE_NAME);

        if !path.exists() {
            debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let config = Self::from_toml(&content)?;
        debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// Missing keys take their default value.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the text is not valid TOML or
    /// contains invalid values.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse {CONFIG_FILE_NAME}: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a suffix is empty or contains a dot or path
    /// separator, or if the base package is invalid.
    pub fn validate(&self) -> Result<()> {
        validate_suffix("source_suffix", &self.source_suffix)?;
        validate_suffix("wiki_suffix", &self.wiki_suffix)?;
        self.package()?;
        Ok(())
    }

    /// Returns the validated base package.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `base_package` is not a valid package.
    pub fn package(&self) -> Result<PackageName> {
        PackageName::new(&self.base_package)
    }

    /// Returns the Java source root below `project_root`.
    #[must_use]
    pub fn source_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.source_dir)
    }

    /// Returns the directory the files of `kind` are written to.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the base package is invalid.
    pub fn output_dir(&self, project_root: &Path, kind: GeneratorKind) -> Result<PathBuf> {
        let package = self.package()?.child(kind.sub_package())?;
        Ok(self.source_root(project_root).join(package.to_relative_path()))
    }

    /// Returns the directory wiki stubs are written to.
    #[must_use]
    pub fn wiki_target_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.wiki_dir)
    }
}

fn validate_suffix(field: &str, suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(Error::ConfigError {
            message: format!("{field} cannot be empty"),
        });
    }
    if suffix.contains(['.', '/', '\\']) {
        return Err(Error::ConfigError {
            message: format!("{field} must be a bare extension without '.' or separators: '{suffix}'"),
        });
    }
    Ok(())
}
