//! Base generation capabilities
//!
//! The scaffolder never touches the filesystem directly. Everything it needs
//! from the host project goes through [`BaseGenerator`]: the default location
//! of a bundle when no resource name is given, the collision check, and the
//! write itself.

use crate::config::ResourceRoots;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::location::ResourceLocation;
use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Capabilities the scaffolder borrows from the host project
///
/// Target paths are relative to the project root and `/`-separated.
#[cfg_attr(test, mockall::automock)]
pub trait BaseGenerator {
    /// Location of a bundle derived from the model type alone
    fn default_location(&self, model: &str, roots: &ResourceRoots) -> ResourceLocation;

    /// Whether something already exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Write `contents` to `path`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] if the directory or file cannot be written.
    fn write(&self, path: &Path, contents: &str) -> ScaffoldResult<()>;
}

/// A project on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalProject {
    root: PathBuf,
    roots: ResourceRoots,
}

impl LocalProject {
    /// Create a project rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, roots: ResourceRoots) -> Self {
        Self {
            root: root.into(),
            roots,
        }
    }

    /// Project root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resource roots this project was opened with
    #[must_use]
    pub const fn resource_roots(&self) -> &ResourceRoots {
        &self.roots
    }

    /// Absolute path for a project-relative target
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl BaseGenerator for LocalProject {
    /// The model's class basename, studly-cased, is taken as the base name
    /// without stripping or singularizing it.
    fn default_location(&self, model: &str, roots: &ResourceRoots) -> ResourceLocation {
        let base_name = naming::studly_case(naming::class_basename(model.trim()));
        ResourceLocation::derive(&base_name, roots)
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn write(&self, path: &Path, contents: &str) -> ScaffoldResult<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }

        fs::write(&full_path, contents).map_err(|e| ScaffoldError::io(&full_path, e))?;
        trace!(path = %full_path.display(), bytes = contents.len(), "Wrote file");

        Ok(())
    }
}
