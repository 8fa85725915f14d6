//! Configuration management for panel-forge
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `PANEL_FORGE_` prefix, nested
//!    keys separated by `__`)
//! 2. `<project-root>/panel-forge.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # panel-forge.toml
//! [resources]
//! namespace = "App\\Filament\\Admin\\Resources"
//! directory = "app/Filament/Admin/Resources"
//!
//! [models]
//! namespace = "App\\Models"
//!
//! [generation]
//! embed_schemas = false
//! embed_table = true
//! stubs_directory = "stubs/panel-forge"
//! ```

use crate::error::{ScaffoldError, ScaffoldResult};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "panel-forge.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "PANEL_FORGE_";

/// Root namespace and directory under which resource bundles live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRoots {
    /// Root namespace, e.g. `App\Filament\Resources`
    pub namespace: String,

    /// Root directory relative to the project root, paired with `namespace`
    pub directory: String,
}

impl Default for ResourceRoots {
    fn default() -> Self {
        Self {
            namespace: "App\\Filament\\Resources".to_string(),
            directory: "app/Filament/Resources".to_string(),
        }
    }
}

/// Where model classes live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Namespace bare model names are qualified against
    pub namespace: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            namespace: "App\\Models".to_string(),
        }
    }
}

/// Flags controlling which artifacts become separate files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Render form and infolist schemas inline in the resource class
    pub embed_schemas: bool,

    /// Render the table inline in the resource class
    pub embed_table: bool,

    /// Directory holding `<kind>.php.hbs` template overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stubs_directory: Option<PathBuf>,
}

/// Complete panel-forge configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Resource roots
    #[serde(default)]
    pub resources: ResourceRoots,

    /// Model settings
    #[serde(default)]
    pub models: ModelSettings,

    /// Generation flags
    #[serde(default)]
    pub generation: GenerationSettings,
}

impl ForgeConfig {
    /// Layered configuration sources for a project
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(project_root.join(CONFIG_FILE_NAME)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration for the project rooted at `project_root`
    ///
    /// A missing `panel-forge.toml` is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if a source holds values of the
    /// wrong shape.
    pub fn load(project_root: &Path) -> ScaffoldResult<Self> {
        Self::figment(project_root)
            .extract()
            .map_err(|e| ScaffoldError::Config(Box::new(e)))
    }

    /// Resolve the template override directory against the project root
    #[must_use]
    pub fn stubs_directory(&self, project_root: &Path) -> Option<PathBuf> {
        self.generation
            .stubs_directory
            .as_ref()
            .map(|dir| project_root.join(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = ForgeConfig::default();
        assert_eq!(config.resources.namespace, "App\\Filament\\Resources");
        assert_eq!(config.resources.directory, "app/Filament/Resources");
        assert_eq!(config.models.namespace, "App\\Models");
        assert!(!config.generation.embed_schemas);
        assert!(!config.generation.embed_table);
        assert!(config.generation.stubs_directory.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|jail| {
            let config = ForgeConfig::load(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(config, ForgeConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE_NAME,
                r#"
                [resources]
                namespace = "App\\Filament\\Admin\\Resources"
                directory = "app/Filament/Admin/Resources"

                [generation]
                embed_table = true
                "#,
            )?;

            let config = ForgeConfig::load(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(config.resources.namespace, "App\\Filament\\Admin\\Resources");
            assert_eq!(config.resources.directory, "app/Filament/Admin/Resources");
            assert!(config.generation.embed_table);
            assert!(!config.generation.embed_schemas);
            assert_eq!(config.models.namespace, "App\\Models");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE_NAME,
                r"
                [generation]
                embed_schemas = false
                ",
            )?;
            jail.set_env("PANEL_FORGE_GENERATION__EMBED_SCHEMAS", "true");
            jail.set_env("PANEL_FORGE_MODELS__NAMESPACE", "Domain\\Models");

            let config = ForgeConfig::load(jail.directory()).map_err(|e| e.to_string())?;
            assert!(config.generation.embed_schemas);
            assert_eq!(config.models.namespace, "Domain\\Models");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE_NAME,
                r#"
                [generation]
                embed_table = "sometimes"
                "#,
            )?;

            let result = ForgeConfig::load(jail.directory());
            assert!(matches!(result, Err(ScaffoldError::Config(_))));
            Ok(())
        });
    }

    #[test]
    fn test_stubs_directory_is_relative_to_root() {
        let config = ForgeConfig {
            generation: GenerationSettings {
                stubs_directory: Some(PathBuf::from("stubs")),
                ..GenerationSettings::default()
            },
            ..ForgeConfig::default()
        };
        assert_eq!(
            config.stubs_directory(Path::new("/srv/app")),
            Some(PathBuf::from("/srv/app/stubs"))
        );
    }
}
