//! panel-forge
//!
//! Deterministic scaffolding for Filament admin-panel resource bundles.
//!
//! Given a model name (and optionally a `resource-name` override), the
//! scaffolder derives every class name, namespace, directory and page route
//! a resource bundle needs, then writes one source file per artifact:
//!
//! ```text
//! Resources/{Plural}/{Singular}Resource.php
//! Resources/{Plural}/Schemas/{Singular}Form.php
//! Resources/{Plural}/Schemas/{Singular}Infolist.php
//! Resources/{Plural}/Tables/{Plural}Table.php
//! Resources/{Plural}/Pages/*.php
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use panel_forge::{ForgeConfig, LocalProject, MakeResourceRequest, ResourceScaffolder};
//! use std::path::Path;
//!
//! # fn example() -> panel_forge::ScaffoldResult<()> {
//! let root = Path::new(".");
//! let config = ForgeConfig::load(root)?;
//! let project = LocalProject::new(root, config.resources.clone());
//! let scaffolder = ResourceScaffolder::new(&project, &config)?;
//!
//! let request = MakeResourceRequest::new("Invoice")
//!     .with_resource_name("billing/invoice")
//!     .with_view(true);
//! let bundle = scaffolder.run(&request)?;
//! assert_eq!(bundle.artifacts.len(), 8);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod artifact;
pub mod base;
pub mod config;
pub mod error;
pub mod generators;
pub mod location;
pub mod naming;
pub mod routes;
pub mod scaffold;
pub mod spec;
pub mod templates;

pub use artifact::{ArtifactKind, GeneratedArtifact, ProducedNames};
pub use base::{BaseGenerator, LocalProject};
pub use config::{
    ForgeConfig, GenerationSettings, ModelSettings, ResourceRoots, CONFIG_FILE_NAME,
};
pub use error::{ScaffoldError, ScaffoldResult};
pub use location::ResourceLocation;
pub use routes::{PageRoute, RouteKey, RouteShape, RouteTable};
pub use scaffold::{ResourceBundle, ResourceScaffolder};
pub use spec::{MakeResourceRequest, ModelReference, ResourceSpec};
pub use templates::TemplateRegistry;
