//! Resource scaffold orchestrator
//!
//! Runs the linear pipeline for one invocation:
//!
//! ```text
//! normalize → derive paths → build route table
//!   → form → infolist → table → resource
//!   → pages (manage | list + create + view + edit)
//! ```
//!
//! Any failure ends the run. Files written before a collision stay on disk.

use crate::artifact::{ArtifactKind, GeneratedArtifact, ProducedNames};
use crate::base::BaseGenerator;
use crate::config::ForgeConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::generators;
use crate::routes::RouteTable;
use crate::spec::{MakeResourceRequest, ResourceSpec};
use crate::templates::TemplateRegistry;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Everything derived (and, after [`ResourceScaffolder::run`], written) for one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    /// The derived resource spec
    pub spec: ResourceSpec,
    /// Page routes
    pub routes: RouteTable,
    /// Artifacts in pipeline order
    pub artifacts: Vec<GeneratedArtifact>,
}

/// Resource scaffold generator
pub struct ResourceScaffolder<'a, B: BaseGenerator + ?Sized> {
    base: &'a B,
    config: &'a ForgeConfig,
    templates: TemplateRegistry,
}

impl<'a, B: BaseGenerator + ?Sized> ResourceScaffolder<'a, B> {
    /// Create a scaffolder with the built-in templates
    ///
    /// # Errors
    ///
    /// Returns an error if the template registry cannot be built.
    pub fn new(base: &'a B, config: &'a ForgeConfig) -> ScaffoldResult<Self> {
        Ok(Self::with_templates(base, config, TemplateRegistry::new()?))
    }

    /// Create a scaffolder with a prepared template registry
    pub const fn with_templates(
        base: &'a B,
        config: &'a ForgeConfig,
        templates: TemplateRegistry,
    ) -> Self {
        Self {
            base,
            config,
            templates,
        }
    }

    /// Derive the bundle for `request` without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::BlankModel`] if the request names no model.
    pub fn plan(&self, request: &MakeResourceRequest) -> ScaffoldResult<ResourceBundle> {
        let spec = ResourceSpec::resolve(request, self.config, self.base)?;
        debug!(
            resource = %spec.location.fully_qualified_name,
            directory = %spec.directory(),
            "Derived resource location"
        );

        let routes = spec.route_table();
        debug!(
            routes = ?routes.keys().collect::<Vec<_>>(),
            "Built route table"
        );

        let artifacts = ArtifactKind::PIPELINE
            .into_iter()
            .filter(|kind| {
                let applicable = kind.is_applicable(&spec, &self.config.generation);
                if !applicable {
                    debug!(artifact = %kind, "Skipping artifact");
                }
                applicable
            })
            .map(|kind| GeneratedArtifact::planned(kind, &spec))
            .collect();

        Ok(ResourceBundle {
            spec,
            routes,
            artifacts,
        })
    }

    /// Generate and write every artifact of the bundle
    ///
    /// Each target is checked right before it is written. An existing file
    /// without `force` aborts the run; earlier writes are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Collision`] for an existing target without
    /// `force`, [`ScaffoldError::BlankModel`] for a request without a model,
    /// or the first render or write error.
    pub fn run(&self, request: &MakeResourceRequest) -> ScaffoldResult<ResourceBundle> {
        let plan = self.plan(request)?;
        let mut produced = ProducedNames::default();
        let mut attempted = HashSet::new();
        let mut written = Vec::with_capacity(plan.artifacts.len());

        for artifact in plan.artifacts {
            if !attempted.insert(artifact.target_path.clone()) {
                return Err(ScaffoldError::DuplicateTarget {
                    path: artifact.target_path,
                });
            }

            if self.base.exists(&artifact.target_path) {
                if !request.force {
                    warn!(
                        path = %artifact.target_path.display(),
                        written = written.len(),
                        "Target exists, aborting"
                    );
                    return Err(ScaffoldError::Collision {
                        path: artifact.target_path,
                    });
                }
                warn!(path = %artifact.target_path.display(), "Overwriting existing file");
            }

            let source = generators::render_artifact(
                &self.templates,
                artifact.kind,
                &plan.spec,
                &plan.routes,
                &produced,
            )?;
            self.base.write(&artifact.target_path, &source)?;
            info!(
                artifact = %artifact.kind,
                path = %artifact.target_path.display(),
                "Generated"
            );

            produced.record(artifact.kind, artifact.fully_qualified_name.clone());
            written.push(artifact);
        }

        Ok(ResourceBundle {
            spec: plan.spec,
            routes: plan.routes,
            artifacts: written,
        })
    }
}
