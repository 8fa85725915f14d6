//! Resource bundle generator command
//!
//! Generates a complete Filament resource bundle for a model: form and
//! infolist schemas, table, resource class, and its pages.
//!
//! # Example
//!
//! ```bash
//! panel-forge make-resource Invoice --resource-name billing/invoice --view
//! ```

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use panel_forge::{
    BaseGenerator, ForgeConfig, LocalProject, MakeResourceRequest, ResourceBundle,
    ResourceScaffolder, ScaffoldError, TemplateRegistry,
};
use std::path::Path;
use tracing::{debug, info};

/// Arguments of `make-resource`
#[derive(Debug, Args)]
pub struct MakeResourceCommand {
    /// Model class (e.g., `Invoice`, `Billing/Invoice`, `App\Models\Invoice`)
    pub model: String,

    /// Resource name, when it differs from the model (e.g., `billing/invoice`)
    #[arg(long, value_name = "NAME")]
    pub resource_name: Option<String>,

    /// Generate a single "manage" page instead of separate pages
    #[arg(long)]
    pub simple: bool,

    /// Generate a view page and infolist
    #[arg(long)]
    pub view: bool,

    /// The model uses soft deletes
    #[arg(long)]
    pub soft_deletes: bool,

    /// Parent resource class to nest under (e.g., `Customers/CustomerResource`)
    #[arg(long, value_name = "RESOURCE")]
    pub parent: Option<String>,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,

    /// Render form and infolist schemas inside the resource class
    #[arg(long)]
    pub embed_schemas: bool,

    /// Render the table inside the resource class
    #[arg(long)]
    pub embed_table: bool,

    /// Print what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl MakeResourceCommand {
    /// Build the library request from the parsed arguments
    #[must_use]
    pub fn request(&self) -> MakeResourceRequest {
        let mut request = MakeResourceRequest::new(self.model.trim())
            .with_simple(self.simple)
            .with_view(self.view)
            .with_soft_deletes(self.soft_deletes)
            .with_force(self.force);
        if let Some(name) = &self.resource_name {
            request = request.with_resource_name(name);
        }
        if let Some(parent) = &self.parent {
            request = request.with_parent(parent);
        }
        request
    }

    /// Execute the command against the project at `project_root`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, a template
    /// override is invalid, or generation fails.
    pub fn execute(&self, project_root: &Path) -> Result<()> {
        let mut config = ForgeConfig::load(project_root).with_context(|| {
            format!("Failed to load configuration from {}", project_root.display())
        })?;
        config.generation.embed_schemas |= self.embed_schemas;
        config.generation.embed_table |= self.embed_table;
        debug!(
            project_root = %project_root.display(),
            resources = %config.resources.namespace,
            embed_schemas = config.generation.embed_schemas,
            embed_table = config.generation.embed_table,
            "Loaded configuration"
        );

        let project = LocalProject::new(project_root, config.resources.clone());
        let templates = match config.stubs_directory(project_root) {
            Some(dir) => {
                debug!(stubs = %dir.display(), "Loading template overrides");
                TemplateRegistry::with_overrides(&dir).with_context(|| {
                    format!("Failed to load template overrides from {}", dir.display())
                })?
            }
            None => TemplateRegistry::new().context("Failed to load built-in templates")?,
        };
        let scaffolder = ResourceScaffolder::with_templates(&project, &config, templates);
        let request = self.request();

        if self.dry_run {
            let bundle = scaffolder
                .plan(&request)
                .context("Failed to plan resource")?;
            debug!(files = bundle.artifacts.len(), "Planned resource bundle");
            print_plan(&bundle, &project);
            return Ok(());
        }

        println!(
            "\n{} {} {}",
            style("Scaffolding resource for").cyan().bold(),
            style(&request.model).green().bold(),
            style("...").cyan().bold()
        );

        let bundle = match scaffolder.run(&request) {
            Ok(bundle) => bundle,
            Err(ScaffoldError::Collision { path }) => {
                println!(
                    "\n{} {} already exists. Use {} to overwrite it.",
                    style("✗").red().bold(),
                    style(path.display()).yellow(),
                    style("--force").yellow()
                );
                anyhow::bail!("Resource generation aborted: {} already exists", path.display());
            }
            Err(e) => return Err(e).context("Failed to generate resource"),
        };
        info!(
            resource = %bundle.spec.location.fully_qualified_name,
            files = bundle.artifacts.len(),
            "Generated resource bundle"
        );

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            bundle.artifacts.len()
        );
        for artifact in &bundle.artifacts {
            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(artifact.target_path.display()).dim(),
                style(artifact.kind).dim()
            );
        }

        println!(
            "\n{} {} is ready!",
            style("✨").green().bold(),
            style(&bundle.spec.location.fully_qualified_name).green().bold()
        );

        Ok(())
    }
}

fn print_plan<B: BaseGenerator + ?Sized>(bundle: &ResourceBundle, base: &B) {
    println!("\n{}", style("Dry run, nothing will be written").cyan().bold());
    println!(
        "  {} {}",
        style("Resource:").bold(),
        bundle.spec.location.fully_qualified_name
    );
    println!("  {} {}", style("Model:").bold(), bundle.spec.model.fully_qualified_name);
    println!("  {} {}", style("Directory:").bold(), bundle.spec.directory());
    if let Some(parent) = &bundle.spec.parent_resource_full_name {
        println!("  {} {}", style("Parent:").bold(), parent);
    }

    println!("\n{}", style("Routes:").cyan().bold());
    for (key, route) in bundle.routes.iter() {
        println!(
            "  {:<8} {:<20} {}",
            key,
            route.path,
            style(&route.page_class).dim()
        );
    }

    println!("\n{}", style("Files:").cyan().bold());
    for artifact in &bundle.artifacts {
        let marker = if base.exists(&artifact.target_path) {
            style("exists").yellow()
        } else {
            style("new").green()
        };
        println!("  [{marker}] {}", artifact.target_path.display());
    }
}
