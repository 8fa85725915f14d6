//! Template registry for artifact generation

use crate::artifact::ArtifactKind;
use crate::error::{ScaffoldError, ScaffoldResult};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

pub mod files;
pub use files::*;

/// File extension of template overrides, e.g. `resource.php.hbs`
pub const OVERRIDE_EXTENSION: &str = "php.hbs";

const TABLE_BODY: &str = "table_body";

/// Handlebars templates for every artifact kind
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Registry with the built-in templates
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to parse.
    pub fn new() -> ScaffoldResult<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut registry = Self { handlebars };
        registry.register_partial(TABLE_BODY, TABLE_BODY_PARTIAL)?;
        for kind in ArtifactKind::PIPELINE {
            registry.register(kind.template_name(), builtin_template(kind))?;
        }

        Ok(registry)
    }

    /// Registry with built-ins replaced by `<name>.php.hbs` files found in `dir`
    ///
    /// Kinds without an override file keep their built-in template.
    ///
    /// # Errors
    ///
    /// Returns an error if an override file cannot be read or parsed.
    pub fn with_overrides(dir: &Path) -> ScaffoldResult<Self> {
        let mut registry = Self::new()?;

        for kind in ArtifactKind::PIPELINE {
            let name = kind.template_name();
            let path = dir.join(format!("{name}.{OVERRIDE_EXTENSION}"));
            if !path.is_file() {
                continue;
            }

            let source =
                std::fs::read_to_string(&path).map_err(|e| ScaffoldError::io(&path, e))?;
            registry.register(name, &source)?;
            debug!(template = name, path = %path.display(), "Using template override");
        }

        Ok(registry)
    }

    /// Whether a template named `name` is registered
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render the template for `kind`
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render<T: Serialize>(&self, kind: ArtifactKind, data: &T) -> ScaffoldResult<String> {
        let name = kind.template_name();
        self.handlebars
            .render(name, data)
            .map_err(|source| ScaffoldError::Render {
                name: name.to_string(),
                source,
            })
    }

    fn register(&mut self, name: &str, source: &str) -> ScaffoldResult<()> {
        self.handlebars
            .register_template_string(name, source)
            .map_err(|e| ScaffoldError::TemplateRegistration {
                name: name.to_string(),
                source: Box::new(e),
            })
    }

    fn register_partial(&mut self, name: &str, source: &str) -> ScaffoldResult<()> {
        self.handlebars
            .register_partial(name, source)
            .map_err(|e| ScaffoldError::TemplateRegistration {
                name: name.to_string(),
                source: Box::new(e),
            })
    }
}

/// Built-in template source for `kind`
#[must_use]
pub const fn builtin_template(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Form => FORM_TEMPLATE,
        ArtifactKind::Infolist => INFOLIST_TEMPLATE,
        ArtifactKind::Table => TABLE_TEMPLATE,
        ArtifactKind::Resource => RESOURCE_TEMPLATE,
        ArtifactKind::ManagePage
        | ArtifactKind::ListPage
        | ArtifactKind::CreatePage
        | ArtifactKind::ViewPage
        | ArtifactKind::EditPage => PAGE_TEMPLATE,
    }
}
