//! Artifact kinds of a resource bundle
//!
//! Each kind knows its class name, where it lives, and when it applies.

use crate::config::GenerationSettings;
use crate::naming::NAMESPACE_SEPARATOR;
use crate::routes::RouteKey;
use crate::spec::ResourceSpec;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Kind of generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactKind {
    /// Form schema class
    Form,
    /// Infolist schema class
    Infolist,
    /// Table class
    Table,
    /// The resource class itself
    Resource,
    /// Combined manage page of a simple resource
    ManagePage,
    /// List page
    ListPage,
    /// Create page
    CreatePage,
    /// View page
    ViewPage,
    /// Edit page
    EditPage,
}

impl ArtifactKind {
    /// Every kind, in pipeline order
    pub const PIPELINE: [Self; 9] = [
        Self::Form,
        Self::Infolist,
        Self::Table,
        Self::Resource,
        Self::ManagePage,
        Self::ListPage,
        Self::CreatePage,
        Self::ViewPage,
        Self::EditPage,
    ];

    /// Template registered for this kind
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Infolist => "infolist",
            Self::Table => "table",
            Self::Resource => "resource",
            Self::ManagePage => "manage-page",
            Self::ListPage => "list-page",
            Self::CreatePage => "create-page",
            Self::ViewPage => "view-page",
            Self::EditPage => "edit-page",
        }
    }

    /// Sub-folder of the bundle holding this kind
    #[must_use]
    pub const fn folder(self) -> Option<&'static str> {
        match self {
            Self::Form | Self::Infolist => Some("Schemas"),
            Self::Table => Some("Tables"),
            Self::Resource => None,
            Self::ManagePage
            | Self::ListPage
            | Self::CreatePage
            | Self::ViewPage
            | Self::EditPage => Some("Pages"),
        }
    }

    /// Route a page kind is registered under
    #[must_use]
    pub const fn route_key(self) -> Option<RouteKey> {
        match self {
            Self::ManagePage | Self::ListPage => Some(RouteKey::Index),
            Self::CreatePage => Some(RouteKey::Create),
            Self::ViewPage => Some(RouteKey::View),
            Self::EditPage => Some(RouteKey::Edit),
            Self::Form | Self::Infolist | Self::Table | Self::Resource => None,
        }
    }

    /// Whether this kind is generated for `spec` under `settings`
    #[must_use]
    pub fn is_applicable(self, spec: &ResourceSpec, settings: &GenerationSettings) -> bool {
        match self {
            Self::Form => !settings.embed_schemas,
            Self::Infolist => spec.has_view_operation && !settings.embed_schemas,
            Self::Table => !settings.embed_table,
            Self::Resource => true,
            Self::ManagePage => spec.is_simple,
            Self::ListPage => !spec.is_simple && !spec.has_parent(),
            Self::CreatePage | Self::EditPage => !spec.is_simple,
            Self::ViewPage => !spec.is_simple && spec.has_view_operation,
        }
    }

    /// Class name of this kind's artifact
    #[must_use]
    pub fn class_name(self, spec: &ResourceSpec) -> String {
        let singular = spec.base_name();
        let plural = spec.plural_name();
        match self {
            Self::Form => format!("{singular}Form"),
            Self::Infolist => format!("{singular}Infolist"),
            Self::Table => format!("{plural}Table"),
            Self::Resource => spec.resource_class().to_string(),
            Self::ManagePage => format!("Manage{plural}"),
            Self::ListPage => format!("List{plural}"),
            Self::CreatePage => format!("Create{singular}"),
            Self::ViewPage => format!("View{singular}"),
            Self::EditPage => format!("Edit{singular}"),
        }
    }

    /// Namespace of this kind's artifact
    #[must_use]
    pub fn namespace(self, spec: &ResourceSpec) -> String {
        self.folder().map_or_else(
            || spec.namespace().to_string(),
            |folder| spec.location.child_namespace(folder),
        )
    }

    /// Fully-qualified class name of this kind's artifact
    #[must_use]
    pub fn fully_qualified_name(self, spec: &ResourceSpec) -> String {
        format!(
            "{}{NAMESPACE_SEPARATOR}{}",
            self.namespace(spec),
            self.class_name(spec)
        )
    }

    /// Target file path relative to the project root
    #[must_use]
    pub fn target_path(self, spec: &ResourceSpec) -> PathBuf {
        let directory = self.folder().map_or_else(
            || spec.directory().to_string(),
            |folder| spec.location.child_directory(folder),
        );
        PathBuf::from(directory).join(format!("{}.php", self.class_name(spec)))
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

/// A file planned or written by the scaffolder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Target path relative to the project root
    pub target_path: PathBuf,
    /// What kind of artifact this is
    pub kind: ArtifactKind,
    /// Fully-qualified class the file declares
    pub fully_qualified_name: String,
}

impl GeneratedArtifact {
    /// Describe the artifact `kind` would produce for `spec`
    #[must_use]
    pub fn planned(kind: ArtifactKind, spec: &ResourceSpec) -> Self {
        Self {
            target_path: kind.target_path(spec),
            kind,
            fully_qualified_name: kind.fully_qualified_name(spec),
        }
    }
}

/// Fully-qualified names written so far in one run
///
/// Later artifacts consult this to decide what to reference, e.g. the edit
/// page only links to a view page that was actually produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProducedNames {
    names: BTreeMap<ArtifactKind, String>,
}

impl ProducedNames {
    /// Record a produced artifact
    pub fn record(&mut self, kind: ArtifactKind, fully_qualified_name: impl Into<String>) {
        self.names.insert(kind, fully_qualified_name.into());
    }

    /// Fully-qualified name produced for `kind`
    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> Option<&str> {
        self.names.get(&kind).map(String::as_str)
    }

    /// Whether `kind` was produced
    #[must_use]
    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.names.contains_key(&kind)
    }
}
