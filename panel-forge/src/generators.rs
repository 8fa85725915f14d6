//! Per-artifact generators
//!
//! Each artifact kind gets a template context built from the resource spec,
//! its route table and the names produced earlier in the same run. The
//! context is rendered through the [`TemplateRegistry`].

use crate::artifact::{ArtifactKind, ProducedNames};
use crate::error::ScaffoldResult;
use crate::naming::{self, NAMESPACE_SEPARATOR};
use crate::routes::RouteTable;
use crate::spec::ResourceSpec;
use crate::templates::TemplateRegistry;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};

const SCHEMA: &str = "Filament\\Schemas\\Schema";
const TABLE: &str = "Filament\\Tables\\Table";
const RESOURCE: &str = "Filament\\Resources\\Resource";
const HEROICON: &str = "Filament\\Support\\Icons\\Heroicon";
const BACKED_ENUM: &str = "BackedEnum";
const ELOQUENT_BUILDER: &str = "Illuminate\\Database\\Eloquent\\Builder";
const SOFT_DELETING_SCOPE: &str = "Illuminate\\Database\\Eloquent\\SoftDeletingScope";
const TRASHED_FILTER: &str = "Filament\\Tables\\Filters\\TrashedFilter";

const BULK_ACTION_GROUP: &str = "Filament\\Actions\\BulkActionGroup";
const CREATE_ACTION: &str = "Filament\\Actions\\CreateAction";
const VIEW_ACTION: &str = "Filament\\Actions\\ViewAction";
const EDIT_ACTION: &str = "Filament\\Actions\\EditAction";
const DELETE_ACTION: &str = "Filament\\Actions\\DeleteAction";
const FORCE_DELETE_ACTION: &str = "Filament\\Actions\\ForceDeleteAction";
const RESTORE_ACTION: &str = "Filament\\Actions\\RestoreAction";
const DELETE_BULK_ACTION: &str = "Filament\\Actions\\DeleteBulkAction";
const FORCE_DELETE_BULK_ACTION: &str = "Filament\\Actions\\ForceDeleteBulkAction";
const RESTORE_BULK_ACTION: &str = "Filament\\Actions\\RestoreBulkAction";

/// `use` statements of one generated file
///
/// Every short name refers to one class. A class whose basename is already
/// taken is imported under an alias, e.g. `use App\Models\Table as TableModel;`.
#[derive(Debug, Default)]
struct Imports {
    /// Short name in scope -> fully-qualified class
    names: BTreeMap<String, String>,
    /// `use` statement bodies
    statements: BTreeSet<String>,
}

impl Imports {
    /// Imports of a file declaring `class_name`, which keeps that short name
    fn declaring(class_name: &str, fully_qualified_name: &str) -> Self {
        let mut imports = Self::default();
        imports
            .names
            .insert(class_name.to_string(), fully_qualified_name.to_string());
        imports
    }

    /// Import `fully_qualified_name` and return the name to refer to it by
    fn add(&mut self, fully_qualified_name: &str) -> String {
        if let Some((name, _)) = self
            .names
            .iter()
            .find(|(_, class)| class.as_str() == fully_qualified_name)
        {
            return name.clone();
        }

        let basename = naming::class_basename(fully_qualified_name);
        let name = if self.names.contains_key(basename) {
            self.alias_for(fully_qualified_name, basename)
        } else {
            basename.to_string()
        };

        self.statements.insert(if name == basename {
            fully_qualified_name.to_string()
        } else {
            format!("{fully_qualified_name} as {name}")
        });
        self.names
            .insert(name.clone(), fully_qualified_name.to_string());
        name
    }

    /// Free alias for `basename`, suffixed with its singular parent namespace
    fn alias_for(&self, fully_qualified_name: &str, basename: &str) -> String {
        let parent = fully_qualified_name
            .rsplit_once(NAMESPACE_SEPARATOR)
            .map_or("", |(namespace, _)| naming::class_basename(namespace));
        let alias = format!("{basename}{}", naming::singularize(parent));

        let mut candidate = alias.clone();
        let mut n = 1;
        while candidate == basename || self.names.contains_key(&candidate) {
            n += 1;
            candidate = format!("{alias}{n}");
        }
        candidate
    }

    fn add_all(&mut self, fully_qualified_names: &[&str]) -> Vec<String> {
        fully_qualified_names
            .iter()
            .map(|name| self.add(name))
            .collect()
    }

    fn into_sorted(self) -> Vec<String> {
        self.statements.into_iter().collect()
    }
}

/// Filters and actions of a resource table
#[derive(Debug, Serialize)]
struct TableDefinition {
    filters: Vec<String>,
    record_actions: Vec<String>,
    bulk_actions: Vec<String>,
}

impl TableDefinition {
    fn for_spec(spec: &ResourceSpec, imports: &mut Imports) -> Self {
        imports.add(BULK_ACTION_GROUP);

        let mut filters = Vec::new();
        let mut record_actions = Vec::new();
        let mut bulk = vec![DELETE_BULK_ACTION];

        if spec.has_view_operation {
            record_actions.push(VIEW_ACTION);
        }
        record_actions.push(EDIT_ACTION);
        if spec.is_simple {
            // Simple resources have no edit page to delete from.
            record_actions.push(DELETE_ACTION);
        }

        if spec.is_soft_deletable {
            filters.push(TRASHED_FILTER);
            if spec.is_simple {
                record_actions.extend([FORCE_DELETE_ACTION, RESTORE_ACTION]);
            }
            bulk.extend([FORCE_DELETE_BULK_ACTION, RESTORE_BULK_ACTION]);
        }

        Self {
            filters: imports.add_all(&filters),
            record_actions: imports.add_all(&record_actions),
            bulk_actions: imports.add_all(&bulk),
        }
    }
}

/// Render the source text of `kind`
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_artifact(
    templates: &TemplateRegistry,
    kind: ArtifactKind,
    spec: &ResourceSpec,
    routes: &RouteTable,
    produced: &ProducedNames,
) -> ScaffoldResult<String> {
    templates.render(kind, &artifact_context(kind, spec, routes, produced))
}

/// Template context for `kind`
#[must_use]
pub fn artifact_context(
    kind: ArtifactKind,
    spec: &ResourceSpec,
    routes: &RouteTable,
    produced: &ProducedNames,
) -> Value {
    match kind {
        ArtifactKind::Form | ArtifactKind::Infolist => schema_context(kind, spec),
        ArtifactKind::Table => table_context(spec),
        ArtifactKind::Resource => resource_context(spec, routes, produced),
        ArtifactKind::ManagePage
        | ArtifactKind::ListPage
        | ArtifactKind::CreatePage
        | ArtifactKind::ViewPage
        | ArtifactKind::EditPage => page_context(kind, spec, produced),
    }
}

fn imports_for(kind: ArtifactKind, spec: &ResourceSpec) -> Imports {
    Imports::declaring(&kind.class_name(spec), &kind.fully_qualified_name(spec))
}

fn schema_context(kind: ArtifactKind, spec: &ResourceSpec) -> Value {
    let mut imports = imports_for(kind, spec);
    imports.add(SCHEMA);

    json!({
        "namespace": kind.namespace(spec),
        "class_name": kind.class_name(spec),
        "imports": imports.into_sorted(),
    })
}

fn table_context(spec: &ResourceSpec) -> Value {
    let mut imports = imports_for(ArtifactKind::Table, spec);
    imports.add(TABLE);
    let table = TableDefinition::for_spec(spec, &mut imports);

    json!({
        "namespace": ArtifactKind::Table.namespace(spec),
        "class_name": ArtifactKind::Table.class_name(spec),
        "imports": imports.into_sorted(),
        "table": table,
    })
}

fn resource_context(spec: &ResourceSpec, routes: &RouteTable, produced: &ProducedNames) -> Value {
    // Names the template spells out literally are claimed before any
    // project class, so a clashing model is the one that gets aliased.
    let mut imports = imports_for(ArtifactKind::Resource, spec);
    for name in [RESOURCE, SCHEMA, TABLE, HEROICON, BACKED_ENUM] {
        imports.add(name);
    }
    if spec.is_soft_deletable {
        imports.add(ELOQUENT_BUILDER);
        imports.add(SOFT_DELETING_SCOPE);
    }
    let table = produced
        .get(ArtifactKind::Table)
        .is_none()
        .then(|| TableDefinition::for_spec(spec, &mut imports));

    let model_class = imports.add(&spec.model.fully_qualified_name);
    let parent_class = spec
        .parent_resource_full_name
        .as_deref()
        .map(|parent| imports.add(parent));

    let form_class = produced
        .get(ArtifactKind::Form)
        .map(|name| imports.add(name));
    let infolist_class = produced
        .get(ArtifactKind::Infolist)
        .map(|name| imports.add(name));
    let table_class = produced
        .get(ArtifactKind::Table)
        .map(|name| imports.add(name));

    let pages_namespace = spec.location.child_namespace("Pages");
    let routes: Vec<Value> = routes
        .iter()
        .map(|(key, route)| {
            let page_class = imports.add(&format!("{pages_namespace}\\{}", route.page_class));
            json!({
                "key": key,
                "page_class": page_class,
                "path": route.path,
            })
        })
        .collect();

    json!({
        "namespace": spec.namespace(),
        "class_name": spec.resource_class(),
        "model_class": model_class,
        "navigation_label": naming::to_title(spec.plural_name()),
        "parent_class": parent_class,
        "form_class": form_class,
        "has_infolist": spec.has_view_operation,
        "infolist_class": infolist_class,
        "table_class": table_class,
        "table": table,
        "routes": routes,
        "soft_deletes": spec.is_soft_deletable,
        "imports": imports.into_sorted(),
    })
}

fn page_context(kind: ArtifactKind, spec: &ResourceSpec, produced: &ProducedNames) -> Value {
    let mut imports = imports_for(kind, spec);
    let resource_class = imports.add(&ArtifactKind::Resource.fully_qualified_name(spec));

    let (base_class, mut actions): (&str, Vec<&str>) = match kind {
        ArtifactKind::ManagePage => ("ManageRecords", vec![CREATE_ACTION]),
        ArtifactKind::ListPage => ("ListRecords", vec![CREATE_ACTION]),
        ArtifactKind::CreatePage => ("CreateRecord", Vec::new()),
        ArtifactKind::ViewPage => ("ViewRecord", vec![EDIT_ACTION]),
        _ => ("EditRecord", Vec::new()),
    };

    if kind == ArtifactKind::EditPage {
        if produced.contains(ArtifactKind::ViewPage) {
            actions.push(VIEW_ACTION);
        }
        actions.push(DELETE_ACTION);
        if spec.is_soft_deletable {
            actions.extend([FORCE_DELETE_ACTION, RESTORE_ACTION]);
        }
    }

    let base_class = imports.add(&format!("Filament\\Resources\\Pages\\{base_class}"));
    let header_actions = imports.add_all(&actions);

    json!({
        "namespace": kind.namespace(spec),
        "class_name": kind.class_name(spec),
        "base_class": base_class,
        "resource_class": resource_class,
        "header_actions": header_actions,
        "imports": imports.into_sorted(),
    })
}
