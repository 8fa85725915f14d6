//! End-to-end tests for resource scaffolding on a real filesystem

use panel_forge::{
    ForgeConfig, LocalProject, MakeResourceRequest, ResourceScaffolder, RouteKey, ScaffoldError,
    TemplateRegistry,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RESOURCES: &str = "app/Filament/Resources";

fn project(temp_dir: &TempDir, config: &ForgeConfig) -> LocalProject {
    LocalProject::new(temp_dir.path(), config.resources.clone())
}

/// All files under `dir`, relative to it, sorted
fn files_under(dir: &Path) -> Vec<PathBuf> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                out.push(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
    }

    let mut out = Vec::new();
    walk(dir, dir, &mut out);
    out.sort();
    out
}

fn read(temp_dir: &TempDir, relative: &str) -> String {
    fs::read_to_string(temp_dir.path().join(RESOURCES).join(relative)).unwrap()
}

#[test]
fn test_billing_invoice_bundle() {
    let temp_dir = TempDir::new().unwrap();
    let config = ForgeConfig::default();
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();

    let request = MakeResourceRequest::new("Invoice")
        .with_resource_name("billing/invoice")
        .with_view(true);
    let bundle = scaffolder.run(&request).unwrap();

    assert!(bundle
        .spec
        .location
        .fully_qualified_name
        .ends_with("\\Invoices\\InvoiceResource"));
    assert!(bundle.spec.namespace().ends_with("\\Invoices"));
    assert!(bundle.spec.directory().ends_with("/Invoices"));
    assert_eq!(
        bundle.routes.keys().collect::<Vec<_>>(),
        vec![RouteKey::Index, RouteKey::Create, RouteKey::View, RouteKey::Edit]
    );

    let expected: Vec<PathBuf> = [
        "Invoices/InvoiceResource.php",
        "Invoices/Pages/CreateInvoice.php",
        "Invoices/Pages/EditInvoice.php",
        "Invoices/Pages/ListInvoices.php",
        "Invoices/Pages/ViewInvoice.php",
        "Invoices/Schemas/InvoiceForm.php",
        "Invoices/Schemas/InvoiceInfolist.php",
        "Invoices/Tables/InvoicesTable.php",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(files_under(&temp_dir.path().join(RESOURCES)), expected);

    let resource = read(&temp_dir, "Invoices/InvoiceResource.php");
    assert!(resource.contains("namespace App\\Filament\\Resources\\Invoices;"));
    assert!(resource.contains("'view' => ViewInvoice::route('/{record}'),"));

    let edit = read(&temp_dir, "Invoices/Pages/EditInvoice.php");
    assert!(edit.contains("ViewAction::make(),"));
}

#[test]
fn test_second_run_collides_without_modifying_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = ForgeConfig::default();
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();
    let request = MakeResourceRequest::new("Owner").with_view(true);

    scaffolder.run(&request).unwrap();
    let root = temp_dir.path().join(RESOURCES);
    let snapshot: Vec<(PathBuf, String)> = files_under(&root)
        .into_iter()
        .map(|path| {
            let contents = fs::read_to_string(root.join(&path)).unwrap();
            (path, contents)
        })
        .collect();

    let err = scaffolder.run(&request).unwrap_err();
    assert!(err.is_collision());
    assert!(matches!(
        err,
        ScaffoldError::Collision { ref path } if path.ends_with("Owners/Schemas/OwnerForm.php")
    ));

    let after: Vec<(PathBuf, String)> = files_under(&root)
        .into_iter()
        .map(|path| {
            let contents = fs::read_to_string(root.join(&path)).unwrap();
            (path, contents)
        })
        .collect();
    assert_eq!(snapshot, after);
}

#[test]
fn test_force_overwrites_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = ForgeConfig::default();
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();

    let resource_path = temp_dir.path().join(RESOURCES).join("Owners/OwnerResource.php");
    fs::create_dir_all(resource_path.parent().unwrap()).unwrap();
    fs::write(&resource_path, "<?php // hand written\n").unwrap();

    let err = scaffolder.run(&MakeResourceRequest::new("Owner")).unwrap_err();
    assert!(err.is_collision());
    // No rollback: files written before the collision are kept.
    assert!(temp_dir
        .path()
        .join(RESOURCES)
        .join("Owners/Schemas/OwnerForm.php")
        .exists());

    let bundle = scaffolder
        .run(&MakeResourceRequest::new("Owner").with_force(true))
        .unwrap();
    assert_eq!(bundle.artifacts.len(), 6);
    assert!(fs::read_to_string(&resource_path)
        .unwrap()
        .contains("class OwnerResource extends Resource"));
}

#[test]
fn test_simple_resource_bundle() {
    let temp_dir = TempDir::new().unwrap();
    let config = ForgeConfig::default();
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();

    let bundle = scaffolder
        .run(&MakeResourceRequest::new("Tag").with_simple(true).with_view(true))
        .unwrap();

    assert_eq!(bundle.routes.keys().collect::<Vec<_>>(), vec![RouteKey::Index]);
    let files = files_under(&temp_dir.path().join(RESOURCES));
    assert!(files.contains(&PathBuf::from("Tags/Pages/ManageTags.php")));
    assert!(files.contains(&PathBuf::from("Tags/Schemas/TagInfolist.php")));
    assert!(!files.iter().any(|f| f.ends_with("ViewTag.php")));

    let resource = read(&temp_dir, "Tags/TagResource.php");
    assert!(resource.contains("'index' => ManageTags::route('/'),"));
    assert!(!resource.contains("'create'"));
}

#[test]
fn test_nested_resource_has_no_list_page() {
    let temp_dir = TempDir::new().unwrap();
    let config = ForgeConfig::default();
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();

    let bundle = scaffolder
        .run(&MakeResourceRequest::new("Address").with_parent("Customers/CustomerResource"))
        .unwrap();

    assert_eq!(
        bundle.spec.parent_resource_full_name.as_deref(),
        Some("App\\Filament\\Resources\\Customers\\CustomerResource")
    );
    assert!(!bundle.routes.contains(RouteKey::Index));

    let files = files_under(&temp_dir.path().join(RESOURCES));
    assert!(!files.iter().any(|f| f.ends_with("ListAddresses.php")));
    assert!(files.contains(&PathBuf::from("Addresses/Pages/CreateAddress.php")));

    let resource = read(&temp_dir, "Addresses/AddressResource.php");
    assert!(resource.contains("$parentResource = CustomerResource::class;"));
}

#[test]
fn test_embedded_schemas_and_table() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = ForgeConfig::default();
    config.generation.embed_schemas = true;
    config.generation.embed_table = true;
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();

    scaffolder
        .run(&MakeResourceRequest::new("Owner").with_view(true))
        .unwrap();

    let files = files_under(&temp_dir.path().join(RESOURCES));
    assert!(!files.iter().any(|f| f.starts_with("Owners/Schemas")));
    assert!(!files.iter().any(|f| f.starts_with("Owners/Tables")));

    let resource = read(&temp_dir, "Owners/OwnerResource.php");
    assert!(resource.contains("->recordActions(["));
    assert!(resource.contains("public static function infolist(Schema $schema): Schema"));
}

#[test]
fn test_template_overrides_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let stubs = temp_dir.path().join("stubs");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(
        stubs.join("create-page.php.hbs"),
        "<?php\n\nnamespace {{namespace}};\n\n// custom {{class_name}}\n",
    )
    .unwrap();

    let mut config = ForgeConfig::default();
    config.generation.stubs_directory = Some(PathBuf::from("stubs"));
    let project = project(&temp_dir, &config);
    let templates =
        TemplateRegistry::with_overrides(&config.stubs_directory(temp_dir.path()).unwrap())
            .unwrap();
    let scaffolder = ResourceScaffolder::with_templates(&project, &config, templates);

    scaffolder.run(&MakeResourceRequest::new("Owner")).unwrap();

    let create = read(&temp_dir, "Owners/Pages/CreateOwner.php");
    assert!(create.contains("// custom CreateOwner"));
    let edit = read(&temp_dir, "Owners/Pages/EditOwner.php");
    assert!(edit.contains("class EditOwner extends EditRecord"));
}

#[test]
fn test_custom_roots() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = ForgeConfig::default();
    config.resources.namespace = "App\\Filament\\Admin\\Resources".to_string();
    config.resources.directory = "app/Filament/Admin/Resources".to_string();
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();

    scaffolder
        .run(&MakeResourceRequest::new("Owner").with_resource_name("OwnerResource"))
        .unwrap();

    let path = temp_dir
        .path()
        .join("app/Filament/Admin/Resources/Owners/OwnerResource.php");
    let resource = fs::read_to_string(path).unwrap();
    assert!(resource.contains("namespace App\\Filament\\Admin\\Resources\\Owners;"));
}

#[test]
fn test_irregular_plural_bundle() {
    let temp_dir = TempDir::new().unwrap();
    let config = ForgeConfig::default();
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();

    let bundle = scaffolder.run(&MakeResourceRequest::new("Person")).unwrap();
    assert_eq!(
        bundle.spec.location.fully_qualified_name,
        "App\\Filament\\Resources\\People\\PersonResource"
    );

    let files = files_under(&temp_dir.path().join(RESOURCES));
    assert!(files.contains(&PathBuf::from("People/Pages/ListPeople.php")));
    assert!(files.contains(&PathBuf::from("People/Tables/PeopleTable.php")));

    let campus = scaffolder
        .run(&MakeResourceRequest::new("Campus").with_resource_name("campus"))
        .unwrap();
    assert_eq!(campus.spec.base_name(), "Campus");
    assert_eq!(campus.spec.plural_name(), "Campuses");
}

#[test]
fn test_model_clashing_with_framework_class() {
    let temp_dir = TempDir::new().unwrap();
    let config = ForgeConfig::default();
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();

    scaffolder.run(&MakeResourceRequest::new("Table")).unwrap();

    let resource = read(&temp_dir, "Tables/TableResource.php");
    assert!(resource.contains("use App\\Models\\Table as TableModel;"));
    assert!(resource.contains("use Filament\\Tables\\Table;"));
    assert!(!resource.contains("use App\\Models\\Table;"));
    assert!(resource.contains("$model = TableModel::class;"));
}

#[test]
fn test_blank_model_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = ForgeConfig::default();
    let project = project(&temp_dir, &config);
    let scaffolder = ResourceScaffolder::new(&project, &config).unwrap();

    let err = scaffolder.run(&MakeResourceRequest::new("  ")).unwrap_err();
    assert!(matches!(err, ScaffoldError::BlankModel { .. }));
    assert!(files_under(temp_dir.path()).is_empty());
}
