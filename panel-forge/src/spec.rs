//! Resource specification
//!
//! [`MakeResourceRequest`] is what the user asked for; [`ResourceSpec`] is the
//! immutable value derived from it once per invocation and threaded through
//! every later stage.

use crate::base::BaseGenerator;
use crate::config::ForgeConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::location::ResourceLocation;
use crate::naming::{self, NAMESPACE_SEPARATOR};
use crate::routes::{RouteShape, RouteTable};

/// User input for one `make-resource` invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakeResourceRequest {
    /// Model class, bare (`Invoice`), relative (`Billing/Invoice`) or fully-qualified
    pub model: String,
    /// Overrides the model-derived base name
    pub resource_name: Option<String>,
    /// Single "manage" page instead of list/create/edit/view pages
    pub simple: bool,
    /// Generate a view operation (view page and infolist)
    pub view: bool,
    /// Model uses soft deletes
    pub soft_deletes: bool,
    /// Parent resource class this resource nests under
    pub parent: Option<String>,
    /// Overwrite existing files
    pub force: bool,
}

impl MakeResourceRequest {
    /// Request for `model` with every flag off
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Set the resource name override
    #[must_use]
    pub fn with_resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = Some(name.into());
        self
    }

    /// Set the simple flag
    #[must_use]
    pub const fn with_simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    /// Set the view flag
    #[must_use]
    pub const fn with_view(mut self, view: bool) -> Self {
        self.view = view;
        self
    }

    /// Set the soft-deletes flag
    #[must_use]
    pub const fn with_soft_deletes(mut self, soft_deletes: bool) -> Self {
        self.soft_deletes = soft_deletes;
        self
    }

    /// Nest under a parent resource
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the force flag
    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// A model class referenced by generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReference {
    /// Class basename, e.g. `Invoice`
    pub class_name: String,
    /// Fully-qualified class, e.g. `App\Models\Invoice`
    pub fully_qualified_name: String,
}

impl ModelReference {
    /// Qualify `model` against `model_namespace` unless it already lives there
    ///
    /// ```
    /// use panel_forge::ModelReference;
    ///
    /// let model = ModelReference::qualify("billing/invoice", "App\\Models")?;
    /// assert_eq!(model.fully_qualified_name, "App\\Models\\Billing\\Invoice");
    /// assert_eq!(model.class_name, "Invoice");
    /// # Ok::<(), panel_forge::ScaffoldError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::BlankModel`] if `model` holds no class name.
    pub fn qualify(model: &str, model_namespace: &str) -> ScaffoldResult<Self> {
        let segments: Vec<String> = model
            .split(['/', '\\'])
            .map(naming::studly_case)
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.is_empty() {
            return Err(ScaffoldError::BlankModel {
                model: model.to_string(),
            });
        }
        let relative = segments.join("\\");

        let namespace = model_namespace.trim_matches(NAMESPACE_SEPARATOR);
        let fully_qualified_name = if namespace.is_empty()
            || relative == namespace
            || relative.starts_with(&format!("{namespace}\\"))
        {
            relative
        } else {
            format!("{namespace}\\{relative}")
        };

        Ok(Self {
            class_name: naming::class_basename(&fully_qualified_name).to_string(),
            fully_qualified_name,
        })
    }
}

/// Everything derived for one resource bundle
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Names, namespace and directory of the bundle
    pub location: ResourceLocation,
    /// The model the resource manages
    pub model: ModelReference,
    /// Single "manage" page instead of separate pages
    pub is_simple: bool,
    /// View page and infolist are generated
    pub has_view_operation: bool,
    /// Soft-delete aware table, pages and query
    pub is_soft_deletable: bool,
    /// Fully-qualified parent resource class, if nested
    pub parent_resource_full_name: Option<String>,
}

impl ResourceSpec {
    /// Derive the spec for `request`
    ///
    /// Without a resource name the bundle location comes from `base`, which
    /// is handed the qualified model class.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::BlankModel`] if the request names no model.
    pub fn resolve<B: BaseGenerator + ?Sized>(
        request: &MakeResourceRequest,
        config: &ForgeConfig,
        base: &B,
    ) -> ScaffoldResult<Self> {
        let model = ModelReference::qualify(&request.model, &config.models.namespace)?;
        let location = ResourceLocation::resolve(
            request.resource_name.as_deref(),
            &model.fully_qualified_name,
            &config.resources,
            base,
        );
        let parent_resource_full_name = request
            .parent
            .as_deref()
            .map(str::trim)
            .filter(|parent| !parent.is_empty())
            .map(|parent| qualify_parent(parent, &config.resources.namespace));

        Ok(Self {
            location,
            model,
            is_simple: request.simple,
            has_view_operation: request.view,
            is_soft_deletable: request.soft_deletes,
            parent_resource_full_name,
        })
    }

    /// Singular base name
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.location.base_name
    }

    /// Plural name
    #[must_use]
    pub fn plural_name(&self) -> &str {
        &self.location.plural_name
    }

    /// Namespace of the resource class
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.location.namespace
    }

    /// Bundle directory
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.location.directory
    }

    /// Resource class name, e.g. `InvoiceResource`
    #[must_use]
    pub fn resource_class(&self) -> &str {
        naming::class_basename(&self.location.fully_qualified_name)
    }

    /// Whether the resource nests under a parent
    #[must_use]
    pub const fn has_parent(&self) -> bool {
        self.parent_resource_full_name.is_some()
    }

    /// Flags that decide the route table
    #[must_use]
    pub const fn route_shape(&self) -> RouteShape {
        RouteShape {
            is_simple: self.is_simple,
            has_view_operation: self.has_view_operation,
            has_parent: self.has_parent(),
        }
    }

    /// Page routes of this resource
    #[must_use]
    pub fn route_table(&self) -> RouteTable {
        RouteTable::build(self.route_shape(), self.plural_name(), self.base_name())
    }
}

/// Qualify a parent resource against the root resource namespace
fn qualify_parent(parent: &str, root_namespace: &str) -> String {
    let parent = parent.replace('/', "\\");
    let parent = parent.trim_matches(NAMESPACE_SEPARATOR);
    let root = root_namespace.trim_matches(NAMESPACE_SEPARATOR);

    if root.is_empty() || parent.starts_with(&format!("{root}\\")) {
        parent.to_string()
    } else {
        format!("{root}\\{parent}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::MockBaseGenerator;
    use crate::routes::RouteKey;

    fn resolve(request: &MakeResourceRequest) -> ResourceSpec {
        let mut base = MockBaseGenerator::new();
        base.expect_default_location()
            .returning(|model, roots| ResourceLocation::derive(naming::class_basename(model), roots));
        ResourceSpec::resolve(request, &ForgeConfig::default(), &base).unwrap()
    }

    #[test]
    fn test_request_builder() {
        let request = MakeResourceRequest::new("Invoice")
            .with_resource_name("billing/invoice")
            .with_simple(true)
            .with_view(true)
            .with_soft_deletes(true)
            .with_parent("Customers\\CustomerResource")
            .with_force(true);

        assert_eq!(request.model, "Invoice");
        assert_eq!(request.resource_name.as_deref(), Some("billing/invoice"));
        assert!(request.simple && request.view && request.soft_deletes && request.force);
        assert_eq!(request.parent.as_deref(), Some("Customers\\CustomerResource"));
    }

    #[test]
    fn test_model_reference_qualification() {
        let bare = ModelReference::qualify("invoice", "App\\Models").unwrap();
        assert_eq!(bare.fully_qualified_name, "App\\Models\\Invoice");
        assert_eq!(bare.class_name, "Invoice");

        let qualified = ModelReference::qualify("App\\Models\\Invoice", "App\\Models").unwrap();
        assert_eq!(qualified.fully_qualified_name, "App\\Models\\Invoice");

        let leading = ModelReference::qualify("\\App\\Models\\Invoice", "\\App\\Models\\").unwrap();
        assert_eq!(leading.fully_qualified_name, "App\\Models\\Invoice");

        let nested = ModelReference::qualify("Billing/line_item", "App\\Models").unwrap();
        assert_eq!(nested.fully_qualified_name, "App\\Models\\Billing\\LineItem");
        assert_eq!(nested.class_name, "LineItem");
    }

    #[test]
    fn test_blank_model_is_rejected() {
        for model in ["", "   ", " / ", "\\\\", "_"] {
            assert!(
                matches!(
                    ModelReference::qualify(model, "App\\Models"),
                    Err(ScaffoldError::BlankModel { .. })
                ),
                "{model:?}"
            );
        }

        let mut base = MockBaseGenerator::new();
        base.expect_default_location().never();
        let result = ResourceSpec::resolve(
            &MakeResourceRequest::new("  "),
            &ForgeConfig::default(),
            &base,
        );
        assert!(matches!(result, Err(ScaffoldError::BlankModel { .. })));
    }

    #[test]
    fn test_blank_segments_are_skipped() {
        let model = ModelReference::qualify("billing/ /invoice/", "App\\Models").unwrap();
        assert_eq!(model.fully_qualified_name, "App\\Models\\Billing\\Invoice");
    }

    #[test]
    fn test_parent_qualification() {
        let root = "App\\Filament\\Resources";
        assert_eq!(
            qualify_parent("Customers/CustomerResource", root),
            "App\\Filament\\Resources\\Customers\\CustomerResource"
        );
        assert_eq!(
            qualify_parent("\\App\\Filament\\Resources\\Customers\\CustomerResource", root),
            "App\\Filament\\Resources\\Customers\\CustomerResource"
        );
    }

    #[test]
    fn test_resolve_with_resource_name() {
        let spec = resolve(
            &MakeResourceRequest::new("Payment")
                .with_resource_name("billing/invoice")
                .with_view(true),
        );

        assert_eq!(spec.base_name(), "Invoice");
        assert_eq!(spec.plural_name(), "Invoices");
        assert_eq!(spec.resource_class(), "InvoiceResource");
        assert_eq!(spec.model.fully_qualified_name, "App\\Models\\Payment");
        assert!(spec.has_view_operation);
        assert!(!spec.has_parent());
    }

    #[test]
    fn test_resolve_without_resource_name_uses_model() {
        let spec = resolve(&MakeResourceRequest::new("Owner"));
        assert_eq!(spec.base_name(), "Owner");
        assert_eq!(spec.namespace(), "App\\Filament\\Resources\\Owners");
        assert_eq!(spec.directory(), "app/Filament/Resources/Owners");
    }

    #[test]
    fn test_blank_parent_is_ignored() {
        let spec = resolve(&MakeResourceRequest::new("Owner").with_parent("  "));
        assert!(spec.parent_resource_full_name.is_none());
    }

    #[test]
    fn test_route_table_follows_flags() {
        let spec = resolve(
            &MakeResourceRequest::new("Invoice")
                .with_view(true)
                .with_parent("Customers\\CustomerResource"),
        );
        let routes = spec.route_table();
        assert!(!routes.contains(RouteKey::Index));
        assert!(routes.contains(RouteKey::Create));
        assert!(routes.contains(RouteKey::View));
        assert!(routes.contains(RouteKey::Edit));
    }
}
