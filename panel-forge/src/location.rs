//! Namespace and directory derivation for resource bundles
//!
//! A bundle's namespace and directory are derived by the same transformation,
//! so `App\Filament\Resources\Invoices` always pairs with
//! `app/Filament/Resources/Invoices`.

use crate::base::BaseGenerator;
use crate::config::ResourceRoots;
use crate::naming::{self, NAMESPACE_SEPARATOR, RESOURCE_SUFFIX};
use tracing::debug;

/// Where a resource bundle lives, in code and on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocation {
    /// Singular base name, e.g. `Invoice`
    pub base_name: String,
    /// Plural form of the base name, e.g. `Invoices`
    pub plural_name: String,
    /// Fully-qualified resource class, e.g. `App\Filament\Resources\Invoices\InvoiceResource`
    pub fully_qualified_name: String,
    /// Namespace of the resource class
    pub namespace: String,
    /// Bundle directory relative to the project root, `/`-separated
    pub directory: String,
}

impl ResourceLocation {
    /// Derive a location from a normalized base name
    ///
    /// `base_name` must not be empty; [`naming::normalize_resource_name`] and
    /// model qualification both guarantee this.
    ///
    /// # Examples
    ///
    /// ```
    /// use panel_forge::{ResourceLocation, ResourceRoots};
    ///
    /// let location = ResourceLocation::derive("Invoice", &ResourceRoots::default());
    /// assert_eq!(location.fully_qualified_name, "App\\Filament\\Resources\\Invoices\\InvoiceResource");
    /// assert_eq!(location.namespace, "App\\Filament\\Resources\\Invoices");
    /// assert_eq!(location.directory, "app/Filament/Resources/Invoices");
    /// ```
    #[must_use]
    pub fn derive(base_name: &str, roots: &ResourceRoots) -> Self {
        debug_assert!(!base_name.is_empty(), "resource base name is empty");
        let plural_name = naming::pluralize(base_name);

        let fully_qualified_name = collapse_separators(
            &format!(
                "{}\\{plural_name}\\{base_name}{RESOURCE_SUFFIX}",
                roots.namespace
            ),
            NAMESPACE_SEPARATOR,
        );
        let namespace = fully_qualified_name
            .rsplit_once(NAMESPACE_SEPARATOR)
            .map_or_else(String::new, |(namespace, _)| namespace.to_string());
        let directory = normalize_directory(&format!("{}/{plural_name}", roots.directory));

        Self {
            base_name: base_name.to_string(),
            plural_name,
            fully_qualified_name,
            namespace,
            directory,
        }
    }

    /// Resolve the location for a bundle
    ///
    /// An explicit `resource_name` is normalized and derived here; without
    /// one, location resolution is left entirely to `base`, which works from
    /// the model type instead.
    pub fn resolve<B: BaseGenerator + ?Sized>(
        resource_name: Option<&str>,
        model: &str,
        roots: &ResourceRoots,
        base: &B,
    ) -> Self {
        match resource_name {
            Some(name) => {
                let base_name = naming::normalize_resource_name(name);
                debug!(input = name, base_name = %base_name, "Normalized resource name");
                Self::derive(&base_name, roots)
            }
            None => {
                debug!(model, "No resource name given, using default location");
                base.default_location(model, roots)
            }
        }
    }

    /// Namespace for a sub-folder of the bundle, e.g. `Pages`
    #[must_use]
    pub fn child_namespace(&self, child: &str) -> String {
        format!("{}{NAMESPACE_SEPARATOR}{child}", self.namespace)
    }

    /// Directory for a sub-folder of the bundle
    #[must_use]
    pub fn child_directory(&self, child: &str) -> String {
        format!("{}/{child}", self.directory)
    }
}

/// Convert backslashes to `/` and collapse repeated separators
///
/// ```
/// use panel_forge::location::normalize_directory;
///
/// assert_eq!(normalize_directory("app\\Filament//Resources/"), "app/Filament/Resources/");
/// ```
#[must_use]
pub fn normalize_directory(path: &str) -> String {
    collapse_separators(&path.replace('\\', "/"), '/')
}

fn collapse_separators(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == separator && out.ends_with(separator) {
            continue;
        }
        out.push(c);
    }
    out
}
