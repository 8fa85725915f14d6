//! Page route table
//!
//! Which pages a resource has is a pure function of three flags:
//!
//! | simple | view | parent | routes                          |
//! |--------|------|--------|---------------------------------|
//! | yes    | *    | *      | `index` (manage page)           |
//! | no     | no   | no     | `index`, `create`, `edit`       |
//! | no     | yes  | no     | `index`, `create`, `view`, `edit` |
//! | no     | *    | yes    | `create`, `edit`, `view` if view |

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Route key of a resource page
///
/// Ordering follows the order pages are registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKey {
    /// List (or manage) page
    Index,
    /// Create page
    Create,
    /// View page
    View,
    /// Edit page
    Edit,
}

impl RouteKey {
    /// Every key, in registration order
    pub const ALL: [Self; 4] = [Self::Index, Self::Create, Self::View, Self::Edit];

    /// Key as used in the generated `getPages()` array
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Create => "create",
            Self::View => "view",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One page route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRoute {
    /// Page class name, e.g. `ListInvoices`
    pub page_class: String,
    /// Route path relative to the resource, e.g. `/{record}/edit`
    pub path: &'static str,
}

/// Flags the route table depends on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteShape {
    /// Single manage page
    pub is_simple: bool,
    /// View page exists
    pub has_view_operation: bool,
    /// Resource is nested under a parent, so it has no index page of its own
    pub has_parent: bool,
}

/// Mapping from route key to page route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<RouteKey, PageRoute>,
}

impl RouteTable {
    /// Build the route table for a resource
    ///
    /// # Examples
    ///
    /// ```
    /// use panel_forge::{RouteKey, RouteShape, RouteTable};
    ///
    /// let shape = RouteShape { has_view_operation: true, ..RouteShape::default() };
    /// let routes = RouteTable::build(shape, "Invoices", "Invoice");
    /// assert_eq!(routes.keys().collect::<Vec<_>>(), RouteKey::ALL.to_vec());
    /// assert_eq!(routes.get(RouteKey::Edit).unwrap().page_class, "EditInvoice");
    /// ```
    #[must_use]
    pub fn build(shape: RouteShape, plural: &str, singular: &str) -> Self {
        let route = |page_class: String, path: &'static str| PageRoute { page_class, path };

        let routes = if shape.is_simple {
            BTreeMap::from([(RouteKey::Index, route(format!("Manage{plural}"), "/"))])
        } else {
            RouteKey::ALL
                .into_iter()
                .filter_map(|key| {
                    let page = match key {
                        RouteKey::Index if !shape.has_parent => {
                            route(format!("List{plural}"), "/")
                        }
                        RouteKey::Create => route(format!("Create{singular}"), "/create"),
                        RouteKey::View if shape.has_view_operation => {
                            route(format!("View{singular}"), "/{record}")
                        }
                        RouteKey::Edit => route(format!("Edit{singular}"), "/{record}/edit"),
                        RouteKey::Index | RouteKey::View => return None,
                    };
                    Some((key, page))
                })
                .collect()
        };

        Self { routes }
    }

    /// Route for `key`, if present
    #[must_use]
    pub fn get(&self, key: RouteKey) -> Option<&PageRoute> {
        self.routes.get(&key)
    }

    /// Whether `key` is present
    #[must_use]
    pub fn contains(&self, key: RouteKey) -> bool {
        self.routes.contains_key(&key)
    }

    /// Present keys, in registration order
    pub fn keys(&self) -> impl Iterator<Item = RouteKey> + '_ {
        self.routes.keys().copied()
    }

    /// Routes in registration order
    pub fn iter(&self) -> impl Iterator<Item = (RouteKey, &PageRoute)> + '_ {
        self.routes.iter().map(|(key, route)| (*key, route))
    }

    /// Number of routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
