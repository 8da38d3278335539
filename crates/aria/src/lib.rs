//! ARIA Relation Tables
//!
//! Static relations between HTML elements and ARIA roles, queried through one
//! read-only, map-like interface.
//!
//! ## Core Design
//!
//! ```text
//! JSON payload → Vec<(K, V)> → StructuredKeyMap (Arc<[(K, V)]>) → Iterable → consumer
//!                                     ↑
//!                              KeyMatch<Q>: structural or exact
//! ```
//!
//! - Keys can be structured (`ElementDescriptor`), so lookups scan in order
//!   instead of hashing; the first matching key wins
//! - Attribute order is significant, top-level `constraints` are not
//! - Tables are immutable once decoded and shared by reference
//!
//! ```
//! use aria::{AttributeConstraint, ElementDescriptor};
//!
//! let anchor = ElementDescriptor::new("a")
//!     .with_attribute(AttributeConstraint::new("href").with_constraint("set"));
//! let roles = aria::element_roles().get(&anchor).unwrap();
//! assert_eq!(roles.as_slice(), ["link"]);
//!
//! assert_eq!(aria::role_elements().get("button").map(Vec::len), Some(5));
//! ```

pub mod error;
pub mod iter;
pub mod map;
pub mod matcher;
pub mod query;
pub mod tables;
pub mod types;

pub use error::{AriaError, Result};
pub use iter::{Entries, Iterable};
pub use map::StructuredKeyMap;
pub use matcher::KeyMatch;
pub use query::{AriaQuery, AriaQueryConfig};
pub use tables::aria::AriaPropsMap;
pub use tables::dom::DomMap;
pub use tables::element_roles::ElementRoleMap;
pub use tables::role_elements::RoleElementMap;
pub use tables::roles::RolesMap;
pub use tables::AriaQueryMap;
pub use types::*;

/// `aria-*` attribute definitions from the global tables
pub fn aria() -> &'static AriaPropsMap {
    AriaQuery::global().aria()
}

/// HTML element definitions from the global tables
pub fn dom() -> &'static DomMap {
    AriaQuery::global().dom()
}

/// Role definitions from the global tables
pub fn roles() -> &'static RolesMap {
    AriaQuery::global().roles()
}

/// Element → roles from the global tables
pub fn element_roles() -> &'static ElementRoleMap {
    AriaQuery::global().element_roles()
}

/// Role → elements from the global tables
pub fn role_elements() -> &'static RoleElementMap {
    AriaQuery::global().role_elements()
}
