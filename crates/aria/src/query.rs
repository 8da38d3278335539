//! AriaQuery - the bundle of all five tables
//!
//! Tables are decoded once and never change. Build an `AriaQuery` explicitly
//! with `load`/`with_config` and pass it around by reference, or use the
//! process-wide instance from `AriaQuery::global`.

use crate::error::Result;
use crate::tables::aria::{self, AriaPropsMap};
use crate::tables::dom::{self, DomMap};
use crate::tables::element_roles::{self, ElementRoleMap};
use crate::tables::role_elements::{self, RoleElementMap};
use crate::tables::roles::{self, RolesMap};
use serde::Serialize;
use std::sync::LazyLock;

/// Configuration for table loading
#[derive(Debug, Clone, Default)]
pub struct AriaQueryConfig {
    /// Fail to load a table holding two keys that match each other.
    /// Off by default: the element table has such keys, the first one wins.
    pub reject_duplicate_keys: bool,
}

static GLOBAL: LazyLock<AriaQuery> = LazyLock::new(|| match AriaQuery::load() {
    Ok(query) => query,
    Err(e) => panic!("embedded ARIA tables are corrupt: {}", e),
});

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaQuery {
    aria: AriaPropsMap,
    dom: DomMap,
    roles: RolesMap,
    element_roles: ElementRoleMap,
    role_elements: RoleElementMap,
}

impl AriaQuery {
    /// Decode every table with the default config
    pub fn load() -> Result<Self> {
        Self::with_config(AriaQueryConfig::default())
    }

    /// Decode every table with a custom config
    pub fn with_config(config: AriaQueryConfig) -> Result<Self> {
        let query = Self {
            aria: aria::load(&config)?,
            dom: dom::load(&config)?,
            roles: roles::load(&config)?,
            element_roles: element_roles::load(&config)?,
            role_elements: role_elements::load(&config)?,
        };
        tracing::debug!(
            roles = query.roles.len(),
            element_roles = query.element_roles.len(),
            role_elements = query.role_elements.len(),
            "Loaded ARIA tables"
        );
        Ok(query)
    }

    /// Process-wide instance, decoded on first use
    ///
    /// # Panics
    ///
    /// If an embedded payload fails to decode. The payloads are fixed at
    /// build time, so this is a packaging error rather than a runtime one.
    pub fn global() -> &'static AriaQuery {
        &GLOBAL
    }

    /// `aria-*` attribute definitions
    pub fn aria(&self) -> &AriaPropsMap {
        &self.aria
    }

    /// HTML element definitions
    pub fn dom(&self) -> &DomMap {
        &self.dom
    }

    /// Role definitions
    pub fn roles(&self) -> &RolesMap {
        &self.roles
    }

    /// Element → roles
    pub fn element_roles(&self) -> &ElementRoleMap {
        &self.element_roles
    }

    /// Role → elements
    pub fn role_elements(&self) -> &RoleElementMap {
        &self.role_elements
    }

    /// Serialize every table as pretty JSON, keyed by its export file stem
    pub fn to_json_tables(&self) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![
            ("aria", serde_json::to_string_pretty(&self.aria)?),
            ("dom", serde_json::to_string_pretty(&self.dom)?),
            ("roles", serde_json::to_string_pretty(&self.roles)?),
            ("elementRoles", serde_json::to_string_pretty(&self.element_roles)?),
            ("roleElements", serde_json::to_string_pretty(&self.role_elements)?),
        ])
    }
}
