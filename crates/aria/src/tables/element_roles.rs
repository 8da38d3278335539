//! Element → roles: which ARIA roles an HTML element may take

use super::{decode, AriaQueryMap};
use crate::error::Result;
use crate::query::AriaQueryConfig;
use crate::types::{ElementDescriptor, RoleSet};

pub const TABLE: &str = "element roles";

const PAYLOAD: &str = include_str!("../../data/element_roles.json");

pub type ElementRoleMap = AriaQueryMap<ElementDescriptor, RoleSet>;

pub fn load(config: &AriaQueryConfig) -> Result<ElementRoleMap> {
    decode(TABLE, PAYLOAD, config)
}
