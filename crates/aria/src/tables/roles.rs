//! Role → definition: the properties and hierarchy of every ARIA role

use super::{decode, AriaQueryMap};
use crate::error::Result;
use crate::query::AriaQueryConfig;
use crate::types::{RoleDefinition, RoleKey};

pub const TABLE: &str = "roles";

const PAYLOAD: &str = include_str!("../../data/roles.json");

pub type RolesMap = AriaQueryMap<RoleKey, RoleDefinition>;

pub fn load(config: &AriaQueryConfig) -> Result<RolesMap> {
    decode(TABLE, PAYLOAD, config)
}
