//! HTML element definitions

use super::{decode, AriaQueryMap};
use crate::error::Result;
use crate::query::AriaQueryConfig;
use crate::types::{DomDefinition, DomKey};

pub const TABLE: &str = "dom";

const PAYLOAD: &str = include_str!("../../data/dom.json");

pub type DomMap = AriaQueryMap<DomKey, DomDefinition>;

pub fn load(config: &AriaQueryConfig) -> Result<DomMap> {
    decode(TABLE, PAYLOAD, config)
}
