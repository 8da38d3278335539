//! `aria-*` attribute definitions

use super::{decode, AriaQueryMap};
use crate::error::Result;
use crate::query::AriaQueryConfig;
use crate::types::{AriaPropertyDefinition, AriaPropertyKey};

pub const TABLE: &str = "aria properties";

const PAYLOAD: &str = include_str!("../../data/aria.json");

pub type AriaPropsMap = AriaQueryMap<AriaPropertyKey, AriaPropertyDefinition>;

pub fn load(config: &AriaQueryConfig) -> Result<AriaPropsMap> {
    decode(TABLE, PAYLOAD, config)
}
