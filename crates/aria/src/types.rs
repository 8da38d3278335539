//! Core type definitions for the relation tables
//!
//! Key design principles:
//! 1. Keys are plain data; equality lives in `matcher`, not in `PartialEq`
//! 2. `None` and an empty list are different states and both survive a round trip
//! 3. Use SmallVec for the short lists (one or two attributes, one role)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;

/// ARIA role name, e.g. `"button"`
pub type RoleKey = String;

/// `aria-*` attribute name
pub type AriaPropertyKey = String;

/// HTML element name, e.g. `"input"`
pub type DomKey = String;

/// Ordered, duplicate-free roles an element may take. Almost always one.
pub type RoleSet = SmallVec<[RoleKey; 2]>;

/// Ordered descriptors of the elements implementing a role
pub type ElementSet = Vec<ElementDescriptor>;

/// Literal attribute value. Text and numbers never compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => write!(f, "{:?}", text),
            AttributeValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One attribute condition of an element descriptor
///
/// `constraints` holds qualifiers such as `"set"` or `"undefined"` that
/// describe presence or absence rather than a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeConstraint {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<SmallVec<[String; 1]>>,
}

impl AttributeConstraint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            constraints: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<AttributeValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints
            .get_or_insert_with(SmallVec::new)
            .push(constraint.into());
        self
    }
}

impl fmt::Display for AttributeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, "={}", value)?;
        }
        if let Some(constraints) = &self.constraints {
            write!(f, " ({})", constraints.join(", "))?;
        }
        write!(f, "]")
    }
}

/// An HTML element, optionally qualified by attribute and contextual conditions
///
/// Top-level `constraints` describe when the relation applies (e.g. "scoped to
/// the body element"). They are metadata and take no part in key matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SmallVec<[AttributeConstraint; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
}

impl ElementDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: None,
            constraints: None,
        }
    }

    pub fn with_attribute(mut self, attribute: AttributeConstraint) -> Self {
        self.attributes
            .get_or_insert_with(SmallVec::new)
            .push(attribute);
        self
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints
            .get_or_insert_with(Vec::new)
            .push(constraint.into());
        self
    }

    /// Attribute condition by name, if present
    pub fn attribute(&self, name: &str) -> Option<&AttributeConstraint> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.iter().find(|attr| attr.name == name))
    }
}

impl fmt::Display for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for attribute in self.attributes.iter().flatten() {
            write!(f, "{}", attribute)?;
        }
        Ok(())
    }
}

/// Where a role's accessible name comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameFrom {
    Author,
    Contents,
    Prohibited,
}

/// Definition of an ARIA role
///
/// `props` and `required_props` map a property name to its implicit default
/// value, `None` when the role defines no default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub accessible_name_required: bool,
    pub children_presentational: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_from: Option<NameFrom>,
    pub prohibited_props: Vec<AriaPropertyKey>,
    pub props: BTreeMap<AriaPropertyKey, Option<String>>,
    pub required_context_role: Vec<RoleKey>,
    pub required_owned_elements: Vec<Vec<RoleKey>>,
    pub required_props: BTreeMap<AriaPropertyKey, Option<String>>,
    /// Ancestor chains, root (`roletype`) first
    pub super_class: Vec<Vec<RoleKey>>,
}

impl RoleDefinition {
    /// Whether `ancestor` appears in any superclass chain
    pub fn inherits_from(&self, ancestor: &str) -> bool {
        self.super_class
            .iter()
            .any(|chain| chain.iter().any(|role| role == ancestor))
    }
}

/// Value type of an `aria-*` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaPropertyType {
    String,
    Id,
    IdList,
    Integer,
    Number,
    Boolean,
    Tristate,
    Token,
    TokenList,
}

/// Definition of an `aria-*` attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AriaPropertyDefinition {
    #[serde(rename = "type")]
    pub kind: AriaPropertyType,
    /// Permitted tokens for `token`/`tokenlist` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowundefined: Option<bool>,
}

impl AriaPropertyDefinition {
    /// Whether `token` is a permitted value. Non-token attributes accept anything.
    pub fn permits(&self, token: &str) -> bool {
        match &self.values {
            Some(values) => values.iter().any(|v| v == token),
            None => true,
        }
    }
}

/// Definition of an HTML element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomDefinition {
    /// Reserved elements may not carry ARIA roles, states or properties
    pub reserved: bool,
}
