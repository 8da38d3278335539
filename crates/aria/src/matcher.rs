//! Key matching for lookups
//!
//! Role, property and element-name tables compare keys as plain strings.
//! Element descriptor tables compare structurally:
//!
//! ```text
//! name          exact
//! attributes    both absent, or same length and equal position by position
//!   name        exact
//!   value       both absent, or equal (text never equals number)
//!   constraints both absent, or same length and equal position by position
//! constraints   ignored
//! ```
//!
//! Attribute order is significant. Matching never panics: a query of the
//! wrong shape simply fails to match.

use crate::types::{AttributeConstraint, AttributeValue, ElementDescriptor};
use serde_json::Value;

/// Equality between a stored key and a lookup query of type `Q`
pub trait KeyMatch<Q: ?Sized> {
    fn key_matches(&self, query: &Q) -> bool;
}

impl KeyMatch<str> for String {
    fn key_matches(&self, query: &str) -> bool {
        self.as_str() == query
    }
}

impl KeyMatch<String> for String {
    fn key_matches(&self, query: &String) -> bool {
        self == query
    }
}

impl KeyMatch<ElementDescriptor> for ElementDescriptor {
    fn key_matches(&self, query: &ElementDescriptor) -> bool {
        self.name == query.name
            && optional_list_eq(
                self.attributes.as_deref(),
                query.attributes.as_deref(),
                attribute_eq,
            )
    }
}

fn attribute_eq(a: &AttributeConstraint, b: &AttributeConstraint) -> bool {
    a.name == b.name
        && a.value == b.value
        && optional_list_eq(a.constraints.as_deref(), b.constraints.as_deref(), |x, y| {
            x == y
        })
}

/// Both absent, or both present with equal length and pairwise equal items
fn optional_list_eq<T>(a: Option<&[T]>, b: Option<&[T]>, eq: impl Fn(&T, &T) -> bool) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq(x, y)),
        _ => false,
    }
}

/// Structural match against a JSON-shaped descriptor
///
/// A missing field is "absent". Any present field of the wrong type (a
/// non-array `attributes`, a `null` value, a numeric name) fails the match.
impl KeyMatch<Value> for ElementDescriptor {
    fn key_matches(&self, query: &Value) -> bool {
        let Some(query) = query.as_object() else {
            return false;
        };

        if query.get("name").and_then(Value::as_str) != Some(self.name.as_str()) {
            return false;
        }

        match (self.attributes.as_deref(), query.get("attributes")) {
            (None, None) => true,
            (Some(attrs), Some(Value::Array(query_attrs))) => {
                attrs.len() == query_attrs.len()
                    && attrs
                        .iter()
                        .zip(query_attrs)
                        .all(|(attr, query_attr)| attribute_matches_json(attr, query_attr))
            }
            _ => false,
        }
    }
}

fn attribute_matches_json(attr: &AttributeConstraint, query: &Value) -> bool {
    let Some(query) = query.as_object() else {
        return false;
    };

    if query.get("name").and_then(Value::as_str) != Some(attr.name.as_str()) {
        return false;
    }

    let value_eq = match (&attr.value, query.get("value")) {
        (None, None) => true,
        (Some(AttributeValue::Text(text)), Some(Value::String(query_text))) => text == query_text,
        (Some(AttributeValue::Number(n)), Some(Value::Number(query_n))) => {
            query_n.as_f64() == Some(*n)
        }
        _ => false,
    };
    if !value_eq {
        return false;
    }

    match (attr.constraints.as_deref(), query.get("constraints")) {
        (None, None) => true,
        (Some(constraints), Some(Value::Array(query_constraints))) => {
            constraints.len() == query_constraints.len()
                && constraints
                    .iter()
                    .zip(query_constraints)
                    .all(|(c, p)| p.as_str() == Some(c.as_str()))
        }
        _ => false,
    }
}
