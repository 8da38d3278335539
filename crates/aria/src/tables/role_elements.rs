//! Role → elements: which HTML elements implement an ARIA role

use super::{decode, AriaQueryMap};
use crate::error::Result;
use crate::query::AriaQueryConfig;
use crate::types::{ElementSet, RoleKey};

pub const TABLE: &str = "role elements";

const PAYLOAD: &str = include_str!("../../data/role_elements.json");

pub type RoleElementMap = AriaQueryMap<RoleKey, ElementSet>;

pub fn load(config: &AriaQueryConfig) -> Result<RoleElementMap> {
    decode(TABLE, PAYLOAD, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttributeConstraint, ElementDescriptor};

    fn map() -> RoleElementMap {
        load(&AriaQueryConfig::default()).unwrap()
    }

    #[test]
    fn test_entry_count() {
        let map = map();
        assert_eq!(map.len(), 55);
        assert_eq!(map.iter().len(), 55);
    }

    #[test]
    fn test_button_elements() {
        let map = map();
        let elements = map.get("button").unwrap();
        assert_eq!(elements.len(), 5);

        let inputs = elements.iter().filter(|e| e.name == "input").count();
        assert_eq!(inputs, 4);
        assert_eq!(elements[4], ElementDescriptor::new("button"));
        assert_eq!(
            elements[0],
            ElementDescriptor::new("input")
                .with_attribute(AttributeConstraint::new("type").with_value("button"))
        );
    }

    #[test]
    fn test_primitive_keys() {
        let map = map();
        assert!(map.has("link"));
        assert!(!map.has("Link"));
        assert!(!map.has("fake role"));
        assert_eq!(map.get("fake role"), None);
    }

    #[test]
    fn test_keys_are_unique() {
        assert_eq!(map().first_duplicate(), None);
    }

    #[test]
    fn test_restartable_iteration() {
        let map = map();
        let first: Vec<_> = map.iter().map(|(role, _)| role.clone()).collect();
        let second: Vec<_> = (&map).into_iter().map(|(role, _)| role.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first.first().map(String::as_str), Some("article"));
        assert_eq!(first.last().map(String::as_str), Some("time"));
    }
}
