//! Sorted views of the catalog.
//!
//! Sorting never touches the stored list; [`sorted_view`] returns a new,
//! stably sorted copy.

use crate::model::Product;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Created,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown sort option: {0}")]
pub struct ParseSortError(String);

impl FromStr for SortKey {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "created" => Ok(SortKey::Created),
            other => Err(ParseSortError(other.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ParseSortError(other.to_string())),
        }
    }
}

impl Display for SortSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self.key {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Created => "created",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{key}/{direction}")
    }
}

fn compare(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Created => a.created.cmp(&b.created),
    }
}

/// `products` ordered by `spec`. Equal elements keep their relative order in
/// both directions.
pub fn sorted_view(products: &[Product], spec: SortSpec) -> Vec<Product> {
    let mut view = products.to_vec();
    view.sort_by(|a, b| match spec.direction {
        SortDirection::Asc => compare(spec.key, a, b),
        SortDirection::Desc => compare(spec.key, b, a),
    });
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use chrono::{TimeZone, Utc};

    fn product(name: &str, price: f64, day: u32) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_string(),
            brand: "Acme".to_string(),
            category: "Misc".to_string(),
            price,
            quantity: 1,
            is_available: true,
            created: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
        }
    }

    fn names(view: &[Product]) -> Vec<&str> {
        view.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let products = vec![
            product("banana", 1.0, 1),
            product("Apple", 2.0, 2),
            product("cherry", 3.0, 3),
        ];
        let view = sorted_view(&products, SortSpec::default());
        assert_eq!(names(&view), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_desc_keeps_ties_in_order() {
        let products = vec![product("a", 10.0, 1), product("b", 20.0, 2), product("c", 10.0, 3)];
        let view = sorted_view(&products, SortSpec::new(SortKey::Price, SortDirection::Desc));
        assert_eq!(names(&view), vec!["b", "a", "c"]);
        let view = sorted_view(&products, SortSpec::new(SortKey::Price, SortDirection::Asc));
        assert_eq!(names(&view), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_created_order_and_source_untouched() {
        let products = vec![product("late", 1.0, 20), product("early", 1.0, 2)];
        let view = sorted_view(&products, SortSpec::new(SortKey::Created, SortDirection::Asc));
        assert_eq!(names(&view), vec!["early", "late"]);
        assert_eq!(names(&products), vec!["late", "early"]);
    }

    #[test]
    fn test_every_spec_is_ordered_and_stable() {
        let products = vec![
            product("b", 20.0, 3),
            product("A", 10.0, 1),
            product("a", 20.0, 3),
            product("c", 10.0, 2),
            product("B", 30.0, 1),
        ];
        let position = |p: &Product| products.iter().position(|q| q.id == p.id).unwrap();

        for key in [SortKey::Name, SortKey::Price, SortKey::Created] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let spec = SortSpec::new(key, direction);
                let view = sorted_view(&products, spec);
                assert_eq!(view, sorted_view(&products, spec), "{spec} is deterministic");
                assert_eq!(view.len(), products.len());

                for pair in view.windows(2) {
                    let ordering = match direction {
                        SortDirection::Asc => compare(key, &pair[0], &pair[1]),
                        SortDirection::Desc => compare(key, &pair[1], &pair[0]),
                    };
                    assert_ne!(ordering, Ordering::Greater, "{spec} out of order");
                    if ordering == Ordering::Equal {
                        assert!(position(&pair[0]) < position(&pair[1]), "{spec} reordered a tie");
                    }
                }
            }
        }
    }

    #[test]
    fn test_parse_options() {
        assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("cost".parse::<SortKey>().is_err());
        assert_eq!(SortSpec::default().to_string(), "name/asc");
    }
}
