//! Add-form rules.
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | name | at least 3 characters after trimming | "At least 3 characters" |
//! | price | finite number > 0 | "Price must be > 0" |
//! | category | not blank | "Enter a category" |
//! | brand | not blank | "Enter a brand" |
//! | quantity | whole number >= 0, blank counts as 0 | "Whole number >= 0" |

use crate::model::ProductDraft;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Form fields that carry a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    Brand,
    Category,
    Price,
    Quantity,
}

impl Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DraftField::Name => "name",
            DraftField::Brand => "brand",
            DraftField::Category => "category",
            DraftField::Price => "price",
            DraftField::Quantity => "quantity",
        })
    }
}

/// One message per failed field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<DraftField, String>);

impl FieldErrors {
    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: DraftField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// A draft that passed every rule, with text trimmed and numbers parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub is_available: bool,
}

pub fn validate_draft(draft: &ProductDraft) -> Result<ValidDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = draft.name.trim();
    if name.chars().count() < 3 {
        errors.insert(DraftField::Name, "At least 3 characters");
    }
    let price = parse_number(&draft.price).filter(|p| *p > 0.0);
    if price.is_none() {
        errors.insert(DraftField::Price, "Price must be > 0");
    }
    let category = draft.category.trim();
    if category.is_empty() {
        errors.insert(DraftField::Category, "Enter a category");
    }
    let brand = draft.brand.trim();
    if brand.is_empty() {
        errors.insert(DraftField::Brand, "Enter a brand");
    }
    let quantity = parse_number(&draft.quantity).and_then(whole_count);
    if quantity.is_none() {
        errors.insert(DraftField::Quantity, "Whole number >= 0");
    }

    match (price, quantity) {
        (Some(price), Some(quantity)) if errors.is_empty() => Ok(ValidDraft {
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            price,
            quantity,
            is_available: draft.is_available,
        }),
        _ => Err(errors),
    }
}

/// A finite number; blank text is 0.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn whole_count(value: f64) -> Option<u32> {
    (value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)).then(|| value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "  Pixel 9 ".to_string(),
            brand: "Google".to_string(),
            category: "Smartphones".to_string(),
            price: "79990".to_string(),
            quantity: "4".to_string(),
            is_available: true,
        }
    }

    #[test]
    fn test_valid_draft_is_trimmed_and_parsed() {
        let valid = validate_draft(&draft()).unwrap();
        assert_eq!(valid.name, "Pixel 9");
        assert_eq!(valid.price, 79990.0);
        assert_eq!(valid.quantity, 4);
    }

    #[test]
    fn test_blank_quantity_counts_as_zero() {
        let mut d = draft();
        d.quantity = "   ".to_string();
        assert_eq!(validate_draft(&d).unwrap().quantity, 0);
    }

    #[test]
    fn test_each_rule_reports_its_field() {
        let d = ProductDraft {
            name: " ab ".to_string(),
            brand: " ".to_string(),
            category: String::new(),
            price: "0".to_string(),
            quantity: "1.5".to_string(),
            is_available: false,
        };
        let errors = validate_draft(&d).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(DraftField::Name), Some("At least 3 characters"));
        assert_eq!(errors.get(DraftField::Price), Some("Price must be > 0"));
        assert_eq!(errors.get(DraftField::Category), Some("Enter a category"));
        assert_eq!(errors.get(DraftField::Brand), Some("Enter a brand"));
        assert_eq!(errors.get(DraftField::Quantity), Some("Whole number >= 0"));
    }

    #[test]
    fn test_price_edge_cases() {
        for bad in ["", "-1", "abc", "inf", "NaN"] {
            let mut d = draft();
            d.price = bad.to_string();
            let errors = validate_draft(&d).unwrap_err();
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![DraftField::Price], "{bad}");
        }
        let mut d = draft();
        d.price = "0.5".to_string();
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let mut d = draft();
        d.quantity = "-1".to_string();
        assert!(validate_draft(&d).unwrap_err().get(DraftField::Quantity).is_some());
    }
}
