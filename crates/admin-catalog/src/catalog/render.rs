//! Text rendering of catalog products.

use crate::model::Product;
use std::fmt::Display;

/// A product as shown in the catalog list:
///
/// ```text
/// iPhone 15 Pro · Apple
/// Smartphones | 129 990 ₽
/// Quantity: 5 | Available: yes | Added: 15.08.2025
/// ```
pub struct ProductCard<'a>(pub &'a Product);

impl Display for ProductCard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.0;
        writeln!(f, "{} · {}", p.name, p.brand)?;
        writeln!(f, "{} | {}", p.category, format_price(p.price))?;
        write!(
            f,
            "Quantity: {} | Available: {} | Added: {}",
            p.quantity,
            if p.is_available { "yes" } else { "no" },
            p.created.format("%d.%m.%Y")
        )
    }
}

/// Price with space-grouped thousands, a decimal comma (at most three
/// decimals, trailing zeros dropped) and the ruble sign.
pub fn format_price(price: f64) -> String {
    let text = format!("{:.3}", price.abs());
    let (int_part, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut out = String::new();
    if price < 0.0 {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(digit);
    }
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out.push_str(" ₽");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(129_990.0), "129 990 ₽");
        assert_eq!(format_price(990.0), "990 ₽");
        assert_eq!(format_price(1_000_000.0), "1 000 000 ₽");
        assert_eq!(format_price(49.5), "49,5 ₽");
        assert_eq!(format_price(0.1234), "0,123 ₽");
    }

    #[test]
    fn test_card() {
        let product = Product {
            id: ProductId::new(),
            name: "Galaxy S24".to_string(),
            brand: "Samsung".to_string(),
            category: "Smartphones".to_string(),
            price: 99_990.0,
            quantity: 12,
            is_available: false,
            created: Utc.with_ymd_and_hms(2025, 6, 4, 0, 0, 0).unwrap(),
        };
        assert_eq!(
            ProductCard(&product).to_string(),
            "Galaxy S24 · Samsung\n\
             Smartphones | 99 990 ₽\n\
             Quantity: 12 | Available: no | Added: 04.06.2025"
        );
    }
}
