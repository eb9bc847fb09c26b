//! Products the catalog starts with.

use crate::model::{ProductCreate, ProductDraft};
use chrono::{TimeZone, Utc};

const SEED: [(&str, &str, &str, u32, u32, (i32, u32, u32)); 6] = [
    ("iPhone 15 Pro", "Apple", "Smartphones", 129_990, 5, (2025, 8, 15)),
    ("Galaxy S24", "Samsung", "Smartphones", 99_990, 12, (2025, 6, 4)),
    ("MacBook Air M3", "Apple", "Laptops", 149_990, 3, (2025, 7, 20)),
    ("Dell XPS 13", "Dell", "Laptops", 139_990, 7, (2025, 5, 10)),
    ("Sony WH-1000XM5", "Sony", "Audio", 39_990, 20, (2025, 4, 1)),
    ("Apple Watch Series 10", "Apple", "Gadgets", 49_990, 10, (2025, 9, 1)),
];

/// Seed records in list order (first is shown first).
pub fn seed_products() -> Vec<ProductCreate> {
    SEED.iter()
        .map(|&(name, brand, category, price, quantity, (y, m, d))| ProductCreate {
            draft: ProductDraft {
                name: name.to_string(),
                brand: brand.to_string(),
                category: category.to_string(),
                price: price.to_string(),
                quantity: quantity.to_string(),
                is_available: true,
            },
            created: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single(),
        })
        .collect()
}
