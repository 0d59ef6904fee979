use chrono::NaiveDate;

use larder_core::ItemId;

use crate::item::InventoryItem;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// The catalog a fresh process starts with.
///
/// Also used as the fixture catalog across the test suite, so stock levels
/// here are load-bearing for test expectations.
pub fn starter_catalog() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: ItemId::new(),
            name: "Basmati Rice".to_string(),
            current_stock: 55.0,
            min_stock: 50.0,
            cost_per_unit: 2.5,
            unit: "kg".to_string(),
            category: "Grains".to_string(),
            supplier: "Global Foods Inc".to_string(),
            last_restocked: date(2024, 12, 1),
            expiry_date: Some(date(2025, 12, 1)),
            description: Some("Premium long-grain basmati rice".to_string()),
            location: "Dry Storage A1".to_string(),
        },
        InventoryItem {
            id: ItemId::new(),
            name: "Bacon Raw".to_string(),
            current_stock: 25.0,
            min_stock: 20.0,
            cost_per_unit: 5.0,
            unit: "kg".to_string(),
            category: "Meat".to_string(),
            supplier: "Farm Fresh Poultry".to_string(),
            last_restocked: date(2024, 12, 5),
            expiry_date: Some(date(2024, 12, 20)),
            description: Some("Raw smoked bacon slabs".to_string()),
            location: "Freezer B2".to_string(),
        },
        InventoryItem {
            id: ItemId::new(),
            name: "Potatoes".to_string(),
            current_stock: 70.0,
            min_stock: 80.0,
            cost_per_unit: 1.2,
            unit: "kg".to_string(),
            category: "Vegetables".to_string(),
            supplier: "Green Valley Produce".to_string(),
            last_restocked: date(2024, 12, 10),
            expiry_date: Some(date(2024, 12, 18)),
            description: Some("Fresh washed potatoes".to_string()),
            location: "Cold Storage C3".to_string(),
        },
        InventoryItem {
            id: ItemId::new(),
            name: "Cheddar Cheese".to_string(),
            current_stock: 15.0,
            min_stock: 20.0,
            cost_per_unit: 4.5,
            unit: "kg".to_string(),
            category: "Dairy".to_string(),
            supplier: "Dairy Delights".to_string(),
            last_restocked: date(2024, 12, 3),
            expiry_date: Some(date(2025, 2, 1)),
            description: Some("Aged cheddar cheese".to_string()),
            location: "Cold Storage C1".to_string(),
        },
        InventoryItem {
            id: ItemId::new(),
            name: "Olive Oil".to_string(),
            current_stock: 30.0,
            min_stock: 20.0,
            cost_per_unit: 10.0,
            unit: "liters".to_string(),
            category: "Oils".to_string(),
            supplier: "Mediterranean Essentials".to_string(),
            last_restocked: date(2024, 12, 7),
            expiry_date: Some(date(2025, 6, 30)),
            description: Some("Extra virgin olive oil".to_string()),
            location: "Dry Storage A2".to_string(),
        },
        InventoryItem {
            id: ItemId::new(),
            name: "All-Purpose Flour".to_string(),
            current_stock: 50.0,
            min_stock: 40.0,
            cost_per_unit: 1.0,
            unit: "kg".to_string(),
            category: "Grains".to_string(),
            supplier: "Baker's Choice".to_string(),
            last_restocked: date(2024, 12, 4),
            expiry_date: Some(date(2025, 12, 4)),
            description: Some("High-quality all-purpose flour".to_string()),
            location: "Dry Storage A3".to_string(),
        },
        InventoryItem {
            id: ItemId::new(),
            name: "Salmon Fillet".to_string(),
            current_stock: 10.0,
            min_stock: 15.0,
            cost_per_unit: 12.0,
            unit: "kg".to_string(),
            category: "Seafood".to_string(),
            supplier: "Ocean Harvest".to_string(),
            last_restocked: date(2024, 12, 8),
            expiry_date: Some(date(2024, 12, 15)),
            description: Some("Freshly caught salmon fillet".to_string()),
            location: "Freezer B1".to_string(),
        },
    ]
}
