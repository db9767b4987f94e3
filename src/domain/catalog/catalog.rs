use std::collections::HashSet;
use std::path::Path;
use anyhow::{Context, Result};
use rust_decimal_macros::dec;

use super::errors::CatalogError;
use super::value_objects::{CatalogItem, ItemId};

// ============================================================================
// Catalog - read-only list of sellable items
// ============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, zero or duplicate ids,
    /// blank names and negative prices.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.value() == 0 {
                return Err(CatalogError::InvalidId(item.id));
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(item.id));
            }
            if item.unit_price.is_sign_negative() && !item.unit_price.is_zero() {
                return Err(CatalogError::NegativePrice {
                    id: item.id,
                    price: item.unit_price,
                });
            }
        }

        Ok(Self { items })
    }

    /// The bar menu the terminal ships with
    pub fn default_menu() -> Self {
        Self {
            items: vec![
                CatalogItem::new(1, "PIVO 0,3L", dec!(3.00)),
                CatalogItem::new(2, "ŠPRICAR 0,2L", dec!(2.50)),
                CatalogItem::new(3, "VINO 0,1L", dec!(2.00)),
                CatalogItem::new(4, "VINO 1L", dec!(10.00)),
                CatalogItem::new(5, "RADENSKA 1L", dec!(5.00)),
                CatalogItem::new(6, "JAGERMAISTER 0,03L", dec!(3.00)),
                CatalogItem::new(7, "GIN-TONIC", dec!(4.00)),
                CatalogItem::new(8, "VODA NAVADNA 0,5L", dec!(2.50)),
                CatalogItem::new(9, "VODA Z OKUSOM 0,5L", dec!(2.50)),
                CatalogItem::new(10, "COCA COLA 0,5L", dec!(2.50)),
                CatalogItem::new(11, "LEDENI ČAJ BRESKEV 0,5L", dec!(2.50)),
                CatalogItem::new(12, "BOROVNIČKE 0,03L", dec!(3.00)),
            ],
        }
    }

    /// Parse a JSON array of `{ "id", "name", "price" }` records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

        let catalog = Self::from_json(&json)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            items = catalog.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items; a validated catalog always has at least one
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_default_menu_is_valid() {
        let menu = Catalog::default_menu();
        assert_eq!(menu.len(), 12);

        // Round-trips through validation
        let validated = Catalog::new(menu.items().to_vec()).unwrap();
        assert_eq!(validated.len(), 12);
    }

    #[test]
    fn test_lookup_by_id() {
        let menu = Catalog::default_menu();

        let item = menu.get(ItemId(4)).unwrap();
        assert_eq!(item.name, "VINO 1L");
        assert_eq!(item.unit_price, dec!(10));

        assert!(menu.get(ItemId(99)).is_none());
    }

    #[test]
    fn test_items_keep_configured_order() {
        let menu = Catalog::default_menu();
        let ids: Vec<u32> = menu.items().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::new(vec![]);
        assert!(matches!(result.unwrap_err(), CatalogError::Empty));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            CatalogItem::new(1, "A", dec!(1)),
            CatalogItem::new(1, "B", dec!(2)),
        ]);
        assert!(matches!(result.unwrap_err(), CatalogError::DuplicateId(ItemId(1))));
    }

    #[test]
    fn test_zero_id_rejected() {
        let result = Catalog::new(vec![CatalogItem::new(0, "A", dec!(1))]);
        assert!(matches!(result.unwrap_err(), CatalogError::InvalidId(ItemId(0))));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Catalog::new(vec![CatalogItem::new(2, "  ", dec!(1))]);
        assert!(matches!(result.unwrap_err(), CatalogError::EmptyName(ItemId(2))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::new(vec![CatalogItem::new(3, "Refund", dec!(-1.50))]);
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::NegativePrice { id: ItemId(3), .. }
        ));
    }

    #[test]
    fn test_free_item_allowed() {
        let catalog = Catalog::new(vec![CatalogItem::new(1, "Water jug", Decimal::ZERO)]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_json_accepts_string_and_number_prices() {
        let json = r#"[
            {"id": 1, "name": "Espresso", "price": "1.40"},
            {"id": 2, "name": "Cappuccino", "price": 2}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ItemId(1)).unwrap().unit_price, dec!(1.40));
        assert_eq!(catalog.get(ItemId(2)).unwrap().unit_price, dec!(2));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = Catalog::from_json("{ not json");
        assert!(matches!(result.unwrap_err(), CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_json_still_validates() {
        let json = r#"[{"id": 5, "name": "A", "price": "1"}, {"id": 5, "name": "B", "price": "1"}]"#;
        assert!(matches!(
            Catalog::from_json(json).unwrap_err(),
            CatalogError::DuplicateId(ItemId(5))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("/definitely/not/here/catalog.json"));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to read catalog file"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("pos-ledger-catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"[{"id": 1, "name": "Tea", "price": "1.80"}]"#).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.get(ItemId(1)).unwrap().name, "Tea");

        std::fs::remove_file(&path).unwrap();
    }
}
