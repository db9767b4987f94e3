use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use std::fmt;

// ============================================================================
// Catalog Value Objects
// ============================================================================

/// Catalog item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A sellable menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Decimal,
}

impl CatalogItem {
    pub fn new(id: u32, name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_item_creation() {
        let item = CatalogItem::new(7, "GIN-TONIC", dec!(4.00));

        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.id.value(), 7);
        assert_eq!(item.name, "GIN-TONIC");
        assert_eq!(item.unit_price, dec!(4));
    }

    #[test]
    fn test_catalog_item_json_shape() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id": 3, "name": "VINO 0,1L", "price": "2.00"}"#).unwrap();
        assert_eq!(item.id, ItemId(3));
        assert_eq!(item.unit_price, dec!(2.00));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "VINO 0,1L");
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(12).to_string(), "12");
        assert_eq!(format!("{:>3}", ItemId(7)), "  7");
    }
}
