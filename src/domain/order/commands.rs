use crate::domain::catalog::ItemId;

// ============================================================================
// Ledger Commands - Represent operator intent
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    /// One more of a catalog item
    AddItem {
        item_id: ItemId,
    },
    /// One fewer of a catalog item; nothing happens if it is not on the order
    RemoveItem {
        item_id: ItemId,
    },
    /// Raw text typed into the cash field
    RecordPayment {
        raw: String,
    },
    CompleteOrder,
}

impl LedgerCommand {
    pub fn add(item_id: ItemId) -> Self {
        Self::AddItem { item_id }
    }

    pub fn remove(item_id: ItemId) -> Self {
        Self::RemoveItem { item_id }
    }

    pub fn pay(raw: impl Into<String>) -> Self {
        Self::RecordPayment { raw: raw.into() }
    }
}
