//! Structured receipt data extracted from an image.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    /// Name of the purchased item.
    pub name: String,
    /// Cost of the item.
    pub cost: Decimal,
}

/// A full receipt with items and tax information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Items purchased.
    pub items: Vec<ReceiptItem>,
    /// Tax amount.
    pub tax: Decimal,
    /// Total amount including tax, when the model could read it.
    pub total: Option<Decimal>,
}

impl ReceiptData {
    /// Sum of all item costs, excluding tax.
    #[must_use]
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(|item| item.cost).sum()
    }

    /// The receipt total: the printed total when extracted, otherwise
    /// items plus tax.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.total.unwrap_or_else(|| self.items_total() + self.tax)
    }
}
