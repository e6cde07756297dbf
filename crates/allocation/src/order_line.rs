use serde::{Deserialize, Serialize};

use stocklot_core::{OrderId, Sku, ValueObject};

/// Order line: a requested quantity of one SKU for one customer order.
///
/// Value object: immutable, equal and hashable over all three fields, so two
/// lines with identical values are interchangeable (and deduplicate inside a
/// batch's allocation set).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub sku: Sku,
    /// Requested quantity. Positive by caller precondition; not checked here.
    pub qty: i64,
}

impl OrderLine {
    pub fn new(order_id: impl Into<OrderId>, sku: impl Into<Sku>, qty: i64) -> Self {
        Self {
            order_id: order_id.into(),
            sku: sku.into(),
            qty,
        }
    }
}

impl ValueObject for OrderLine {}
