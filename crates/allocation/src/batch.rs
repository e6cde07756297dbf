use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;

use stocklot_core::{BatchRef, Entity, Sku};

use crate::order_line::OrderLine;

/// Batch: a discrete lot of purchased stock of one SKU.
///
/// `eta` is `None` for stock already sitting in a warehouse (immediately
/// available) and `Some(date)` for an in-transit shipment arriving on that
/// date.
///
/// Entity: equality and hashing use the `reference` alone, so two instances
/// carrying the same reference are the same batch even when the rest of
/// their state has diverged.
#[derive(Debug, Clone)]
pub struct Batch {
    reference: BatchRef,
    sku: Sku,
    purchased_quantity: i64,
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    /// Create a batch with a fixed purchased quantity and no allocations.
    pub fn new(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        purchased_quantity: i64,
        eta: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: reference.into(),
            sku: sku.into(),
            purchased_quantity,
            eta,
            allocations: HashSet::new(),
        }
    }

    pub fn reference(&self) -> &BatchRef {
        &self.reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn purchased_quantity(&self) -> i64 {
        self.purchased_quantity
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    /// Quantity currently reserved by allocated lines.
    ///
    /// Recomputed from the allocation set on every call so it can never go
    /// stale.
    pub fn allocated_quantity(&self) -> i64 {
        self.allocations.iter().map(|line| line.qty).sum()
    }

    /// Quantity still open for allocation.
    pub fn available_quantity(&self) -> i64 {
        self.purchased_quantity - self.allocated_quantity()
    }

    /// Whether `line` could be recorded against this batch: the SKUs match
    /// and enough quantity is available. Pure predicate, no side effect.
    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.sku == line.sku && self.available_quantity() >= line.qty
    }

    /// Whether this exact line is already allocated to this batch.
    pub fn contains(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    /// Record `line` against this batch if it is eligible.
    ///
    /// Silent no-op when [`Batch::can_allocate`] is false, never an error;
    /// callers that need to distinguish the cases probe the predicate first.
    /// Idempotent: a line equal to one already held is not added twice.
    pub fn allocate(&mut self, line: OrderLine) {
        if self.can_allocate(&line) {
            self.allocations.insert(line);
        }
    }

    /// Release `line` from this batch. Silent no-op if it was not allocated.
    pub fn deallocate(&mut self, line: &OrderLine) {
        self.allocations.remove(line);
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Batch {}

impl core::hash::Hash for Batch {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

impl Entity for Batch {
    type Id = BatchRef;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

/// Total order used for allocation priority.
///
/// A batch with no eta (warehouse stock, physically on hand) sorts before
/// any batch with an eta; among in-transit batches the earliest eta sorts
/// first. Equal keys compare `Equal`, so a stable sort preserves input
/// order for ties.
pub fn arrival_order(a: &Batch, b: &Batch) -> Ordering {
    match (a.eta, b.eta) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}
