//! Allocation domain service.

use thiserror::Error;
use tracing::debug;

use stocklot_core::{BatchRef, Sku};

use crate::batch::{Batch, arrival_order};
use crate::order_line::OrderLine;

/// No batch can satisfy the requested line.
///
/// The sole failure of the allocation service. Entity-level operations never
/// fail (see [`Batch::allocate`]); only this decision does, and the `Result`
/// keeps that path visible in the signature.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("out of stock for sku {0}")]
pub struct OutOfStock(pub Sku);

/// Allocate `line` to the best eligible batch and return its reference.
///
/// Batches are ranked by [`arrival_order`]: warehouse stock before
/// in-transit shipments, earlier eta before later, input order on ties. The
/// first batch whose [`Batch::can_allocate`] accepts the line receives it
/// and is the only one mutated; the caller's slice is left in its original
/// order.
///
/// Idempotent across repeated calls: if some batch already holds this exact
/// line, its reference is returned and nothing is mutated.
///
/// # Errors
///
/// Returns [`OutOfStock`] with the requested SKU when no batch qualifies
/// (empty slice, all wrong SKU, or all at capacity). No batch is mutated on
/// this path.
pub fn allocate(line: &OrderLine, batches: &mut [Batch]) -> Result<BatchRef, OutOfStock> {
    if let Some(batch) = batches.iter().find(|batch| batch.contains(line)) {
        debug!(
            reference = %batch.reference(),
            sku = %line.sku,
            qty = line.qty,
            "order line already allocated"
        );
        return Ok(batch.reference().clone());
    }

    // Rank over indices so the caller's slice order is never disturbed.
    let mut ranked: Vec<usize> = (0..batches.len()).collect();
    ranked.sort_by(|&i, &j| arrival_order(&batches[i], &batches[j]));

    for idx in ranked {
        if batches[idx].can_allocate(line) {
            batches[idx].allocate(line.clone());
            let reference = batches[idx].reference().clone();
            debug!(
                %reference,
                sku = %line.sku,
                qty = line.qty,
                "order line allocated"
            );
            return Ok(reference);
        }
    }

    debug!(sku = %line.sku, qty = line.qty, "no batch can satisfy order line");
    Err(OutOfStock(line.sku.clone()))
}
