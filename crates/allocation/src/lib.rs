//! Batch allocation domain module.
//!
//! Decides which physical batch of stock satisfies a customer order line,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Callers load [`Batch`] and [`OrderLine`] data, invoke
//! [`allocate`], and persist the mutated batch themselves.

pub mod allocate;
pub mod batch;
pub mod order_line;

pub use allocate::{OutOfStock, allocate};
pub use batch::{Batch, arrival_order};
pub use order_line::OrderLine;
