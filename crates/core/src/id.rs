//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers here are caller-supplied codes (not generated), so each
//! newtype wraps the string it was given verbatim. `FromStr` is the
//! validating constructor: it refuses blank input.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Stock-keeping-unit code identifying a distinct product type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Identifier of the customer order an order line originates from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Unique reference of a stock batch.
///
/// The reference encodes provenance (warehouse stock vs. in-transit
/// shipment) in a scheme owned by the caller; this core treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchRef(String);

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw code without validation.
            ///
            /// Prefer `FromStr` at trust boundaries; this constructor is for
            /// codes already known to be well-formed.
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!(
                        "{}: must not be blank",
                        $name
                    )));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_code_newtype!(Sku, "Sku");
impl_code_newtype!(OrderId, "OrderId");
impl_code_newtype!(BatchRef, "BatchRef");
