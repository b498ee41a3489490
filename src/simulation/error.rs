//! Domain errors raised by the shop simulation

use thiserror::Error;

use super::types::PartKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// The catalog has no entry for this kind, so no price can be quoted
    #[error("part kind {0} is not in the warehouse catalog")]
    NotFound(PartKind),

    /// A random draw was requested over an empty range
    #[error("invalid random range [{min}, {max})")]
    InvalidRange { min: u32, max: u32 },
}
