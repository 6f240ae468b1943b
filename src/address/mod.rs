//! Email address decomposition module

pub mod parser;

// Re-export main functionality
pub use parser::AddressParser;

use crate::error::Result;
use crate::types::CanonicalAddress;

/// Decompose an address into canonical username and domain using the
/// default separator.
pub fn decompose(input: &str) -> Result<CanonicalAddress> {
    AddressParser::new().parse(input)
}
