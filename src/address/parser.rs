//! Email address parsing and canonicalization

use regex::Regex;

use crate::error::{AliasForgeError, Result};
use crate::types::CanonicalAddress;
use crate::DEFAULT_SEPARATOR;

/// Minimal email shape: non-whitespace local part, `@`, non-whitespace
/// domain containing a dot.
const ADDRESS_SHAPE: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Email address parser
pub struct AddressParser {
    separator: char,
}

impl AddressParser {
    /// Create a parser using the default separator
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Use a different separator character
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Separator this parser strips and the generators re-insert
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Parse an address into its canonical parts.
    ///
    /// Surrounding whitespace is trimmed; case and domain are preserved
    /// exactly as typed. Fails with `InvalidFormat` when the input does not
    /// match the minimal email shape, or when the local part collapses to
    /// nothing once separators are stripped.
    pub fn parse(&self, input: &str) -> Result<CanonicalAddress> {
        let address = input.trim();

        let shape =
            Regex::new(ADDRESS_SHAPE).map_err(|e| AliasForgeError::internal(e.to_string()))?;
        if !shape.is_match(address) {
            return Err(AliasForgeError::invalid_format(address));
        }

        // The shape regex guarantees exactly one '@'
        let (raw_local, domain) = address
            .split_once('@')
            .ok_or_else(|| AliasForgeError::invalid_format(address))?;

        let username: String = raw_local.chars().filter(|c| *c != self.separator).collect();
        if username.is_empty() {
            return Err(AliasForgeError::invalid_format(address));
        }

        Ok(CanonicalAddress {
            raw_local: raw_local.to_string(),
            username,
            domain: domain.to_string(),
            separator: self.separator,
        })
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new()
    }
}
