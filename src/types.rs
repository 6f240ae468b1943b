//! Core types and structures for alias-forge

use serde::{Deserialize, Serialize};

/// An email address decomposed into its variant-generation parts.
///
/// `username` is the canonical form of the local part: `raw_local` with every
/// occurrence of `separator` removed. Case and domain are preserved exactly
/// as the address was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalAddress {
    /// Local part exactly as it appeared in the input, separators included
    pub raw_local: String,
    /// Canonical username: the local part with every separator stripped
    pub username: String,
    /// Domain part (everything after the `@`)
    pub domain: String,
    /// Separator character the mail provider treats as insignificant
    pub separator: char,
}

impl CanonicalAddress {
    /// The full address exactly as the caller supplied it
    pub fn original(&self) -> String {
        format!("{}@{}", self.raw_local, self.domain)
    }

    /// The fully collapsed address, with no separators at all
    pub fn collapsed(&self) -> String {
        format!("{}@{}", self.username, self.domain)
    }

    /// Canonical username length in characters
    pub fn username_len(&self) -> usize {
        self.username.chars().count()
    }

    /// Number of insertion gaps between consecutive username characters
    pub fn gap_count(&self) -> usize {
        self.username_len().saturating_sub(1)
    }
}

/// Result of a sampling run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleOutcome {
    /// Generated aliases, deduplicated and lexicographically sorted
    pub aliases: Vec<String>,
    /// Informational notice set when the requested quantity was clamped
    /// down to the achievable maximum; never an error
    pub notice: Option<String>,
}
