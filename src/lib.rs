//! Alias Forge - combinatorial email alias generation
//!
//! A simple CLI tool and library for generating every dot-trick variant of an
//! email address, or a random sample of them, for providers that ignore
//! separators in the local part.

pub mod address;
pub mod error;
pub mod export;
pub mod types;
pub mod variants;

// Re-export commonly used types
pub use error::{AliasForgeError, Result};
pub use types::{CanonicalAddress, SampleOutcome};

// Re-export main functionality
pub use address::{decompose, AddressParser};
pub use export::{write_report, AliasReport, ExportFormat};
pub use variants::{
    generate_all, generate_sample, generate_sample_with, variant_space, MaskGenerator,
    MAX_COUNTED_GAPS, MAX_USERNAME_LENGTH,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator character assumed insignificant by the mail provider
pub const DEFAULT_SEPARATOR: char = '.';
