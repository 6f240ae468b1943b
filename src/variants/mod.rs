//! Variant generation module - enumerate or sample separator placements
//!
//! Exhaustive path: every subset of insertion gaps, driven by a mask counter.
//! Sampling path: random placements without replacement up to a requested
//! quantity, with a deterministic fallback that guarantees termination.

mod assembler;
mod exhaustive;
mod generator;
mod sampler;

pub use assembler::assemble;
pub use exhaustive::{enumerate, generate_all};
pub use generator::MaskGenerator;
pub use sampler::{generate_sample, generate_sample_with, sample};

/// Ceiling on the canonical username length for exhaustive generation.
/// The gap count drives a `2^(n-1)` enumeration past this.
pub const MAX_USERNAME_LENGTH: usize = 16;

/// Gap counts above this are treated as an effectively unbounded variant
/// space instead of risking overflow in the capacity estimate.
pub const MAX_COUNTED_GAPS: usize = 30;

/// Number of distinct separator placements for a gap count, or `None` once
/// the gap count exceeds [`MAX_COUNTED_GAPS`].
pub fn variant_space(gap_count: usize) -> Option<u64> {
    if gap_count > MAX_COUNTED_GAPS {
        None
    } else {
        Some(1u64 << gap_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_space() {
        assert_eq!(variant_space(0), Some(1));
        assert_eq!(variant_space(1), Some(2));
        assert_eq!(variant_space(4), Some(16));
        assert_eq!(variant_space(30), Some(1 << 30));
        assert_eq!(variant_space(31), None);
    }
}
