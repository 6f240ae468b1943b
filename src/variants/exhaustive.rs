//! Exhaustive enumeration of separator placements

use crate::address;
use crate::error::{AliasForgeError, Result};
use crate::types::CanonicalAddress;

use super::{assemble, MaskGenerator, MAX_USERNAME_LENGTH};

/// Generate every alias for an address, using the default separator.
pub fn generate_all(address: &str) -> Result<Vec<String>> {
    enumerate(&address::decompose(address)?)
}

/// Enumerate every separator placement for a decomposed address.
///
/// The result always contains the original and fully collapsed forms, which
/// covers originals whose separator scheme no counter mask reproduces (for
/// example doubled separators).
pub fn enumerate(address: &CanonicalAddress) -> Result<Vec<String>> {
    let n = address.username_len();
    if n < 2 {
        return Err(AliasForgeError::username_too_short(
            address.username.clone(),
        ));
    }
    if n > MAX_USERNAME_LENGTH {
        return Err(AliasForgeError::username_too_long(
            address.username.clone(),
            MAX_USERNAME_LENGTH,
        ));
    }

    let generator = MaskGenerator::new(address);
    tracing::debug!(
        username = %address.username,
        gaps = n - 1,
        total = generator.total(),
        "Enumerating separator placements"
    );

    let seeds = [address.raw_local.clone(), address.username.clone()];
    Ok(assemble(generator.chain(seeds), &address.domain))
}
