//! Randomized sampling of separator placements without replacement

use std::collections::BTreeSet;

use rand::Rng;

use crate::address;
use crate::error::{AliasForgeError, Result};
use crate::types::{CanonicalAddress, SampleOutcome};

use super::{variant_space, MaskGenerator};

/// Consecutive duplicate draws tolerated before the sampler stops trusting
/// the coin flips and finishes deterministically.
const STALL_LIMIT: u32 = 64;

/// Sample up to `quantity` random aliases for an address.
pub fn generate_sample(address: &str, quantity: usize) -> Result<SampleOutcome> {
    generate_sample_with(address, quantity, &mut rand::thread_rng())
}

/// Sample with a caller-provided RNG, for reproducible runs.
pub fn generate_sample_with<R: Rng + ?Sized>(
    address: &str,
    quantity: usize,
    rng: &mut R,
) -> Result<SampleOutcome> {
    sample(&address::decompose(address)?, quantity, rng)
}

/// Draw distinct separator placements for a decomposed address until
/// `quantity` aliases exist or the variant space runs out.
///
/// The result always contains the original and fully collapsed forms. When
/// the request exceeds what the username can yield, the target is clamped
/// and a notice reports the achievable maximum.
pub fn sample<R: Rng + ?Sized>(
    address: &CanonicalAddress,
    quantity: usize,
    rng: &mut R,
) -> Result<SampleOutcome> {
    if quantity == 0 {
        return Err(AliasForgeError::invalid_quantity(quantity.to_string()));
    }
    if address.username_len() < 2 {
        return Err(AliasForgeError::username_too_short(
            address.username.clone(),
        ));
    }

    let gaps = address.gap_count();
    let space = variant_space(gaps);

    // Clamp against the full space plus the two seed forms.
    let requested = quantity as u64;
    let (target, notice) = match space {
        Some(space) => {
            let achievable = space + 2;
            if requested > achievable {
                tracing::info!(requested, achievable, "Clamping sample request");
                let notice = format!(
                    "Only {} variations are possible for this username. Generating all of them.",
                    achievable
                );
                (achievable, Some(notice))
            } else {
                (requested, None)
            }
        }
        None => (requested, None),
    };

    tracing::debug!(
        username = %address.username,
        gaps,
        target,
        "Sampling separator placements"
    );

    let chars: Vec<char> = address.username.chars().collect();
    let mut aliases: BTreeSet<String> = BTreeSet::new();
    aliases.insert(address.original());
    aliases.insert(address.collapsed());

    let mut misses = 0u32;
    while (aliases.len() as u64) < target {
        let local = random_local(&chars, address.separator, rng);
        if aliases.insert(format!("{}@{}", local, address.domain)) {
            misses = 0;
            continue;
        }
        misses += 1;
        if misses < STALL_LIMIT {
            continue;
        }
        // The coin flips stopped finding new placements. In the bounded
        // regime the counter sweep finishes the job; past the counting
        // threshold a stall means the space is effectively saturated.
        if space.is_some() {
            tracing::debug!(collected = aliases.len(), "Stalled; sweeping remaining masks");
            sweep_remaining(address, target, &mut aliases);
        } else {
            tracing::warn!(
                collected = aliases.len(),
                target,
                "Sampling stalled on an unbounded variant space; stopping early"
            );
        }
        break;
    }

    Ok(SampleOutcome {
        aliases: aliases.into_iter().collect(),
        notice,
    })
}

/// One candidate local-part: an independent fair coin per insertion gap.
fn random_local<R: Rng + ?Sized>(chars: &[char], separator: char, rng: &mut R) -> String {
    let mut candidate = String::with_capacity(chars.len() * 2);
    candidate.push(chars[0]);
    for &c in &chars[1..] {
        if rng.gen_bool(0.5) {
            candidate.push(separator);
        }
        candidate.push(c);
    }
    candidate
}

/// Deterministically fill the set from the mask counter until the target is
/// met or every placement has been inserted.
fn sweep_remaining(address: &CanonicalAddress, target: u64, aliases: &mut BTreeSet<String>) {
    for local in MaskGenerator::new(address) {
        if aliases.len() as u64 >= target {
            return;
        }
        aliases.insert(format!("{}@{}", local, address.domain));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::generate_all;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_quantity_rejected() {
        assert!(matches!(
            generate_sample("test@example.com", 0),
            Err(AliasForgeError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_too_short_username() {
        assert!(matches!(
            generate_sample("a@x.com", 5),
            Err(AliasForgeError::UsernameTooShort { .. })
        ));
    }

    #[test]
    fn test_seeds_always_present() {
        let mut rng = StdRng::seed_from_u64(7);
        let outcome = generate_sample_with("j.doe@example.com", 4, &mut rng).unwrap();
        assert!(outcome.aliases.contains(&"j.doe@example.com".to_string()));
        assert!(outcome.aliases.contains(&"jdoe@example.com".to_string()));
    }

    #[test]
    fn test_respects_requested_quantity() {
        // 7 gaps leave 128 placements, far above the request
        let mut rng = StdRng::seed_from_u64(42);
        let outcome = generate_sample_with("abcdefgh@x.com", 5, &mut rng).unwrap();
        assert_eq!(outcome.aliases.len(), 5);
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn test_small_quantity_still_returns_both_seeds() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = generate_sample_with("ab.cd@x.com", 1, &mut rng).unwrap();
        assert_eq!(
            outcome.aliases,
            vec!["ab.cd@x.com".to_string(), "abcd@x.com".to_string()]
        );
    }

    #[test]
    fn test_overshoot_clamps_and_terminates() {
        // 2 gaps: 4 placements, clamp target is 6, only 4 distinct aliases
        // exist. Must finish with the exhaustive set instead of spinning.
        let mut rng = StdRng::seed_from_u64(99);
        let outcome = generate_sample_with("abc@x.com", 100, &mut rng).unwrap();
        assert_eq!(outcome.aliases, generate_all("abc@x.com").unwrap());
        let notice = outcome.notice.unwrap();
        assert!(notice.contains("6 variations"));
    }

    #[test]
    fn test_sampling_is_reproducible() {
        let mut first_rng = StdRng::seed_from_u64(1234);
        let mut second_rng = StdRng::seed_from_u64(1234);
        let first = generate_sample_with("sniper@example.com", 8, &mut first_rng).unwrap();
        let second = generate_sample_with("sniper@example.com", 8, &mut second_rng).unwrap();
        assert_eq!(first.aliases, second.aliases);
    }

    #[test]
    fn test_long_username_is_sampleable() {
        // Too long for exhaustive enumeration, fine for sampling
        let mut rng = StdRng::seed_from_u64(3);
        let outcome =
            generate_sample_with("abcdefghijklmnopqrstuvwxyz@x.com", 10, &mut rng).unwrap();
        assert_eq!(outcome.aliases.len(), 10);
        for alias in &outcome.aliases {
            let (local, domain) = alias.split_once('@').unwrap();
            assert_eq!(domain, "x.com");
            let stripped: String = local.chars().filter(|&c| c != '.').collect();
            assert_eq!(stripped, "abcdefghijklmnopqrstuvwxyz");
        }
    }

    #[test]
    fn test_output_is_sorted_and_distinct() {
        let mut rng = StdRng::seed_from_u64(2024);
        let outcome = generate_sample_with("forge@example.com", 9, &mut rng).unwrap();
        let mut sorted = outcome.aliases.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(outcome.aliases, sorted);
    }

    #[test]
    fn test_uncounted_space_never_clamps() {
        // 38 gaps are past the counting threshold; the request passes
        // through unclamped and no notice fires
        let username = "abcdefghijklmnopqrstuvwxyzabcdefghijklm";
        let gaps = username.chars().count() - 1;
        assert_eq!(gaps, 38);
        assert!(variant_space(gaps).is_none());

        let address = format!("{}@x.com", username);
        let mut rng = StdRng::seed_from_u64(6);
        let outcome = generate_sample_with(&address, 20, &mut rng).unwrap();

        assert_eq!(outcome.aliases.len(), 20);
        assert!(outcome.notice.is_none());
        assert!(outcome.aliases.contains(&address));
        for alias in &outcome.aliases {
            let (local, _) = alias.split_once('@').unwrap();
            let stripped: String = local.chars().filter(|&c| c != '.').collect();
            assert_eq!(stripped, username);
        }
    }
}
