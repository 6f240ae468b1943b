//! Mask-driven local-part generator

use crate::types::CanonicalAddress;

/// Generator for separator placements over a canonical username.
///
/// The `n-1` insertion gaps are the bits of a counter: bit `j` of a mask
/// places the separator between characters `j` and `j+1`. Counting through
/// `[0, 2^(n-1))` visits every subset of gaps exactly once, lazily and in a
/// restartable order.
pub struct MaskGenerator {
    chars: Vec<char>,
    separator: char,
    current_index: u64,
    total: u64,
}

impl MaskGenerator {
    /// Create a generator over all placements for an address
    pub fn new(address: &CanonicalAddress) -> Self {
        let chars: Vec<char> = address.username.chars().collect();
        let gaps = chars.len().saturating_sub(1) as u32;
        // Mask space saturates past 63 gaps; exhaustive callers stay far below
        let total = 1u64.checked_shl(gaps).unwrap_or(u64::MAX);
        Self {
            chars,
            separator: address.separator,
            current_index: 0,
            total,
        }
    }

    /// Total number of placements
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Current progress index
    pub fn current_index(&self) -> u64 {
        self.current_index
    }

    /// Set current index (for resume)
    pub fn set_index(&mut self, index: u64) {
        self.current_index = index.min(self.total);
    }

    /// Build the local part for a specific mask
    pub fn variant_at(&self, mask: u64) -> Option<String> {
        if mask >= self.total || self.chars.is_empty() {
            return None;
        }

        let mut local = String::with_capacity(self.chars.len() * 2);
        local.push(self.chars[0]);
        for (gap, &c) in self.chars[1..].iter().enumerate() {
            if (mask >> gap) & 1 == 1 {
                local.push(self.separator);
            }
            local.push(c);
        }

        Some(local)
    }

    /// Generate the next batch of local parts
    pub fn next_batch(&mut self, count: usize) -> Vec<String> {
        let mut batch = Vec::with_capacity(count);

        for _ in 0..count {
            if let Some(local) = self.variant_at(self.current_index) {
                batch.push(local);
                self.current_index += 1;
            } else {
                break;
            }
        }

        batch
    }

    /// Check if the generator is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.total
    }

    /// Get progress percentage
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.current_index as f64 / self.total as f64) * 100.0
        }
    }

    /// Remaining count
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.current_index)
    }
}

impl Iterator for MaskGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let local = self.variant_at(self.current_index)?;
        self.current_index += 1;
        Some(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(username: &str) -> CanonicalAddress {
        CanonicalAddress {
            raw_local: username.to_string(),
            username: username.to_string(),
            domain: "x.com".to_string(),
            separator: '.',
        }
    }

    #[test]
    fn test_generator_total() {
        let gen = MaskGenerator::new(&address("abcde"));
        assert_eq!(gen.total(), 16); // 2^4
    }

    #[test]
    fn test_single_character_total() {
        let gen = MaskGenerator::new(&address("a"));
        assert_eq!(gen.total(), 1);
        assert_eq!(gen.variant_at(0), Some("a".to_string()));
        assert_eq!(gen.variant_at(1), None);
    }

    #[test]
    fn test_variant_at() {
        let gen = MaskGenerator::new(&address("abcde"));
        assert_eq!(gen.variant_at(0), Some("abcde".to_string()));
        assert_eq!(gen.variant_at(1), Some("a.bcde".to_string()));
        assert_eq!(gen.variant_at(2), Some("ab.cde".to_string()));
        assert_eq!(gen.variant_at(3), Some("a.b.cde".to_string()));
        assert_eq!(gen.variant_at(15), Some("a.b.c.d.e".to_string()));
        assert_eq!(gen.variant_at(16), None);
    }

    #[test]
    fn test_custom_separator() {
        let mut target = address("ab");
        target.separator = '-';
        let gen = MaskGenerator::new(&target);
        assert_eq!(gen.variant_at(1), Some("a-b".to_string()));
    }

    #[test]
    fn test_generator_iterator() {
        let mut gen = MaskGenerator::new(&address("abc"));
        assert_eq!(gen.next(), Some("abc".to_string()));
        assert_eq!(gen.next(), Some("a.bc".to_string()));
        assert_eq!(gen.next(), Some("ab.c".to_string()));
        assert_eq!(gen.next(), Some("a.b.c".to_string()));
        assert_eq!(gen.next(), None);
    }

    #[test]
    fn test_next_batch() {
        let mut gen = MaskGenerator::new(&address("abcd"));
        let batch = gen.next_batch(3);
        assert_eq!(batch, vec!["abcd", "a.bcd", "ab.cd"]);
        assert_eq!(gen.current_index(), 3);
        assert_eq!(gen.remaining(), 5);
    }

    #[test]
    fn test_resume() {
        let mut gen = MaskGenerator::new(&address("abcd"));
        gen.set_index(5);
        assert_eq!(gen.current_index(), 5);
        assert_eq!(gen.next(), Some("a.bc.d".to_string())); // mask 0b101
        assert!(!gen.is_exhausted());

        gen.set_index(100);
        assert!(gen.is_exhausted());
        assert_eq!(gen.current_index(), 8);
    }

    #[test]
    fn test_progress_percent() {
        let mut gen = MaskGenerator::new(&address("abc"));
        assert_eq!(gen.progress_percent(), 0.0);
        gen.set_index(2);
        assert_eq!(gen.progress_percent(), 50.0);
        gen.set_index(4);
        assert_eq!(gen.progress_percent(), 100.0);
    }

    #[test]
    fn test_all_variants_distinct() {
        let gen = MaskGenerator::new(&address("abcdef"));
        let all: Vec<String> = gen.collect();
        assert_eq!(all.len(), 32);
        let unique: std::collections::HashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), 32);
    }
}
