//! Merge, deduplicate and order generated local parts

use std::collections::BTreeSet;

/// Append the domain to each local part, deduplicate by exact string
/// equality and return the aliases lexicographically sorted.
pub fn assemble<I>(local_parts: I, domain: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let aliases: BTreeSet<String> = local_parts
        .into_iter()
        .map(|local| format!("{}@{}", local, domain))
        .collect();

    aliases.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_domain() {
        let aliases = assemble(vec!["ab".to_string(), "a.b".to_string()], "x.com");
        assert!(aliases.iter().all(|a| a.ends_with("@x.com")));
    }

    #[test]
    fn test_deduplicates() {
        let aliases = assemble(
            vec!["ab".to_string(), "a.b".to_string(), "ab".to_string()],
            "x.com",
        );
        assert_eq!(aliases, vec!["a.b@x.com", "ab@x.com"]);
    }

    #[test]
    fn test_lexicographic_order() {
        let aliases = assemble(
            vec!["b".to_string(), "a.c".to_string(), "a".to_string()],
            "x.com",
        );
        assert_eq!(aliases, vec!["a.c@x.com", "a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_empty_input() {
        let aliases = assemble(Vec::new(), "x.com");
        assert!(aliases.is_empty());
    }
}
