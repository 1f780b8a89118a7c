//! Prefix indexing for tenant-name search.
//!
//! The store can only answer "array contains" queries, so each tenant
//! document carries every left-anchored prefix of its normalized name.
//! A search term, normalized the same way, matches exactly when it is a
//! prefix of some tenant name. That gives starts-with search in a store
//! with no native prefix index.

/// Lowercased, trimmed form used both when indexing and when probing.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Every prefix of the normalized name, shortest first:
/// `"Cat "` becomes `["c", "ca", "cat"]`.
pub fn build_prefixes(name: &str) -> Vec<String> {
    let normalized = normalize(name);
    let mut prefixes = Vec::with_capacity(normalized.chars().count());
    let mut current = String::new();
    for ch in normalized.chars() {
        current.push(ch);
        prefixes.push(current.clone());
    }
    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_before_prefixing() {
        assert_eq!(build_prefixes("Cat "), vec!["c", "ca", "cat"]);
    }

    #[test]
    fn one_prefix_per_char_and_last_is_full_name() {
        for name in ["Fresh Market", "  ตลาดสด  ", "a", "Ab Cd"] {
            let normalized = normalize(name);
            let prefixes = build_prefixes(name);
            assert_eq!(prefixes.len(), normalized.chars().count());
            assert_eq!(prefixes.last().map(String::as_str), Some(normalized.as_str()));
        }
    }

    #[test]
    fn empty_and_whitespace_names_produce_nothing() {
        assert!(build_prefixes("").is_empty());
        assert!(build_prefixes("   ").is_empty());
    }

    #[test]
    fn multibyte_names_split_on_char_boundaries() {
        let prefixes = build_prefixes("ตลาด");
        assert_eq!(prefixes.len(), 4);
        assert_eq!(prefixes[0], "ต");
        assert_eq!(prefixes[3], "ตลาด");
    }
}
