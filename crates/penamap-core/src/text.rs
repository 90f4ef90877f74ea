// crates/penamap-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Peña` -> `Pena`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use penamap_core::text::fold_key;
///
/// assert_eq!(fold_key("Peña El Botijo"), "pena el botijo");
/// assert_eq!(fold_key("ESTACIÓN"), "estacion");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Splits `s` into folded alphanumeric tokens.
///
/// ```rust
/// use penamap_core::text::tokens;
///
/// assert_eq!(tokens("Bar-Peña (centro)"), vec!["bar", "pena", "centro"]);
/// ```
pub fn tokens(s: &str) -> Vec<String> {
    fold_key(s)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Case-insensitive substring test used by the autocomplete.
///
/// Only case is normalized here, accents are kept: `"pena"` does not match
/// `"Peña"`.
#[inline]
pub fn lower_contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_drop_punctuation_and_empties() {
        assert_eq!(tokens("  Parada  Bus, Centro "), vec!["parada", "bus", "centro"]);
        assert!(tokens("--").is_empty());
    }

    #[test]
    fn lower_contains_ignores_case_but_not_accents() {
        assert!(lower_contains("Bar Pepe", "BAR"));
        assert!(lower_contains("Peña El Botijo", "PEÑA"));
        assert!(!lower_contains("Peña El Botijo", "pena"));
    }
}
