/// Case-insensitive substring match of `term` against any of `fields`.
///
/// An empty term matches everything.
pub fn matches_any(term: &str, fields: &[&str]) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_matches() {
        assert!(matches_any("", &["anything"]));
        assert!(matches_any("", &[]));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches_any("ROBO", &["John", "Robo a mano armada"]));
        assert!(matches_any("jane", &["Jane", "Smith"]));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_any("xyz", &["John", "Doe"]));
    }

    #[test]
    fn test_non_ascii() {
        assert!(matches_any("poción", &["Poción de XP"]));
        assert!(matches_any("RECIÉN", &["Recién llegado"]));
    }
}
