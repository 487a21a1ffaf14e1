/// Derives an entity id from its display name: lowercase, words joined by `-`.
///
/// Hostel and event ids are produced this way, so two names that only differ
/// in case or spacing map to the same id.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Satluj"), "satluj");
        assert_eq!(slugify("Relay Race"), "relay-race");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("  Brahmaputra   Boys\tHostel "), "brahmaputra-boys-hostel");
    }

    #[test]
    fn test_slugify_case_insensitive_collision() {
        assert_eq!(slugify("BEAS"), slugify("beas"));
    }

    #[test]
    fn test_slugify_blank() {
        assert_eq!(slugify("   "), "");
    }
}
