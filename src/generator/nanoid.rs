//! Nanoid-format identifiers.

/// Generates a 21-character URL-safe nanoid.
pub fn generate() -> String {
    ::nanoid::nanoid!()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_length() {
        assert_eq!(generate().len(), 21);
    }

    #[test]
    fn test_url_safe_alphabet() {
        for _ in 0..50 {
            assert!(
                generate()
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            );
        }
    }

    #[test]
    fn test_ids_differ() {
        assert_ne!(generate(), generate());
    }
}
