//! Short code generation.
//!
//! Codes are drawn uniformly from a 62-symbol alphanumeric alphabet. They are
//! not derived from the URL and are not checked against existing codes.

use rand::Rng;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 7;

/// Alphabet used for generated codes.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random 7-character alphanumeric short code.
///
/// Uses the thread-local generator, which is seeded from the OS and
/// periodically reseeded.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_charset_has_62_symbols() {
        assert_eq!(CHARSET.len(), 62);
        let unique: HashSet<_> = CHARSET.iter().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 62^7 possibilities; a thousand draws colliding would mean a broken generator.
        assert!(codes.len() >= 999);
    }
}
