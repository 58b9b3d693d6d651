use rand::{Rng, RngCore};

use crate::errors::ContentError;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Expand a mask: `#` becomes a digit, `?` a lowercase letter, `*` either.
/// Any other character is copied as-is.
pub fn expand_pattern(pattern: &str, rng: &mut dyn RngCore) -> Result<String, ContentError> {
    if pattern.is_empty() {
        return Err(ContentError::InvalidPattern(
            "pattern must not be empty".to_string(),
        ));
    }

    let mut value = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        match ch {
            '#' => value.push(char::from(b'0' + rng.random_range(0..10_u8))),
            '?' => value.push(char::from(LETTERS[rng.random_range(0..LETTERS.len())])),
            '*' => value.push(char::from(
                ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())],
            )),
            other => value.push(other),
        }
    }
    Ok(value)
}
