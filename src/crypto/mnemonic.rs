use crate::domain::{DomainError, DomainResult};
use bip39::{Language, Mnemonic};
use secrecy::SecretString;

/// Mnemonic lengths accepted for generated wallets
pub const SUPPORTED_WORD_COUNTS: [usize; 2] = [12, 24];

/// Generate a new random BIP39 mnemonic phrase (12 or 24 words)
pub fn generate_mnemonic(word_count: usize) -> DomainResult<SecretString> {
    if !SUPPORTED_WORD_COUNTS.contains(&word_count) {
        return Err(DomainError::Crypto(format!(
            "Unsupported mnemonic length: {} (expected 12 or 24)",
            word_count
        )));
    }

    let mnemonic = Mnemonic::generate(word_count)
        .map_err(|e| DomainError::Crypto(format!("Failed to generate mnemonic: {}", e)))?;
    Ok(SecretString::new(mnemonic.to_string()))
}

/// Check a stored word list before deriving from it: 12 or 24 English BIP-39 words
/// with a valid checksum. Returns the normalized phrase.
pub fn validate_mnemonic_words<S: AsRef<str>>(words: &[S]) -> DomainResult<String> {
    if !SUPPORTED_WORD_COUNTS.contains(&words.len()) {
        return Err(DomainError::Encoding(format!(
            "mnemonic has {} words (expected 12 or 24)",
            words.len()
        )));
    }

    let joined: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    let phrase = normalize_mnemonic(&joined.join(" "));
    Mnemonic::parse_in(Language::English, &phrase)
        .map_err(|e| DomainError::Encoding(format!("Invalid mnemonic: {}", e)))?;
    Ok(phrase)
}

/// Normalize a mnemonic phrase (trim whitespace, lowercase, etc.)
pub fn normalize_mnemonic(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    const TEST_MNEMONIC: &str =
        "test test test test test test test test test test test junk";

    #[test]
    fn test_generate_mnemonic() {
        for count in SUPPORTED_WORD_COUNTS {
            let mnemonic = generate_mnemonic(count).unwrap();
            let phrase = mnemonic.expose_secret();

            let words: Vec<&str> = phrase.split_whitespace().collect();
            assert_eq!(words.len(), count);
            assert!(validate_mnemonic_words(&words).is_ok());
        }
    }

    #[test]
    fn test_generate_rejects_other_lengths() {
        assert!(generate_mnemonic(15).is_err());
        assert!(generate_mnemonic(0).is_err());
    }

    #[test]
    fn test_validate_mnemonic_words() {
        let words: Vec<&str> = TEST_MNEMONIC.split(' ').collect();
        assert_eq!(validate_mnemonic_words(&words).unwrap(), TEST_MNEMONIC);

        let shouting: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
        assert_eq!(validate_mnemonic_words(&shouting).unwrap(), TEST_MNEMONIC);

        // valid words, wrong length
        assert!(validate_mnemonic_words(&words[..11]).is_err());

        // right length, bad checksum
        let bad = ["abandon"; 12];
        assert!(matches!(
            validate_mnemonic_words(&bad),
            Err(DomainError::Encoding(_))
        ));

        let empty: [&str; 0] = [];
        assert!(validate_mnemonic_words(&empty).is_err());
    }

    #[test]
    fn test_normalize_mnemonic() {
        let messy = "  Test   TEST  test\njunk  ";
        assert_eq!(normalize_mnemonic(messy), "test test test junk");
    }
}
