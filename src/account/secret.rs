//! Secret key material with redacted formatting.

/// Hex-encoded secret key for one account.
///
/// Wraps the raw string so it cannot leak through `Debug` or `Display`;
/// the only formatting path is [`SecretKey::masked`].
#[derive(Clone)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw key material. Only the signing call site should use this.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Masked preview for logs: first 6 and last 4 characters.
    ///
    /// Never fails, whatever the input: loaders feed this arbitrary
    /// file lines, so the preview counts characters rather than bytes.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return "***".to_string();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }

    /// Check the syntactic shape: 64 hex characters, optional `0x` prefix.
    pub fn has_valid_format(&self) -> bool {
        let hex = self.0.strip_prefix("0x").unwrap_or(&self.0);
        hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey({})", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_masked_preview() {
        let key = SecretKey::new(TEST_KEY);
        assert_eq!(key.masked(), "ac0974...ff80");
    }

    #[test]
    fn test_masked_short_input() {
        let key = SecretKey::new("short");
        assert_eq!(key.masked(), "***");
    }

    #[test]
    fn test_masked_multibyte_input() {
        // A stray non-ASCII line must degrade to a preview, not a panic.
        assert_eq!(SecretKey::new("a€€€€").masked(), "***");
        let key = SecretKey::new("€€€€€€0123456789abcdef€€€€");
        assert_eq!(key.masked(), "€€€€€€...€€€€");
    }

    #[test]
    fn test_debug_redacts() {
        let key = SecretKey::new(TEST_KEY);
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains(TEST_KEY));
        assert!(rendered.contains("ac0974"));
    }

    #[test]
    fn test_valid_format() {
        assert!(SecretKey::new(TEST_KEY).has_valid_format());
        assert!(SecretKey::new(format!("0x{}", TEST_KEY)).has_valid_format());
    }

    #[test]
    fn test_invalid_format() {
        // Too short
        assert!(!SecretKey::new("abc123").has_valid_format());
        // Non-hex characters
        assert!(!SecretKey::new("zz".repeat(32)).has_valid_format());
        // 63 characters
        assert!(!SecretKey::new(&TEST_KEY[..63]).has_valid_format());
        // 65 characters
        assert!(!SecretKey::new(format!("{}0", TEST_KEY)).has_valid_format());
    }
}
