use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;

/// 12 bytes of OS entropy, comfortably above the 8-byte floor for an
/// unguessable public link.
const TOKEN_BYTES: usize = 12;

/// Opaque token embedded in public share URLs. URL-safe alphabet, no
/// padding, so it drops into a path segment untouched.
pub fn generate_share_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_url_safe_and_unpadded() {
        let token = generate_share_token();
        assert_eq!(token.len(), 16);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn tokens_do_not_repeat() {
        let a = generate_share_token();
        let b = generate_share_token();
        assert_ne!(a, b);
    }
}
