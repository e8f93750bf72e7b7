//! Token request signing.

use md5::{Digest, Md5};

/// Compute the request signature for the token endpoint.
///
/// The service expects the lowercase hex MD5 digest of the literal
/// concatenation `appId + timestamp + appSecret`, with the same timestamp
/// repeated in the request payload. MD5 is fixed by the service contract;
/// this is wire compatibility, not a security property.
pub fn sign(app_id: &str, timestamp_ms: i64, app_secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(app_id.as_bytes());
    hasher.update(timestamp_ms.to_string().as_bytes());
    hasher.update(app_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_pins_concatenation_order() {
        // md5("X1000Y")
        assert_eq!(sign("X", 1000, "Y"), "2381f24ac6eb98a1cf1a0028d37fafe9");
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        // md5("demo4200demo-secret")
        let s = sign("demo", 4200, "demo-secret");
        assert_eq!(s, "3b9cc1e97ddf7e286dc280786ea60331");
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
