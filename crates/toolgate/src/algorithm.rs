//! Signing algorithm and key material
use crate::error::{Error, Result};
use crate::utils::base64url;

use aws_lc_rs::hmac;
use secrecy::{ExposeSecret, SecretString};

/// Algorithm identifier written to the JWT header
///
/// Only `HS256` is produced; the header is not configurable by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgorithmType {
    #[default]
    HS256,
}

impl AlgorithmType {
    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmType::HS256 => "HS256",
        }
    }

    fn hmac_algorithm(&self) -> hmac::Algorithm {
        match self {
            AlgorithmType::HS256 => hmac::HMAC_SHA256,
        }
    }

    /// Sign the signing input (`header.payload`) and return the Base64URL signature
    pub(crate) fn sign(&self, signing_input: &str, key: &SigningKey) -> String {
        let tag = hmac::sign(&key.inner, signing_input.as_bytes());
        base64url::encode_bytes(tag.as_ref())
    }
}

impl std::fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for AlgorithmType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// HMAC key imported from a shared secret
///
/// The raw secret bytes are not retained; only the prepared HMAC key is kept.
#[derive(Clone)]
pub struct SigningKey {
    algorithm: AlgorithmType,
    inner: hmac::Key,
}

impl SigningKey {
    /// Import the UTF-8 bytes of `secret` as HS256 key material
    ///
    /// Zero-length secrets are rejected, matching browser crypto providers
    /// which refuse to import an empty HMAC key.
    pub fn hs256(secret: impl AsRef<[u8]>) -> Result<Self> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(Error::KeyInvalid("secret must not be empty".into()));
        }

        let algorithm = AlgorithmType::HS256;
        Ok(Self {
            algorithm,
            inner: hmac::Key::new(algorithm.hmac_algorithm(), secret),
        })
    }

    /// Import a configured secret as HS256 key material
    pub fn from_secret(secret: &SecretString) -> Result<Self> {
        Self::hs256(secret.expose_secret().as_bytes())
    }

    /// Algorithm this key signs with
    pub fn algorithm(&self) -> AlgorithmType {
        self.algorithm
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_display() {
        assert_eq!(format!("{}", AlgorithmType::HS256), "HS256");
        assert_eq!(AlgorithmType::HS256.as_str(), "HS256");
        assert_eq!(AlgorithmType::default(), AlgorithmType::HS256);
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(SigningKey::hs256(""), Err(Error::KeyInvalid(_))));
        assert!(matches!(
            SigningKey::from_secret(&SecretString::from(String::new())),
            Err(Error::KeyInvalid(_))
        ));
    }

    #[test]
    fn test_sign_matches_hmac_verify() {
        let key = SigningKey::hs256("your-256-bit-secret").unwrap();
        let signing_input = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";
        let signature = AlgorithmType::HS256.sign(signing_input, &key);

        let raw = base64::Engine::decode(
            &base64::engine::general_purpose::URL_SAFE_NO_PAD,
            &signature,
        )
        .unwrap();
        assert_eq!(raw.len(), 32);

        let verify_key = hmac::Key::new(hmac::HMAC_SHA256, b"your-256-bit-secret");
        assert!(hmac::verify(&verify_key, signing_input.as_bytes(), &raw).is_ok());
    }

    #[test]
    fn test_debug_hides_key() {
        let key = SigningKey::hs256("super-secret-value").unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("HS256"));
        assert!(!debug.contains("super-secret-value"));
    }
}
