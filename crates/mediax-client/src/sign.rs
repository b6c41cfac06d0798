//! Per-request signing for the MediaX open API.

use std::time::{SystemTime, UNIX_EPOCH};

use md5::{Digest, Md5};
use tracing::debug;

use crate::credentials::MediaxCredentials;

/// Authentication fragment appended to every signed request.
///
/// The digested timestamp and the reported one are always the same value;
/// a fragment is never reused across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedFragment {
    /// Lowercase 32-char hex MD5 digest.
    pub signature: String,
    pub access_key: String,
    pub timestamp_millis: u64,
}

impl SignedFragment {
    /// Render the fragment as query parameters.
    ///
    /// Callers append these after all business parameters, in this order:
    /// `signature`, `access_key`, `timestamp`.
    pub fn query_params(&self) -> Vec<(String, String)> {
        vec![
            ("signature".to_string(), self.signature.clone()),
            ("access_key".to_string(), self.access_key.clone()),
            ("timestamp".to_string(), self.timestamp_millis.to_string()),
        ]
    }
}

/// Builds the time-bound MD5 signature the MediaX gateway verifies.
pub struct RequestSigner {
    access_key: String,
    secret_key: String,
}

impl RequestSigner {
    pub fn new(credentials: &MediaxCredentials) -> Self {
        Self {
            access_key: credentials.access_key.clone(),
            secret_key: credentials.secret_key.clone(),
        }
    }

    /// Sign with the current wall clock.
    pub fn sign(&self) -> SignedFragment {
        self.sign_at(now_millis())
    }

    /// Sign for a specific timestamp.
    ///
    /// The gateway recomputes `md5(secret_key + timestamp + access_key)`;
    /// concatenation order is part of the contract, with no separators.
    pub fn sign_at(&self, timestamp_millis: u64) -> SignedFragment {
        let digest_input = format!("{}{}{}", self.secret_key, timestamp_millis, self.access_key);
        let signature = hex::encode(Md5::digest(digest_input.as_bytes()));

        // The digest input contains the plaintext secret key, so it stays out
        // of the logs; timestamp and signature are enough for diagnostics.
        debug!(timestamp_millis, %signature, "signed request");

        SignedFragment {
            signature,
            access_key: self.access_key.clone(),
            timestamp_millis,
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer(access_key: &str, secret_key: &str) -> RequestSigner {
        RequestSigner::new(&MediaxCredentials::new(
            access_key,
            secret_key,
            "https://mediax.example.com",
        ))
    }

    #[test]
    fn test_signature_matches_reference_digest() {
        // md5("sk11700000000000ak1")
        let fragment = signer("ak1", "sk1").sign_at(1_700_000_000_000);
        assert_eq!(fragment.signature, "129f25888edf8dc0770b4b4996705eb3");
        assert_eq!(fragment.access_key, "ak1");
        assert_eq!(fragment.timestamp_millis, 1_700_000_000_000);
    }

    #[test]
    fn test_concatenation_order_is_secret_timestamp_access() {
        // md5("sk1699999999999ak"), not any permutation of the three parts
        let fragment = signer("ak", "sk").sign_at(1_699_999_999_999);
        assert_eq!(fragment.signature, "d0343696f7fb5df14465efff803c947a");
    }

    #[test]
    fn test_sign_at_is_deterministic() {
        let signer = signer("ak1", "sk1");
        let first = signer.sign_at(1_700_000_000_000);
        let second = signer.sign_at(1_700_000_000_000);
        assert_eq!(first, second);
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let fragment = signer("ak1", "sk1").sign();
        assert_eq!(fragment.signature.len(), 32);
        assert!(fragment
            .signature
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_query_params_order() {
        let fragment = signer("ak1", "sk1").sign_at(1_700_000_000_000);
        let params = fragment.query_params();
        assert_eq!(params[0].0, "signature");
        assert_eq!(params[1], ("access_key".to_string(), "ak1".to_string()));
        assert_eq!(params[2], ("timestamp".to_string(), "1700000000000".to_string()));
    }
}
