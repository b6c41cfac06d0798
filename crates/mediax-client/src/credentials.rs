//! Host-supplied credentials for the MediaX open API.

use std::fmt;

/// Access credentials and endpoint for one MediaX tenant.
///
/// The host resolves these once from its own credential store and shares them
/// across sequential calls. All fields are immutable after construction.
#[derive(Clone)]
pub struct MediaxCredentials {
    /// Public access key, sent with every signed request.
    pub access_key: String,
    /// Shared secret, only ever fed into the signature digest.
    pub secret_key: String,
    /// Base URL of the MediaX gateway, without a trailing slash.
    pub api_domain: String,
}

impl MediaxCredentials {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        api_domain: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            api_domain: api_domain.into(),
        }
    }
}

// The secret key must not leak through debug formatting.
impl fmt::Debug for MediaxCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaxCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("api_domain", &self.api_domain)
            .finish()
    }
}
