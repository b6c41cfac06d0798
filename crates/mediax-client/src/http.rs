//! Shared HTTP connection pool.

use std::sync::OnceLock;
use std::time::Duration;

static BUILT_IN_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Process-wide client shared by every MediaX client that is not handed its
/// own `reqwest::Client`.
pub(crate) fn built_in_client() -> reqwest::Client {
    BUILT_IN_CLIENT
        .get_or_init(|| {
            reqwest::Client::builder()
                .user_agent("mediax-client/0.1")
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create default MediaX HTTP client")
        })
        .clone()
}
