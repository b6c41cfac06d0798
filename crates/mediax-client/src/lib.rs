//! Clients for the MediaX open search API.
//!
//! This crate provides the shared plumbing the MediaX tools are built on:
//!
//! - [`MediaxCredentials`] - Host-supplied access/secret key pair and API domain
//! - [`RequestSigner`] / [`SignedFragment`] - Per-request MD5 authentication fragment
//! - [`MediaSearchClient`] / [`SearchQuery`] - Keyword search over media assets
//! - [`EsSearchClient`] - Passthrough queries against the Elasticsearch proxy
//! - [`SearchError`] - Error taxonomy shared by both clients
//!
//! Every request is signed fresh: a new timestamp and digest are computed per
//! call, nothing is cached or retried, and the clients hold no mutable state
//! beyond the shared connection pool.
//!
//! # Example
//!
//! ```rust,ignore
//! use mediax_client::{MediaSearchClient, MediaxCredentials, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() {
//!     let credentials = MediaxCredentials::new("ak", "sk", "https://mediax.example.com");
//!     let client = MediaSearchClient::new(credentials);
//!
//!     let query = SearchQuery::new("city skyline").with_media_types("image");
//!     let records = client.search(&query).await.unwrap();
//!     for record in records {
//!         println!("{}: {}", record.title, record.url);
//!     }
//! }
//! ```

mod credentials;
mod error;
mod es;
mod http;
mod model;
mod search;
mod sign;

pub use credentials::MediaxCredentials;
pub use error::SearchError;
pub use es::{EsSearchClient, EsSearchOutcome};
pub use model::MediaRecord;
pub use search::{MediaSearchClient, SearchQuery, DEFAULT_MEDIA_TYPES};
pub use sign::{RequestSigner, SignedFragment};
