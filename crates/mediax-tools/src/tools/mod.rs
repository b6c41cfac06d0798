//! Built-in tool implementations.

mod es_search;
mod media_search;

pub use es_search::EsSearch;
pub use media_search::MediaSearch;
