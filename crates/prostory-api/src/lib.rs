// prostory-api: Async Rust client for the Строгановские Просторы REST backend
//
// Transport, URL construction, and the shape contract of the backend's
// JSON responses. Everything here is stateless; request coalescing and
// render-pass semantics live in `prostory-core`.

pub mod cache_key;
pub mod client;
pub mod collection;
pub mod error;
pub mod models;
pub mod query;
pub mod resource;
pub mod transport;

pub use cache_key::{ALL_SENTINEL, derive_key, item_key};
pub use client::ApiClient;
pub use collection::{Collection, Page, normalize};
pub use error::Error;
pub use query::{Query, build_query};
pub use resource::{Resource, ResourceId};
pub use transport::TransportConfig;
