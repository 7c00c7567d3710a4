//! Render-pass data layer between `prostory-api` and page rendering.
//!
//! This crate owns the data-fetching contract of the site frontend:
//!
//! - **[`Gateway`]**: Resolves backend paths against the configured API
//!   base, issues the GET, logs failures, and hands back JSON or a
//!   [`FetchError`].
//!
//! - **[`RenderPass`]**: One server render or client hydration. Owns a
//!   [`FetchCache`] so identical cache keys coalesce into a single request,
//!   and decides whether a [`FetchDescriptor`] runs now or stays at its
//!   default until the client phase.
//!
//! - **Resource accessors** ([`resources`]): One method per backend
//!   resource (`lodges`, `gallery`, `statistics`, ...) with the cache keys
//!   and defaults the pages rely on.
//!
//! - **Generators**: [`sitemap`], [`robots`], [`structured_data`], plus
//!   the [`format`] and [`image`] helpers used by templates.

pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod gateway;
pub mod hooks;
pub mod image;
pub mod page;
pub mod render;
pub mod resources;
pub mod robots;
pub mod sitemap;
pub mod structured_data;

// ── Primary re-exports ──────────────────────────────────────────────
pub use cache::FetchCache;
pub use config::{FrontendConfig, sanitize_site_url};
pub use error::{DEFAULT_ERROR_MESSAGE, FetchError, FetchErrorKind};
pub use gateway::Gateway;
pub use hooks::{ErrorHook, ErrorHooks, LoggingHook};
pub use page::{FetchSummary, HomePage};
pub use render::{AsyncData, FetchDescriptor, FetchMode, FetchOptions, FetchStatus, Phase, RenderPass};
pub use resources::{ActivityFilter, GalleryFilter, GalleryView, LodgeFilter};
pub use sitemap::SitemapSource;

// Backend types are part of this crate's public surface.
pub use prostory_api::models;
pub use prostory_api::{Resource, ResourceId};
