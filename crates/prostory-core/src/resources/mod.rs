// Resource accessors
//
// One module per backend resource. Each exposes descriptor builders
// (pure: path, key, default, mode) and extends `RenderPass` with the
// accessor pages call.

pub mod activities;
pub mod events;
pub mod gallery;
pub mod hero;
pub mod lodges;
pub mod news;
pub mod restaurant;
pub mod statistics;

pub use activities::ActivityFilter;
pub use gallery::{GalleryFilter, GalleryView};
pub use lodges::LodgeFilter;
