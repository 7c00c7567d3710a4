// Backend response types
//
// Read-only projections of the backend serializers. Fields use
// `#[serde(default)]` liberally: the frontend only reads what it renders,
// and anything it doesn't model lands in `extra`.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::resource::ResourceId;

type Extra = serde_json::Map<String, serde_json::Value>;

// ── Filter vocabularies ─────────────────────────────────────────────

/// Where a gallery image is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GalleryPosition {
    Main,
    Hero,
    Lodge,
    Activity,
}

/// Column of the main gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GalleryColumn {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ActivityCategory {
    Active,
    Peaceful,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Season {
    Winter,
    Summer,
}

// ── Shared ──────────────────────────────────────────────────────────

/// SEO block attached to most detail payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoFields {
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub robots_meta: Option<String>,
}

/// DRF renders `DecimalField` as a string; accept either form.
fn decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

// ── Lodges ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LodgeImage {
    pub id: ResourceId,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_webp_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub order: i32,
}

/// A cottage, house or glamping tent from `/lodges/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lodge {
    pub id: ResourceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub lodge_type: Option<ResourceId>,
    #[serde(default)]
    pub lodge_type_name: Option<String>,
    #[serde(default)]
    pub lodge_type_slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default, deserialize_with = "decimal")]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "decimal")]
    pub price_from: Option<f64>,
    #[serde(default)]
    pub location_description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub images: Vec<LodgeImage>,
    #[serde(default)]
    pub seo_fields: Option<SeoFields>,
    /// Catch-all for fields not modelled above (schema.org, breadcrumbs).
    #[serde(flatten)]
    pub extra: Extra,
}

/// Lodge category from `/lodges/types/`, with its lodges nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LodgeType {
    pub id: ResourceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub hero_image_webp_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub lodges: Vec<Lodge>,
    #[serde(default)]
    pub seo_fields: Option<SeoFields>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── Activities & events ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ResourceId,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_display: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub season_display: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_webp_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub seo_fields: Option<SeoFields>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Event format offered by the venue (weddings, corporate retreats, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventType {
    pub id: ResourceId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_webp_url: Option<String>,
    /// Size name -> URL (`large`, `card`, ...).
    #[serde(default)]
    pub image_variants: Option<serde_json::Value>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub seo_fields: Option<SeoFields>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── News ────────────────────────────────────────────────────────────

/// List projection from `/news/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSummary {
    pub id: ResourceId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_webp_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reading_time: Option<u32>,
}

/// Detail projection from `/news/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: ResourceId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_webp_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub schema_org_json: Option<serde_json::Value>,
    #[serde(default)]
    pub seo_fields: Option<SeoFields>,
}

// ── Gallery & hero ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: ResourceId,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_webp_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroImage {
    pub id: ResourceId,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_webp_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub order: i32,
    /// Slide duration in milliseconds.
    #[serde(default)]
    pub transition_duration: Option<u32>,
}

/// Landing hero block from `/hero/`.
///
/// The default (no images) is what a page renders before the backend
/// answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub preview_image_url: Option<String>,
    #[serde(default)]
    pub preview_image_webp_url: Option<String>,
    #[serde(default)]
    pub promo_video_url: Option<String>,
    #[serde(default)]
    pub video_poster_url: Option<String>,
    #[serde(default)]
    pub display_type: Option<String>,
    #[serde(default)]
    pub images: Vec<HeroImage>,
    #[serde(default)]
    pub seo_fields: Option<SeoFields>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── Restaurant ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantImage {
    pub id: ResourceId,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_webp_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealType {
    pub id: ResourceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time_start: Option<NaiveTime>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantBenefit {
    pub id: ResourceId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: ResourceId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<RestaurantImage>,
    #[serde(default)]
    pub meal_types: Vec<MealType>,
    #[serde(default)]
    pub benefits: Vec<RestaurantBenefit>,
    #[serde(default)]
    pub seo_fields: Option<SeoFields>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── Statistics ──────────────────────────────────────────────────────

/// Headline figure on the landing page ("150+ гостей в год").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub id: ResourceId,
    /// Free text on the backend: `"150"` or `"50+"`.
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}
