// ── Page data sets ──
//
// A page issues all of its reads at once and renders whatever came back.
// One failed section leaves the others untouched.

use prostory_api::models::{
    Activity, EventType, GalleryPosition, HeroSection, LodgeType, NewsSummary, Restaurant,
    Statistic,
};

use crate::render::{AsyncData, FetchStatus, RenderPass};
use crate::resources::{ActivityFilter, GalleryFilter, GalleryView};

/// Per-key outcome of a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub key: String,
    pub status: FetchStatus,
    pub items: usize,
    pub error: Option<String>,
}

impl FetchSummary {
    fn of<T>(data: &AsyncData<T>, count: impl Fn(&T) -> usize) -> Self {
        Self {
            key: data.key.clone(),
            status: data.status,
            items: count(&data.data),
            error: data.error.as_ref().map(ToString::to_string),
        }
    }
}

/// Everything the landing page renders.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub hero: AsyncData<HeroSection>,
    pub gallery: AsyncData<GalleryView>,
    pub lodge_types: AsyncData<Vec<LodgeType>>,
    pub activities: AsyncData<Vec<Activity>>,
    pub event_types: AsyncData<Vec<EventType>>,
    pub restaurant: AsyncData<Option<Restaurant>>,
    pub news: AsyncData<Vec<NewsSummary>>,
    pub statistics: AsyncData<Vec<Statistic>>,
}

impl HomePage {
    /// Load every section concurrently within `pass`.
    pub async fn load(pass: &RenderPass) -> Self {
        let gallery_filter = GalleryFilter::position(GalleryPosition::Main);
        let activity_filter = ActivityFilter::default();

        let (hero, gallery, lodge_types, activities, event_types, restaurant, news, statistics) = futures::join!(
            pass.hero(),
            pass.gallery(&gallery_filter),
            pass.lodge_types(),
            pass.activities(&activity_filter),
            pass.event_types(),
            pass.restaurant(),
            pass.news(),
            pass.statistics(),
        );

        Self {
            hero,
            gallery,
            lodge_types,
            activities,
            event_types,
            restaurant,
            news,
            statistics,
        }
    }

    /// One line per section, in render order.
    pub fn summary(&self) -> Vec<FetchSummary> {
        vec![
            FetchSummary::of(&self.hero, |h| h.images.len()),
            FetchSummary::of(&self.gallery, GalleryView::len),
            FetchSummary::of(&self.lodge_types, Vec::len),
            FetchSummary::of(&self.activities, Vec::len),
            FetchSummary::of(&self.event_types, Vec::len),
            FetchSummary::of(&self.restaurant, |r| usize::from(r.is_some())),
            FetchSummary::of(&self.news, Vec::len),
            FetchSummary::of(&self.statistics, Vec::len),
        ]
    }

    /// Returns `true` if any section failed.
    pub fn has_errors(&self) -> bool {
        self.summary().iter().any(|s| s.status == FetchStatus::Error)
    }
}
