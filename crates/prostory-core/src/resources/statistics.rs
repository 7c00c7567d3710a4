use prostory_api::models::Statistic;
use prostory_api::{Query, Resource};

use crate::render::{AsyncData, FetchDescriptor, RenderPass};

/// Landing page figures. Loaded on the client only.
pub fn list() -> FetchDescriptor<Vec<Statistic>> {
    FetchDescriptor::list(
        Resource::Statistics.path(),
        Resource::Statistics.collection_key(&Query::new()),
    )
    .deferred()
}

impl RenderPass {
    pub async fn statistics(&self) -> AsyncData<Vec<Statistic>> {
        self.use_fetch(list()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::render::FetchMode;

    #[test]
    fn descriptor_is_deferred() {
        let d = list();
        assert_eq!(d.path, "/statistics/");
        assert_eq!(d.key, "statistics");
        assert_eq!(d.mode, FetchMode::Deferred);
    }
}
