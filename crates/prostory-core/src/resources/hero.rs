use prostory_api::models::HeroSection;
use prostory_api::{Query, Resource};

use crate::render::{AsyncData, FetchDescriptor, RenderPass};

/// Landing hero block; an absent section is an empty one.
pub fn section() -> FetchDescriptor<HeroSection> {
    FetchDescriptor::object(Resource::Hero.path(), Resource::Hero.collection_key(&Query::new()))
}

impl RenderPass {
    pub async fn hero(&self) -> AsyncData<HeroSection> {
        self.use_fetch(section()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn descriptor() {
        let d = section();
        assert_eq!(d.path, "/hero/");
        assert_eq!(d.key, "hero");
        assert!((d.default)().images.is_empty());
    }
}
