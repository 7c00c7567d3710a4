use prostory_api::models::{MealType, Restaurant, RestaurantBenefit, RestaurantImage};
use prostory_api::{Query, Resource};

use crate::render::{AsyncData, FetchDescriptor, RenderPass};

pub fn info() -> FetchDescriptor<Option<Restaurant>> {
    FetchDescriptor::item(
        Resource::Restaurant.path(),
        Resource::Restaurant.collection_key(&Query::new()),
    )
}

pub fn images() -> FetchDescriptor<Vec<RestaurantImage>> {
    plain_list(Resource::RestaurantImages)
}

pub fn meal_types() -> FetchDescriptor<Vec<MealType>> {
    plain_list(Resource::MealTypes)
}

pub fn benefits() -> FetchDescriptor<Vec<RestaurantBenefit>> {
    plain_list(Resource::RestaurantBenefits)
}

fn plain_list<T: serde::de::DeserializeOwned>(resource: Resource) -> FetchDescriptor<Vec<T>> {
    FetchDescriptor::list(resource.path(), resource.collection_key(&Query::new()))
}

impl RenderPass {
    pub async fn restaurant(&self) -> AsyncData<Option<Restaurant>> {
        self.use_fetch(info()).await
    }

    pub async fn restaurant_images(&self) -> AsyncData<Vec<RestaurantImage>> {
        self.use_fetch(images()).await
    }

    pub async fn meal_types(&self) -> AsyncData<Vec<MealType>> {
        self.use_fetch(meal_types()).await
    }

    pub async fn restaurant_benefits(&self) -> AsyncData<Vec<RestaurantBenefit>> {
        self.use_fetch(benefits()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn descriptors() {
        let d = info();
        assert_eq!((d.path.as_str(), d.key.as_str()), ("/restaurant/", "restaurant"));
        let d = images();
        assert_eq!(
            (d.path.as_str(), d.key.as_str()),
            ("/restaurant/images/", "restaurant-images")
        );
        let d = meal_types();
        assert_eq!(
            (d.path.as_str(), d.key.as_str()),
            ("/restaurant/meal-types/", "meal-types")
        );
        let d = benefits();
        assert_eq!(
            (d.path.as_str(), d.key.as_str()),
            ("/restaurant/benefits/", "restaurant-benefits")
        );
    }
}
