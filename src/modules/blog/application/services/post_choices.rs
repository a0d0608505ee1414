use std::sync::Arc;

use crate::blog::application::ports::incoming::use_cases::PostChoices;
use crate::blog::application::ports::outgoing::{CategoryQuery, LocationQuery};

/// Loads the categories and locations a post form offers.
#[derive(Clone)]
pub struct PostChoicesLoader {
    categories: Arc<dyn CategoryQuery + Send + Sync>,
    locations: Arc<dyn LocationQuery + Send + Sync>,
}

impl PostChoicesLoader {
    pub fn new(
        categories: Arc<dyn CategoryQuery + Send + Sync>,
        locations: Arc<dyn LocationQuery + Send + Sync>,
    ) -> Self {
        Self {
            categories,
            locations,
        }
    }

    pub async fn load(&self) -> Result<PostChoices, String> {
        let categories = self
            .categories
            .list_all()
            .await
            .map_err(|e| e.to_string())?;
        let locations = self
            .locations
            .list_all()
            .await
            .map_err(|e| e.to_string())?;

        Ok(PostChoices::from_rows(&categories, &locations))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tests::support::blog_fixtures::{
        category, location, InMemoryCategoryQuery, InMemoryLocationQuery,
    };

    /// Category 1 "travel" and location 5 "Moscow".
    pub(crate) fn loader() -> PostChoicesLoader {
        PostChoicesLoader::new(
            Arc::new(InMemoryCategoryQuery {
                categories: vec![category(1, "travel", true)],
            }),
            Arc::new(InMemoryLocationQuery {
                locations: vec![location(5, "Moscow")],
            }),
        )
    }

    #[tokio::test]
    async fn unpublished_categories_are_still_choices() {
        let loader = PostChoicesLoader::new(
            Arc::new(InMemoryCategoryQuery {
                categories: vec![category(1, "travel", true), category(2, "drafts", false)],
            }),
            Arc::new(InMemoryLocationQuery::default()),
        );

        let choices = loader.load().await.unwrap();

        let ids: Vec<i32> = choices.categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(choices.locations.is_empty());
    }
}
