use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, PageRequest, Post};
use crate::error::StoreError;

/// Fields needed to insert a post. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub url: String,
}

/// Partial update of a post. An empty string leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: String,
    pub url: String,
}

/// Fields needed to insert a category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub user_id: Uuid,
    pub name: String,
}

/// Storage contract for posts and categories.
///
/// Every method is atomic with respect to the single row it touches.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Posts ordered by `created_at` descending, skipping `page.offset()` rows.
    async fn list_posts(
        &self,
        category_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Post>, StoreError>;

    /// Fails with `NotFound` when absent.
    async fn get_post(&self, id: Uuid) -> Result<Post, StoreError>;

    /// Fails with `NotCreated` when the write affected no rows.
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Applies the non-empty fields of `patch` and refreshes `modified_at`.
    async fn update_post(&self, id: Uuid, patch: PostPatch) -> Result<(), StoreError>;

    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError>;

    /// Absence is reported as `Ok(false)`, not as an error.
    async fn post_exists(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn post_owner(&self, id: Uuid) -> Result<Uuid, StoreError>;

    /// Categories ordered by name, then id.
    async fn list_categories(&self, page: PageRequest) -> Result<Vec<Category>, StoreError>;

    async fn create_category(&self, category: NewCategory) -> Result<Category, StoreError>;
}
