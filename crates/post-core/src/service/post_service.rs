use std::sync::Arc;

use post_shared::dto::{
    CheckExistsRequest, CreateCategoryRequest, CreatePostRequest, DeletePostRequest,
    GetOwnerRequest, GetPostRequest, ListCategoriesRequest, ListPostsRequest, UpdatePostRequest,
};

use crate::domain::{Category, Page, PageRequest, Post};
use crate::error::ServiceError;
use crate::ports::{NewCategory, NewPost, PostPatch, PostStore};

use super::ids::{parse_optional_uid, parse_uid};

/// Post service - one method per RPC.
///
/// Required text fields are checked first, then identifiers are parsed, and
/// only then is the store called. Store failures come back through
/// `From<StoreError> for ServiceError`.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Newest posts first, optionally restricted to one category.
    pub async fn list_posts(&self, req: ListPostsRequest) -> Result<Page<Post>, ServiceError> {
        let page = PageRequest::resolve(req.page_size, req.page_number);
        let category_id = parse_optional_uid(&req.category_id)?;

        let posts = self
            .store
            .list_posts(category_id, page)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        tracing::debug!(
            count = posts.len(),
            page_size = page.page_size,
            page_number = page.page_number,
            "Listed posts"
        );
        Ok(Page::new(posts, page))
    }

    pub async fn get_post(&self, req: GetPostRequest) -> Result<Post, ServiceError> {
        let id = parse_uid(&req.id)?;
        Ok(self.store.get_post(id).await?)
    }

    pub async fn create_post(&self, req: CreatePostRequest) -> Result<Post, ServiceError> {
        if req.title.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "post title is required".to_string(),
            ));
        }

        let user_id = parse_uid(&req.owner_id)?;
        let category_id = parse_optional_uid(&req.category_id)?;

        let post = self
            .store
            .create_post(NewPost {
                user_id,
                category_id,
                title: req.title,
                url: req.url,
            })
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        tracing::info!(post_id = %post.id, user_id = %post.user_id, "Post created");
        Ok(post)
    }

    pub async fn update_post(&self, req: UpdatePostRequest) -> Result<(), ServiceError> {
        let id = parse_uid(&req.id)?;

        self.store
            .update_post(
                id,
                PostPatch {
                    title: req.title,
                    url: req.url,
                },
            )
            .await?;

        tracing::debug!(post_id = %id, "Post updated");
        Ok(())
    }

    pub async fn delete_post(&self, req: DeletePostRequest) -> Result<(), ServiceError> {
        let id = parse_uid(&req.id)?;
        self.store.delete_post(id).await?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    /// An unknown id yields `Ok(false)`.
    pub async fn check_exists(&self, req: CheckExistsRequest) -> Result<bool, ServiceError> {
        let id = parse_uid(&req.id)?;
        Ok(self.store.post_exists(id).await?)
    }

    /// Owner id in canonical textual form.
    pub async fn get_owner(&self, req: GetOwnerRequest) -> Result<String, ServiceError> {
        let id = parse_uid(&req.id)?;
        let owner = self.store.post_owner(id).await?;
        Ok(owner.to_string())
    }

    pub async fn list_categories(
        &self,
        req: ListCategoriesRequest,
    ) -> Result<Page<Category>, ServiceError> {
        let page = PageRequest::resolve(req.page_size, req.page_number);

        let categories = self
            .store
            .list_categories(page)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(Page::new(categories, page))
    }

    pub async fn create_category(
        &self,
        req: CreateCategoryRequest,
    ) -> Result<Category, ServiceError> {
        if req.name.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "category name is required".to_string(),
            ));
        }

        let user_id = parse_uid(&req.owner_id)?;

        let category = self
            .store
            .create_category(NewCategory {
                user_id,
                name: req.name,
            })
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        tracing::info!(category_id = %category.id, user_id = %category.user_id, "Category created");
        Ok(category)
    }
}
