//! In-memory post store - used when no database is configured, and in tests.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use post_core::domain::{Category, PageRequest, Post};
use post_core::error::StoreError;
use post_core::ports::{NewCategory, NewPost, PostPatch, PostStore};

/// In-memory store using vectors behind async RwLocks.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
    categories: RwLock<Vec<Category>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn window<T>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_posts(
        &self,
        category_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|p| category_id.is_none() || p.category_id == category_id)
            .cloned()
            .collect();
        drop(posts);

        // Reversed first so equal timestamps keep the newest insert ahead.
        matching.reverse();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(window(matching, page))
    }

    async fn get_post(&self, id: Uuid) -> Result<Post, StoreError> {
        let posts = self.posts.read().await;
        posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create_post(&self, new: NewPost) -> Result<Post, StoreError> {
        let post = Post::new(new.user_id, new.category_id, new.title, new.url);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: Uuid, patch: PostPatch) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        if !patch.title.is_empty() {
            post.title = patch.title;
        }
        if !patch.url.is_empty() {
            post.url = patch.url;
        }
        post.modified_at = Utc::now().trunc_subsecs(6).max(post.created_at);

        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        posts.remove(index);
        Ok(())
    }

    async fn post_exists(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.posts.read().await.iter().any(|p| p.id == id))
    }

    async fn post_owner(&self, id: Uuid) -> Result<Uuid, StoreError> {
        let posts = self.posts.read().await;
        posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.user_id)
            .ok_or(StoreError::NotFound)
    }

    async fn list_categories(&self, page: PageRequest) -> Result<Vec<Category>, StoreError> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(window(categories, page))
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category, StoreError> {
        let category = Category::new(new.user_id, new.name);
        self.categories.write().await.push(category.clone());
        Ok(category)
    }
}
