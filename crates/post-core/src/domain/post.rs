use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a titled link owned by a user.
///
/// `id`, `user_id`, `category_id` and `created_at` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a fresh id and `created_at == modified_at`.
    ///
    /// Timestamps are truncated to microseconds, the precision Postgres keeps.
    pub fn new(user_id: Uuid, category_id: Option<Uuid>, title: String, url: String) -> Self {
        let now = Utc::now().trunc_subsecs(6);
        Self {
            id: Uuid::new_v4(),
            user_id,
            category_id,
            title,
            url,
            created_at: now,
            modified_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_timestamps_match() {
        let post = Post::new(Uuid::new_v4(), None, "First post".into(), "google.com".into());
        assert_eq!(post.created_at, post.modified_at);
    }

    #[test]
    fn test_new_posts_get_distinct_ids() {
        let owner = Uuid::new_v4();
        let a = Post::new(owner, None, "a".into(), String::new());
        let b = Post::new(owner, None, "b".into(), String::new());
        assert_ne!(a.id, b.id);
    }
}
