//! Domain records rendered as wire messages.

use post_core::domain::{Category, Post};
use post_shared::dto::{CategoryMessage, PostMessage};

pub fn post_message(post: &Post) -> PostMessage {
    PostMessage {
        id: post.id.to_string(),
        owner_id: post.user_id.to_string(),
        category_id: post.category_id.map(|id| id.to_string()),
        title: post.title.clone(),
        url: post.url.clone(),
        created_at: post.created_at,
        modified_at: post.modified_at,
    }
}

pub fn category_message(category: &Category) -> CategoryMessage {
    CategoryMessage {
        id: category.id.to_string(),
        owner_id: category.user_id.to_string(),
        name: category.name.clone(),
    }
}
