//! Request/response messages for the post RPC surface.
//!
//! Every request field is optional on the wire; an absent field takes its
//! zero value (empty string or `0`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `ListPosts` request. An empty `category_id` lists posts of every category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListPostsRequest {
    pub category_id: String,
    pub page_size: u32,
    pub page_number: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetPostRequest {
    pub id: String,
}

/// `CreatePost` request. An empty `category_id` creates an uncategorised post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub url: String,
    pub owner_id: String,
    pub category_id: String,
}

/// `UpdatePost` request. Empty `title` or `url` leaves that field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeletePostRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckExistsRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetOwnerRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListCategoriesRequest {
    pub page_size: u32,
    pub page_number: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub owner_id: String,
}

/// A single post as seen by RPC callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessage {
    pub id: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// A single category as seen by RPC callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMessage {
    pub id: String,
    pub owner_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsResponse {
    pub posts: Vec<PostMessage>,
    pub page_size: u32,
    pub page_number: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategoryMessage>,
    pub page_size: u32,
    pub page_number: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostResponse {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePostResponse {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOwnerResponse {
    pub owner_id: String,
}
