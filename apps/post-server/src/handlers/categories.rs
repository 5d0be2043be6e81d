//! Category RPCs.

use actix_web::{HttpResponse, web};
use post_shared::dto::{CreateCategoryRequest, ListCategoriesRequest, ListCategoriesResponse};

use super::messages::category_message;
use crate::middleware::{AppResult, Caller, RpcResultExt};
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /post.Post/ListCategories
pub async fn list_categories(
    state: web::Data<AppState>,
    _caller: Caller,
    request_id: RequestId,
    body: web::Json<ListCategoriesRequest>,
) -> AppResult<HttpResponse> {
    let page = state
        .posts
        .list_categories(body.into_inner())
        .await
        .for_request(&request_id)?;

    Ok(HttpResponse::Ok().json(ListCategoriesResponse {
        categories: page.items.iter().map(category_message).collect(),
        page_size: page.page_size,
        page_number: page.page_number,
    }))
}

/// POST /post.Post/CreateCategory
pub async fn create_category(
    state: web::Data<AppState>,
    _caller: Caller,
    request_id: RequestId,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let category = state
        .posts
        .create_category(body.into_inner())
        .await
        .for_request(&request_id)?;

    Ok(HttpResponse::Ok().json(category_message(&category)))
}
