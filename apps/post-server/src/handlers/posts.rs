//! Post RPCs.

use actix_web::{HttpResponse, web};
use post_shared::dto::{
    CheckExistsRequest, CheckExistsResponse, CreatePostRequest, DeletePostRequest,
    DeletePostResponse, GetOwnerRequest, GetOwnerResponse, GetPostRequest, ListPostsRequest,
    ListPostsResponse, UpdatePostRequest, UpdatePostResponse,
};

use super::messages::post_message;
use crate::middleware::{AppResult, Caller, RpcResultExt};
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /post.Post/ListPosts
pub async fn list_posts(
    state: web::Data<AppState>,
    _caller: Caller,
    request_id: RequestId,
    body: web::Json<ListPostsRequest>,
) -> AppResult<HttpResponse> {
    let page = state
        .posts
        .list_posts(body.into_inner())
        .await
        .for_request(&request_id)?;

    Ok(HttpResponse::Ok().json(ListPostsResponse {
        posts: page.items.iter().map(post_message).collect(),
        page_size: page.page_size,
        page_number: page.page_number,
    }))
}

/// POST /post.Post/GetPost
pub async fn get_post(
    state: web::Data<AppState>,
    _caller: Caller,
    request_id: RequestId,
    body: web::Json<GetPostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .get_post(body.into_inner())
        .await
        .for_request(&request_id)?;

    Ok(HttpResponse::Ok().json(post_message(&post)))
}

/// POST /post.Post/CreatePost
pub async fn create_post(
    state: web::Data<AppState>,
    caller: Caller,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    if let Some(claims) = &caller.claims {
        tracing::debug!(subject = %claims.subject, "CreatePost on behalf of caller");
    }

    let post = state
        .posts
        .create_post(body.into_inner())
        .await
        .for_request(&request_id)?;

    Ok(HttpResponse::Ok().json(post_message(&post)))
}

/// POST /post.Post/UpdatePost
pub async fn update_post(
    state: web::Data<AppState>,
    _caller: Caller,
    request_id: RequestId,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .update_post(body.into_inner())
        .await
        .for_request(&request_id)?;

    Ok(HttpResponse::Ok().json(UpdatePostResponse {}))
}

/// POST /post.Post/DeletePost
pub async fn delete_post(
    state: web::Data<AppState>,
    _caller: Caller,
    request_id: RequestId,
    body: web::Json<DeletePostRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete_post(body.into_inner())
        .await
        .for_request(&request_id)?;

    Ok(HttpResponse::Ok().json(DeletePostResponse {}))
}

/// POST /post.Post/CheckExists
pub async fn check_exists(
    state: web::Data<AppState>,
    _caller: Caller,
    request_id: RequestId,
    body: web::Json<CheckExistsRequest>,
) -> AppResult<HttpResponse> {
    let exists = state
        .posts
        .check_exists(body.into_inner())
        .await
        .for_request(&request_id)?;

    Ok(HttpResponse::Ok().json(CheckExistsResponse { exists }))
}

/// POST /post.Post/GetOwner
pub async fn get_owner(
    state: web::Data<AppState>,
    _caller: Caller,
    request_id: RequestId,
    body: web::Json<GetOwnerRequest>,
) -> AppResult<HttpResponse> {
    let owner_id = state
        .posts
        .get_owner(body.into_inner())
        .await
        .for_request(&request_id)?;

    Ok(HttpResponse::Ok().json(GetOwnerResponse { owner_id }))
}
