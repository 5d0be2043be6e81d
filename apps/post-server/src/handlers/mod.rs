//! RPC handlers and route configuration.
//!
//! Every RPC is a `POST /post.Post/<Method>` with a JSON request message and
//! a JSON response message.

mod categories;
mod health;
mod messages;
mod posts;


use actix_web::{HttpMessage, HttpRequest, error::JsonPayloadError, web};
use post_core::ServiceError;

use crate::middleware::AppError;
use crate::observability::RequestId;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/post.Post")
                .route("/ListPosts", web::post().to(posts::list_posts))
                .route("/GetPost", web::post().to(posts::get_post))
                .route("/CreatePost", web::post().to(posts::create_post))
                .route("/UpdatePost", web::post().to(posts::update_post))
                .route("/DeletePost", web::post().to(posts::delete_post))
                .route("/CheckExists", web::post().to(posts::check_exists))
                .route("/GetOwner", web::post().to(posts::get_owner))
                .route("/ListCategories", web::post().to(categories::list_categories))
                .route("/CreateCategory", web::post().to(categories::create_category)),
        );
}

/// Request bodies that fail to decode are reported as `INVALID_ARGUMENT`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        let mut error = AppError::from(ServiceError::InvalidArgument(err.to_string()));
        if let Some(request_id) = req.extensions().get::<RequestId>() {
            error = error.with_request_id(request_id);
        }
        error.into()
    })
}
