//! HTTP handlers and route configuration.

mod auth;
mod blog;
mod comment;
mod health;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, web};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected path: {}", err);
        AppError::NotFound("Invalid uid".to_string()).into()
    }))
    // Public routes
    .route("/health", web::get().to(health::health_check))
    .route("/register", web::post().to(auth::register))
    .route("/login", web::post().to(auth::login))
    .route("/token/refresh", web::post().to(auth::refresh))
    .service(
        web::scope("/blog")
            .route("/public", web::get().to(blog::list_public))
            .route("/public/", web::get().to(blog::list_public))
            // Owner-scoped CRUD
            .service(
                web::resource("/")
                    .route(web::get().to(blog::list_mine))
                    .route(web::post().to(blog::create))
                    .route(web::patch().to(blog::update))
                    .route(web::delete().to(blog::delete)),
            )
            .service(
                web::resource("/{post_id}/comments/")
                    .route(web::get().to(comment::list))
                    .route(web::post().to(comment::create)),
            )
            .route(
                "/{post_id}/comments/{comment_id}/",
                web::delete().to(comment::delete),
            )
            .route(
                "/{post_id}/comments/{comment_id}/delete/",
                web::delete().to(comment::delete),
            )
            // Declared without behavior
            .route(
                "/{post_id}/comments/{comment_id}/reply/",
                web::route().to(not_implemented),
            )
            .route(
                "/{post_id}/comments/{comment_id}/reply/{reply_id}/",
                web::route().to(not_implemented),
            )
            .route(
                "/{post_id}/comments/{comment_id}/like/",
                web::route().to(not_implemented),
            )
            .route(
                "/{post_id}/comments/{comment_id}/dislike/",
                web::route().to(not_implemented),
            )
            .route(
                "/{post_id}/comments/{comment_id}/report/",
                web::route().to(not_implemented),
            ),
    );
}

/// Registered routes with no behavior yet. Still require authentication.
async fn not_implemented(identity: Identity) -> AppResult<HttpResponse> {
    tracing::debug!(
        user_id = %identity.user_id,
        username = %identity.username,
        "Unimplemented route called"
    );
    Err(AppError::NotImplemented)
}
