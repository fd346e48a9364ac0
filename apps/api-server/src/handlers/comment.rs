//! Comment handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;
use validator::Validate;

use scribe_core::domain::Comment;
use scribe_shared::ApiResponse;
use scribe_shared::dto::{CommentResponse, CreateCommentRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        uid: comment.id,
        post: comment.post_id,
        author: comment.author_id,
        comment: comment.body,
        created_at: comment.created_at,
    }
}

/// GET /blog/{post_id}/comments/
pub async fn list(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comments = state.comments.list(path.into_inner()).await?;

    let data: Vec<CommentResponse> = comments.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::new(data, "Comments fetched successfully")))
}

/// POST /blog/{post_id}/comments/
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let comment = state
        .comments
        .create(identity.user_id, path.into_inner(), req.comment)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        to_response(comment),
        "Comment created successfully",
    )))
}

/// DELETE /blog/{post_id}/comments/{comment_id}/
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    state
        .comments
        .delete(identity.user_id, post_id, comment_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message_only(
        "Comment deleted successfully",
    )))
}
