//! Blog handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use scribe_core::domain::{Blog, BlogChanges};
use scribe_core::pagination::PageRequest;
use scribe_shared::ApiResponse;
use scribe_shared::dto::{
    BlogListQuery, BlogResponse, CreateBlogRequest, DeleteBlogRequest, UpdateBlogRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        uid: blog.id,
        user: blog.user_id,
        title: blog.title,
        content: blog.content,
        created_at: blog.created_at,
        updated_at: blog.updated_at,
    }
}

/// GET /blog/public?search=&page=
pub async fn list_public(
    state: web::Data<AppState>,
    query: web::Query<BlogListQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .blogs
        .list_public(
            query.search.as_deref(),
            PageRequest::parse(query.page.as_deref()),
        )
        .await?;

    let data: Vec<BlogResponse> = page.items.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::new(data, "Blogs Fetched successfully")))
}

/// GET /blog/?search=
pub async fn list_mine(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<BlogListQuery>,
) -> AppResult<HttpResponse> {
    let blogs = state
        .blogs
        .list_mine(identity.user_id, query.search.as_deref())
        .await?;

    let data: Vec<BlogResponse> = blogs.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::new(data, "Blogs Fetched successfully")))
}

/// POST /blog/
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let blog = state
        .blogs
        .create(identity.user_id, req.title, req.content)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        to_response(blog),
        "Blog Created Successfully",
    )))
}

/// PATCH /blog/ with the target in `uid`
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let changes = BlogChanges {
        title: req.title,
        content: req.content,
    };
    let blog = state
        .blogs
        .update(identity.user_id, req.uid, changes)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        to_response(blog),
        "Blog Updated Successfully",
    )))
}

/// DELETE /blog/ with the target in `uid`
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<DeleteBlogRequest>,
) -> AppResult<HttpResponse> {
    state.blogs.delete(identity.user_id, body.uid).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message_only("Blog deleted Successfully")))
}
