//! Authentication handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use scribe_core::services::NewAccount;
use scribe_shared::ApiResponse;
use scribe_shared::dto::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest,
    TokenPairResponse, UserResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let user = state
        .auth
        .register(NewAccount {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
        },
        "Account created",
    )))
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let pair = state.auth.login(&req.username, &req.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        LoginResponse {
            token: TokenPairResponse {
                refresh: pair.refresh,
                access: pair.access,
            },
        },
        "Login Successful",
    )))
}

/// POST /token/refresh
pub async fn refresh(
    state: web::Data<AppState>,
    body: web::Json<RefreshRequest>,
) -> AppResult<HttpResponse> {
    let access = state.auth.refresh(&body.refresh)?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        RefreshResponse { access },
        "Token refreshed",
    )))
}
