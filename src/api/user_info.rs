//! User info API endpoint.

use actix_web::{HttpResponse, get, web};

use crate::error::AppResult;
use crate::services::UserInfoService;

/// Configure user info routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_user_info);
}

/// Get a GitHub user's profile merged with their public repositories.
///
/// GET /userInfo/{username}
///
/// Upstream failures are reflected with the upstream status code and body.
#[utoipa::path(
    get,
    path = "/userInfo/{username}",
    tag = "Users",
    params(
        ("username" = String, Path, description = "GitHub username (case-sensitive)")
    ),
    responses(
        (status = 200, description = "Merged user info", body = crate::models::UserInfo),
        (status = 404, description = "User not found on GitHub", body = crate::error::ErrorResponse),
        (status = 500, description = "Unexpected error", body = crate::error::ErrorResponse)
    )
)]
#[get("/userInfo/{username}")]
pub async fn get_user_info(
    service: web::Data<UserInfoService>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let username = path.into_inner();
    let user_info = service.get_user_info(&username).await?;

    Ok(HttpResponse::Ok().json(user_info))
}
