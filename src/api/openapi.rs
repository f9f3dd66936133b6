//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GitHub Data Integration",
        version = "0.1.0",
        description = "Aggregates a GitHub user's public profile and repositories into one response"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::user_info::get_user_info,
    ),
    components(
        schemas(
            error::ErrorResponse,
            api::health::HealthResponse,
            models::UserInfo,
            models::GitHubRepository,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "GitHub user aggregation")
    )
)]
pub struct ApiDoc;
