use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::auth::register,
        api::auth::login,
        api::achievements::list_achievements,
        api::achievements::add_achievement,
        api::achievements::rewrite_summary,
        api::gamification::get_user_level,
        // Add other endpoints here as we document them
    ),
    components(
        schemas(
            api::auth::Credentials,
            api::achievements::AddAchievementRequest,
            api::achievements::SummaryPayload,
        )
    ),
    tags(
        (name = "achievement-tracker", description = "Achievement Tracker API")
    )
)]
pub struct ApiDoc;
