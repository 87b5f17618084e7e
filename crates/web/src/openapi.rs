use utoipa::OpenApi;

use crate::features::workouts::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_workouts,
        handlers::get_workout,
        handlers::create_workout,
        handlers::update_workout,
        handlers::adjust_workout,
        handlers::delete_workout,
    ),
    components(
        schemas(
            storage::models::Workout,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::UpdateWorkoutRequest,
            storage::dto::workout::AdjustWorkoutRequest,
            storage::dto::common::SuccessResponse,
        )
    ),
    tags(
        (name = "workouts", description = "Workout tracking endpoints"),
    )
)]
pub struct ApiDoc;
