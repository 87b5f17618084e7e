use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        coerce::parse_id,
        common::SuccessResponse,
        workout::{
            AdjustWorkoutRequest, CreateWorkoutRequest, DeleteWorkoutParams, UpdateWorkoutRequest,
        },
    },
    models::Workout,
};

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    responses(
        (status = 200, description = "All workouts, oldest first", body = Vec<Workout>),
        (status = 500, description = "Store error")
    ),
    tag = "workouts"
)]
pub async fn list_workouts(State(db): State<Database>) -> WebResult<Response> {
    let workouts = services::list_workouts(db.pool()).await?;

    Ok(Json(workouts).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    responses(
        (status = 200, description = "Workout found", body = Workout),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(State(db): State<Database>, Path(id): Path<i64>) -> WebResult<Response> {
    let workout = services::get_workout(db.pool(), id).await?;

    Ok(Json(workout).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 200, description = "Workout created", body = Workout),
        (status = 500, description = "Store error")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Json(req): Json<CreateWorkoutRequest>,
) -> WebResult<Response> {
    let workout = services::create_workout(db.pool(), &req).await?;

    Ok(Json(workout).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/workouts",
    request_body = UpdateWorkoutRequest,
    responses(
        (status = 200, description = "Workout updated", body = Workout),
        (status = 404, description = "Missing or unknown id"),
        (status = 500, description = "Store error")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(db): State<Database>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> WebResult<Response> {
    let id = req.id.ok_or(WebError::MissingParameter("id"))?;

    let updated = services::update_workout(db.pool(), id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/workouts/adjust",
    request_body = AdjustWorkoutRequest,
    responses(
        (status = 200, description = "Counters adjusted", body = Workout),
        (status = 404, description = "Missing or unknown id"),
        (status = 500, description = "Store error")
    ),
    tag = "workouts"
)]
pub async fn adjust_workout(
    State(db): State<Database>,
    Json(req): Json<AdjustWorkoutRequest>,
) -> WebResult<Response> {
    let id = req.id.ok_or(WebError::MissingParameter("id"))?;

    let adjusted = services::adjust_workout(db.pool(), id, &req).await?;

    Ok(Json(adjusted).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workouts",
    params(DeleteWorkoutParams),
    responses(
        (status = 200, description = "Workout deleted", body = SuccessResponse),
        (status = 404, description = "Missing or unknown id"),
        (status = 500, description = "Store error")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    Query(params): Query<DeleteWorkoutParams>,
) -> WebResult<Response> {
    let raw_id = params
        .id
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or(WebError::MissingParameter("id"))?;

    // No row can have an id that does not parse.
    let id = parse_id(raw_id).ok_or(WebError::NotFound)?;

    services::delete_workout(db.pool(), id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
