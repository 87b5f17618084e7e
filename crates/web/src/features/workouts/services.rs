use sqlx::PgPool;
use storage::{
    dto::workout::{AdjustWorkoutRequest, CreateWorkoutRequest, UpdateWorkoutRequest},
    error::Result,
    models::Workout,
    repository::workout::WorkoutRepository,
};

/// List all workouts
pub async fn list_workouts(pool: &PgPool) -> Result<Vec<Workout>> {
    let repo = WorkoutRepository::new(pool);
    repo.list().await
}

/// Get workout by id
pub async fn get_workout(pool: &PgPool, id: i64) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new workout
pub async fn create_workout(pool: &PgPool, request: &CreateWorkoutRequest) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    let workout = repo.create(request).await?;
    tracing::info!(id = workout.id, name = %workout.name, "Workout created");
    Ok(workout)
}

/// Update the supplied fields of a workout
pub async fn update_workout(
    pool: &PgPool,
    id: i64,
    request: &UpdateWorkoutRequest,
) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);

    // Nothing to write; still answer with the current row (or 404).
    if request.is_empty() {
        return repo.find_by_id(id).await;
    }

    repo.update(id, request).await
}

/// Apply relative changes to a workout's counters
pub async fn adjust_workout(
    pool: &PgPool,
    id: i64,
    request: &AdjustWorkoutRequest,
) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    repo.adjust(id, request).await
}

/// Delete a workout
pub async fn delete_workout(pool: &PgPool, id: i64) -> Result<()> {
    let repo = WorkoutRepository::new(pool);
    repo.delete(id).await?;
    tracing::info!(id, "Workout deleted");
    Ok(())
}
