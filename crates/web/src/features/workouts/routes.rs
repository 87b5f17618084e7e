use axum::{
    Router,
    routing::{get, patch},
};
use storage::Database;

use super::handlers::{
    adjust_workout, create_workout, delete_workout, get_workout, list_workouts, update_workout,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/workouts",
            get(list_workouts)
                .post(create_workout)
                .patch(update_workout)
                .delete(delete_workout),
        )
        .route("/workouts/adjust", patch(adjust_workout))
        .route("/workouts/:id", get(get_workout))
}
