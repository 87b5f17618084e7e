use sqlx::PgPool;

use crate::dto::workout::{AdjustWorkoutRequest, CreateWorkoutRequest, UpdateWorkoutRequest};
use crate::error::{Result, StorageError};
use crate::models::Workout;

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all workouts, oldest first
    pub async fn list(&self) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, name, sets, reps, weight, created_at
            FROM workouts
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    /// Find workout by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, name, sets, reps, weight, created_at
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// Create a new workout
    pub async fn create(&self, req: &CreateWorkoutRequest) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (name, sets, reps, weight)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, sets, reps, weight, created_at
            "#,
        )
        .bind(req.name.as_deref())
        .bind(req.sets)
        .bind(req.reps)
        .bind(req.weight)
        .fetch_one(self.pool)
        .await?;

        Ok(workout)
    }

    /// Overwrite the supplied fields, keeping the rest
    pub async fn update(&self, id: i64, req: &UpdateWorkoutRequest) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            UPDATE workouts
            SET name = COALESCE($2, name),
                sets = COALESCE($3, sets),
                reps = COALESCE($4, reps),
                weight = COALESCE($5, weight)
            WHERE id = $1
            RETURNING id, name, sets, reps, weight, created_at
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.sets)
        .bind(req.reps)
        .bind(req.weight)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// Add the deltas to the stored counters in one statement
    pub async fn adjust(&self, id: i64, req: &AdjustWorkoutRequest) -> Result<Workout> {
        // A decrement never goes below zero, or below the current value if
        // that is already negative.
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            UPDATE workouts
            SET sets = GREATEST(sets + $2, LEAST(sets, 0)),
                reps = GREATEST(reps + $3, LEAST(reps, 0)),
                weight = GREATEST(weight + $4, LEAST(weight, 0))
            WHERE id = $1
            RETURNING id, name, sets, reps, weight, created_at
            "#,
        )
        .bind(id)
        .bind(req.sets)
        .bind(req.reps)
        .bind(req.weight)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// Delete a workout by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query_scalar::<_, i64>("DELETE FROM workouts WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(())
    }
}
