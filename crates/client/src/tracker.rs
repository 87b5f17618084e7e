use storage::{dto::workout::UpdateWorkoutRequest, models::Workout};

use crate::{
    api::WorkoutsClient,
    board::{Adjustment, Board, Draft},
    error::{ClientError, Result},
};

/// A client session: the board plus the API it mirrors.
///
/// Adds, edits and deletes wait for the server before touching the board.
/// Counter steps show up on the board immediately and are undone if the
/// server rejects them; the error is always handed back to the caller.
#[derive(Debug)]
pub struct Tracker {
    client: WorkoutsClient,
    board: Board,
}

impl Tracker {
    pub fn new(client: WorkoutsClient) -> Self {
        Self {
            client,
            board: Board::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board with the server's current list.
    pub async fn refresh(&mut self) -> Result<()> {
        let workouts = self.client.list().await?;
        tracing::debug!("Loaded {} workouts", workouts.len());
        self.board.load(workouts);
        Ok(())
    }

    pub async fn add(&mut self, draft: Draft) -> Result<Workout> {
        let request = draft.into_request()?;
        let created = self.client.create(&request).await?;
        self.board.insert(created.clone());
        Ok(created)
    }

    pub async fn edit(&mut self, mut request: UpdateWorkoutRequest) -> Result<Workout> {
        let id = request.id.ok_or(ClientError::MissingId)?;
        if let Some(name) = request.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(ClientError::EmptyName);
            }
        }

        let updated = self.client.update(&request).await?;
        tracing::debug!(id, "Workout updated");
        self.board.insert(updated.clone());
        Ok(updated)
    }

    pub async fn bump(&mut self, id: i64, adjustment: Adjustment) -> Result<Workout> {
        let pending = self.board.apply(id, adjustment)?;

        if pending.is_noop() {
            return self
                .board
                .get(id)
                .cloned()
                .ok_or(ClientError::UnknownWorkout(id));
        }

        match self.client.adjust(&pending.to_request()).await {
            Ok(workout) => {
                self.board.confirm(workout.clone());
                Ok(workout)
            }
            Err(e) => {
                tracing::warn!(
                    id,
                    field = %pending.field,
                    "Adjustment rejected, restoring previous value: {}",
                    e
                );
                self.board.rollback(&pending);
                Err(e)
            }
        }
    }

    pub async fn remove(&mut self, id: i64) -> Result<()> {
        self.client.delete(id).await?;
        self.board.remove(id);
        Ok(())
    }
}
