use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Server responded with {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Workout id is required")]
    MissingId,

    #[error("Workout name is required")]
    EmptyName,

    #[error("Workout {0} is not loaded")]
    UnknownWorkout(i64),
}
