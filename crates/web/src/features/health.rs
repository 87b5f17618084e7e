use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use storage::Database;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn routes() -> Router<Database> {
    Router::new().route("/health", get(health))
}
