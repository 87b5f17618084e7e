use reqwest::Response;
use serde::de::DeserializeOwned;
use storage::{
    dto::{
        common::SuccessResponse,
        workout::{AdjustWorkoutRequest, CreateWorkoutRequest, UpdateWorkoutRequest},
    },
    models::Workout,
};

use crate::error::{ClientError, Result};

/// Thin typed wrapper over the `/api/workouts` endpoints.
#[derive(Debug, Clone)]
pub struct WorkoutsClient {
    base_url: String,
    client: reqwest::Client,
}

impl WorkoutsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/workouts{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Workout>> {
        let response = self.client.get(self.url("")).send().await?;
        decode(response).await
    }

    pub async fn create(&self, request: &CreateWorkoutRequest) -> Result<Workout> {
        let response = self.client.post(self.url("")).json(request).send().await?;
        decode(response).await
    }

    pub async fn update(&self, request: &UpdateWorkoutRequest) -> Result<Workout> {
        let response = self.client.patch(self.url("")).json(request).send().await?;
        decode(response).await
    }

    pub async fn adjust(&self, request: &AdjustWorkoutRequest) -> Result<Workout> {
        let response = self
            .client
            .patch(self.url("/adjust"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(""))
            .query(&[("id", id)])
            .send()
            .await?;

        let ack: SuccessResponse = decode(response).await?;
        if !ack.success {
            return Err(ClientError::ApiError {
                status: 200,
                message: "delete was not acknowledged".to_string(),
            });
        }

        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await?;
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        tracing::debug!(status = status.as_u16(), %message, "API call failed");
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = WorkoutsClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/adjust"), "http://localhost:3000/api/workouts/adjust");
    }

    #[tokio::test]
    async fn test_truncated_error_body_is_a_request_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            // Promises 100 bytes, sends 7, then hangs up.
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\n{\"error")
                .await
                .unwrap();
        });

        let client = WorkoutsClient::new(format!("http://{}", addr));
        let result = client.list().await;

        assert!(matches!(result, Err(ClientError::RequestError(_))));
    }
}
