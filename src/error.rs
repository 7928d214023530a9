use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::future::Future;
use tokio::task::JoinError;
use tracing::error;

use crate::models::ErrorBody;

pub const QUOTES_ERROR: &str = "Failed to fetch quotes";
pub const TAG_ERROR: &str = "Failed to fetch quotes by tag";

// Internal failure, rendered as 500 {error, message}
#[derive(Debug)]
pub struct ApiError {
    error: &'static str,
    message: String,
}

impl ApiError {
    pub fn internal(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }

    pub fn from_join(error: &'static str, err: JoinError) -> Self {
        let message = match err.try_into_panic() {
            Ok(payload) => panic_message(payload.as_ref()),
            Err(err) => err.to_string(),
        };
        Self::internal(error, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = self.error, message = %self.message, "request failed");
        let body = ErrorBody {
            error: self.error.to_string(),
            message: self.message,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown internal error".to_string()
    }
}

// Run `fut` on its own task; a panic there becomes an ApiError tagged `error`
pub async fn run_isolated<F, T>(error: &'static str, fut: F) -> Result<T, ApiError>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(fut)
        .await
        .map_err(|e| ApiError::from_join(error, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quote;

    async fn explode() -> Vec<Quote> {
        panic!("cache exploded")
    }

    async fn body_of(err: ApiError) -> (StatusCode, ErrorBody) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn panicking_tag_retrieval_reports_tag_error() {
        let err = run_isolated(TAG_ERROR, explode()).await.unwrap_err();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to fetch quotes by tag");
        assert_eq!(body.message, "cache exploded");
    }

    #[tokio::test]
    async fn panicking_retrieval_reports_quotes_error() {
        let err = run_isolated(QUOTES_ERROR, explode()).await.unwrap_err();
        let (_, body) = body_of(err).await;
        assert_eq!(body.error, "Failed to fetch quotes");
    }

    #[tokio::test]
    async fn successful_retrieval_passes_through() {
        let quotes = run_isolated(QUOTES_ERROR, async { vec![1, 2, 3] }).await.unwrap();
        assert_eq!(quotes, vec![1, 2, 3]);
    }

    #[test]
    fn non_string_payload() {
        assert_eq!(panic_message(&42_u8), "Unknown internal error");
        assert_eq!(panic_message(&"boom"), "boom");
    }
}
