use axum::http::StatusCode;
use axum::response::IntoResponse;

/// GET /api/health - liveness probe
///
/// Reports 200 regardless of mail transport state.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "Server is up and running")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
