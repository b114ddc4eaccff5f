//! HTTP request handlers for the analysis server.
//!
//! Implements the contract analysis endpoint and health check using axum.

use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use clauselens_engine::{
    analyze, calculate_risk_metrics, AnalysisResult, EngineError, RiskMetrics,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Contract analysis request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Full contract text to analyze; empty or missing text is rejected
    #[serde(default)]
    pub contract_text: String,

    /// Optional display name echoed back in the response
    #[serde(default)]
    pub contract_name: Option<String>,
}

/// Successful analysis response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Always true on the success path
    pub success: bool,
    /// Echo of the requested contract name
    pub contract_name: Option<String>,
    /// Full pipeline output
    pub analysis: AnalysisResult,
    /// Category scores and guidance
    pub metrics: RiskMetrics,
    /// RFC 3339 timestamp of the analysis
    pub timestamp: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall service status
    pub status: String,
    /// Running package version
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Client error: unusable input
    InvalidInput(&'static str),
    /// Unexpected processing failure; details stay server-side
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            AppError::Internal(msg) => {
                error!(error = %msg, "analysis request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to analyze contract".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::EmptyInput => AppError::InvalidInput("Contract text is required"),
        }
    }
}

/// POST /api/analyze - Run the full analysis pipeline on a contract
///
/// Returns the analysis record and risk metrics, or a 400 when the contract
/// text is missing. Analysis is all-or-nothing: no partial result is ever
/// returned.
async fn analyze_contract(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let analysis = analyze(&request.contract_text)?;
    let metrics = calculate_risk_metrics(
        &request.contract_text,
        &analysis.clauses,
        &analysis.risks,
    );

    info!(
        analysis = %analysis.id,
        contract = request.contract_name.as_deref().unwrap_or("unnamed"),
        overall_score = metrics.overall_score,
        "analysis served"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        contract_name: request.contract_name,
        analysis,
        metrics,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /health - Service health check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(config: &ServerConfig) -> AxumRouter {
    AxumRouter::new()
        .route("/api/analyze", post(analyze_contract))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn test_router() -> AxumRouter {
        create_router(&ServerConfig::default_test_config())
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"contractText": "Each party shall maintain confidentiality. Payment of fees is due in 30 days.", "contractName": "msa.txt"}"#,
            ))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], serde_json::json!(true));
        assert_eq!(body["contractName"], "msa.txt");
        assert!(body["analysis"]["clauses"].as_array().is_some());
        assert!(body["metrics"]["overallScore"].as_u64().unwrap() <= 100);
        assert!(body["timestamp"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_analyze_missing_text_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"contractName": "empty.txt"}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Contract text is required");
    }

    #[tokio::test]
    async fn test_analyze_blank_text_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"contractText": "   "}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
