pub mod applications;
pub mod auth;
pub mod jobs;

use actix_web::HttpResponse;
use serde_json::json;

use crate::adapters::http::errors::ApiError;

/// GET /api/health
pub async fn health_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "Backend is running!" }))
}

/// Fallback for unmatched routes
pub async fn not_found_handler() -> Result<HttpResponse, ApiError> {
  Err(ApiError::NotFound("Resource not found".to_string()))
}
