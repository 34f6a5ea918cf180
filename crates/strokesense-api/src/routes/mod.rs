use axum::http::Uri;

use crate::error::ApiError;

pub mod analyze;
pub mod health;

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
