use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "active",
        version: env!("CARGO_PKG_VERSION"),
    })
}
