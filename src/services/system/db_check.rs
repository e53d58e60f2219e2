use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::{ApiResponse, ErrorCode, system::responses::DbCheckResponse};

pub async fn db_check(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.ping().await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DbCheckResponse {
                database: "ok".to_string(),
                server_time: chrono::Utc::now(),
            },
            "Database connection is healthy",
        ))),
        Err(e) => {
            tracing::error!("Database check failed: {}", e);
            Ok(HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Database check failed: {e}"),
            )))
        }
    }
}
