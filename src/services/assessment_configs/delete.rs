use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssessmentConfigService, owned_config};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error};

pub async fn delete_config(
    service: &AssessmentConfigService,
    request: &HttpRequest,
    config_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);
    if let Err(resp) = owned_config(storage.as_ref(), config_id, user.id).await {
        return Ok(resp);
    }

    match storage.delete_config(config_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Assessment config deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssessmentConfigNotFound,
            "Assessment config not found",
        ))),
        Err(e) => Ok(internal_error(format!(
            "Assessment config deletion failed: {e}"
        ))),
    }
}
