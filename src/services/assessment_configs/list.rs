use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentConfigService;
use crate::models::ApiResponse;
use crate::services::{current_user, internal_error};

pub async fn list_configs(
    service: &AssessmentConfigService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);
    match storage.list_configs_for_teacher(user.id).await {
        Ok(configs) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            configs,
            "Assessment configs retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!(
            "Failed to list assessment configs: {e}"
        ))),
    }
}
