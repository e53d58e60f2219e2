use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssessmentConfigService, advisory_for, owned_config};
use crate::models::{
    ApiResponse, ErrorCode,
    assessments::{
        requests::ToggleAssessmentConfigRequest, responses::AssessmentConfigResponse,
    },
};
use crate::services::{current_user, internal_error};

pub async fn toggle_config(
    service: &AssessmentConfigService,
    request: &HttpRequest,
    config_id: i64,
    toggle: ToggleAssessmentConfigRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);
    if let Err(resp) = owned_config(storage.as_ref(), config_id, user.id).await {
        return Ok(resp);
    }

    let config = match storage.set_config_active(config_id, toggle.active).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssessmentConfigNotFound,
                "Assessment config not found",
            )));
        }
        Err(e) => {
            return Ok(internal_error(format!(
                "Assessment config update failed: {e}"
            )));
        }
    };

    // 只有重新启用时才需要检查权重
    let advisory = if config.active {
        advisory_for(storage.as_ref(), &config).await
    } else {
        None
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssessmentConfigResponse { config, advisory },
        "Assessment config updated successfully",
    )))
}
