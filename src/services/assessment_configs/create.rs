use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssessmentConfigService, advisory_for};
use crate::models::{
    ApiResponse, ErrorCode,
    assessments::{
        requests::CreateAssessmentConfigRequest, responses::AssessmentConfigResponse,
    },
};
use crate::services::{current_user, internal_error};

pub async fn create_config(
    service: &AssessmentConfigService,
    request: &HttpRequest,
    config: CreateAssessmentConfigRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = config.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::AssessmentConfigInvalid, msg)));
    }

    let storage = service.get_storage(request);
    let config = match storage.create_config(user.id, config).await {
        Ok(config) => config,
        Err(e) if e.is_foreign_key() => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AssessmentConfigInvalid,
                "Class or subject does not exist",
            )));
        }
        Err(e) => {
            return Ok(internal_error(format!(
                "Assessment config creation failed: {e}"
            )));
        }
    };

    let advisory = advisory_for(storage.as_ref(), &config).await;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        AssessmentConfigResponse { config, advisory },
        "Assessment config created successfully",
    )))
}
