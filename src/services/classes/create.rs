use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::ClassPayload};
use crate::services::internal_error;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: ClassPayload,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = class_data.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ClassFieldsMissing, msg)));
    }

    let storage = service.get_storage(request);
    match storage.create_class(class_data).await {
        Ok(class) => {
            tracing::info!("Class {} created", class.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(class, "Class created successfully")))
        }
        Err(e) => Ok(internal_error(format!("Class creation failed: {e}"))),
    }
}
