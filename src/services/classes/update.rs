use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::ClassPayload};
use crate::services::internal_error;

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    class_data: ClassPayload,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = class_data.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ClassFieldsMissing, msg)));
    }

    let storage = service.get_storage(request);
    match storage.update_class(class_id, class_data).await {
        Ok(Some(class)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => Ok(internal_error(format!("Class update failed: {e}"))),
    }
}
