use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::cache::user_cache_key;
use crate::models::{ApiResponse, ErrorCode, users::requests::AssignClassRequest};
use crate::services::internal_error;

pub async fn assign_class(
    service: &UserService,
    assign: AssignClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(class_id) = assign.class_id {
        match storage.get_class_by_id(class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    "Class not found",
                )));
            }
            Err(e) => return Ok(internal_error(format!("Failed to get class: {e}"))),
        }
    }

    match storage
        .assign_student_class(assign.student_id, assign.class_id)
        .await
    {
        Ok(Some(student)) => {
            // 缓存中的用户仍是旧班级
            if let Some(cache) = service.get_cache(request) {
                cache.remove(&user_cache_key(student.id)).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Class assignment updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(internal_error(format!("Class assignment failed: {e}"))),
    }
}
