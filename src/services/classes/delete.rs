use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    // 有学生的班级不可删除
    match storage.count_students_in_class(class_id).await {
        Ok(0) => {}
        Ok(count) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ClassHasStudents,
                format!("Class still has {count} enrolled student(s)"),
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to count students: {e}"))),
    }

    match storage.delete_class(class_id).await {
        Ok(true) => {
            tracing::info!("Class {} deleted", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Class deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) if e.is_foreign_key() => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(
                ErrorCode::ClassInUse,
                "Class is still referenced by lessons, assignments or scores",
            ),
        )),
        Err(e) => Ok(internal_error(format!("Class deletion failed: {e}"))),
    }
}
