use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeachingAssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;

pub async fn delete_assignment(
    service: &TeachingAssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_teaching_assignment(assignment_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Teaching assignment deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeachingAssignmentNotFound,
            "Teaching assignment not found",
        ))),
        Err(e) => Ok(internal_error(format!(
            "Teaching assignment deletion failed: {e}"
        ))),
    }
}
