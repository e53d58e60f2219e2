use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeachingAssignmentService;
use crate::models::ApiResponse;
use crate::services::{current_user, internal_error};

pub async fn list_assignments(
    service: &TeachingAssignmentService,
    request: &HttpRequest,
    only_mine: bool,
) -> ActixResult<HttpResponse> {
    let teacher_id = if only_mine {
        match current_user(request) {
            Ok(user) => Some(user.id),
            Err(resp) => return Ok(resp),
        }
    } else {
        None
    };

    let storage = service.get_storage(request);
    match storage.list_teaching_assignments(teacher_id).await {
        Ok(assignments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignments,
            "Teaching assignments retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!(
            "Failed to list teaching assignments: {e}"
        ))),
    }
}
