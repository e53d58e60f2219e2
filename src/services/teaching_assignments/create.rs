use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeachingAssignmentService;
use crate::models::{
    ApiResponse, ErrorCode, teaching_assignments::requests::CreateTeachingAssignmentRequest,
    users::entities::UserRole,
};
use crate::services::internal_error;

pub async fn create_assignment(
    service: &TeachingAssignmentService,
    request: &HttpRequest,
    assignment: CreateTeachingAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只能关联教师
    match storage.get_user_by_id(assignment.teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserRoleInvalid,
                "User is not a teacher",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get teacher: {e}"))),
    }

    match storage.create_teaching_assignment(assignment).await {
        Ok(view) => Ok(HttpResponse::Created().json(ApiResponse::success(
            view,
            "Teaching assignment created successfully",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TeachingAssignmentAlreadyExists,
            "Teacher is already assigned to this class and subject",
        ))),
        Err(e) if e.is_foreign_key() => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::BadRequest, "Class or subject does not exist"),
        )),
        Err(e) => Ok(internal_error(format!(
            "Teaching assignment creation failed: {e}"
        ))),
    }
}
