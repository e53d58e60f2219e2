use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::{
    ApiResponse, ErrorCode, activities::entities::ActivityView, users::entities::UserRole,
};
use crate::services::{current_user, internal_error};

pub async fn list_activities(
    service: &ActivityService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let result = match (user.role, user.class_id) {
        (UserRole::Student, Some(class_id)) => {
            storage.list_activities_for_student(class_id, user.id).await
        }
        (UserRole::Student, None) => Ok(Vec::<ActivityView>::new()),
        (UserRole::Teacher, _) => storage.list_activities_for_teacher(user.id).await,
        (UserRole::Admin, _) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Activities are listed per student or teacher",
            )));
        }
    };

    match result {
        Ok(activities) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            activities,
            "Activities retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list activities: {e}"))),
    }
}
