use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::{ApiResponse, ErrorCode, activities::requests::CreateActivityRequest};
use crate::services::{current_user, internal_error};

pub async fn create_activity(
    service: &ActivityService,
    request: &HttpRequest,
    activity: CreateActivityRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = activity.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ActivityInvalid, msg)));
    }

    let storage = service.get_storage(request);

    // 课程必须属于当前教师
    match storage.get_lesson_by_id(activity.lesson_id).await {
        Ok(Some(lesson)) if lesson.teacher_id == user.id => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Lesson belongs to another teacher",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LessonNotFound,
                "Lesson not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get lesson: {e}"))),
    }

    match storage.create_activity(activity).await {
        Ok(activity) => {
            tracing::info!("Activity {} created by teacher {}", activity.id, user.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(activity, "Activity created successfully")))
        }
        Err(e) => Ok(internal_error(format!("Activity creation failed: {e}"))),
    }
}
