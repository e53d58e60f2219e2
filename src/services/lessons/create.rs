use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use crate::models::{ApiResponse, ErrorCode, lessons::requests::CreateLessonRequest};
use crate::services::{current_user, internal_error};

pub async fn create_lesson(
    service: &LessonService,
    request: &HttpRequest,
    lesson: CreateLessonRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let new_lesson = match lesson.into_new_lesson(user.id) {
        Ok(lesson) => lesson,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::LessonInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    match storage.create_lesson(new_lesson).await {
        Ok(lesson) => {
            tracing::info!("Lesson {} scheduled by teacher {}", lesson.id, user.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(lesson, "Lesson created successfully")))
        }
        Err(e) if e.is_foreign_key() => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::LessonInvalid, "Class or subject does not exist"),
        )),
        Err(e) => Ok(internal_error(format!("Lesson creation failed: {e}"))),
    }
}
