use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::{ApiResponse, ErrorCode, activities::requests::GradeSubmissionRequest};
use crate::services::{current_user, internal_error};

pub async fn grade_submission(
    service: &ActivityService,
    request: &HttpRequest,
    submission_id: i64,
    grade: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = grade.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::SubmissionGradeInvalid, msg)));
    }

    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get submission: {e}"))),
    };

    // 只有课程所属教师可以批改
    match storage.get_activity_with_lesson(submission.activity_id).await {
        Ok(Some((_, lesson))) if lesson.teacher_id == user.id => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Only the lesson's teacher can grade this submission",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ActivityNotFound,
                "Activity not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get activity: {e}"))),
    }

    let comment = grade
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    match storage
        .grade_submission(submission_id, grade.score, comment)
        .await
    {
        Ok(Some(graded)) => {
            tracing::info!("Submission {} graded by teacher {}", submission_id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(graded, "Submission graded")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => Ok(internal_error(format!("Grading failed: {e}"))),
    }
}
