use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::{
    ApiResponse, ErrorCode,
    activities::{entities::Activity, requests::SubmitActivityRequest},
    lessons::entities::Lesson,
};
use crate::services::{current_user, internal_error};

/// 提交前置检查：活动属于学生班级且仍在开放期
fn check_submission_allowed(
    class_id: i64,
    activity: &Activity,
    lesson: &Lesson,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<(), HttpResponse> {
    if lesson.class_id != class_id {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Activity does not belong to your class",
        )));
    }
    if !activity.is_open_at(now) {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ActivityClosed,
            "Activity is no longer accepting submissions",
        )));
    }
    Ok(())
}

pub async fn submit_activity(
    service: &ActivityService,
    request: &HttpRequest,
    submission: SubmitActivityRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = submission.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::SubmissionInvalid, msg)));
    }

    let Some(class_id) = user.class_id else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Student is not assigned to a class",
        )));
    };

    let storage = service.get_storage(request);

    let (activity, lesson) = match storage.get_activity_with_lesson(submission.activity_id).await {
        Ok(Some(found)) => found,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ActivityNotFound,
                "Activity not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get activity: {e}"))),
    };

    if let Err(resp) = check_submission_allowed(class_id, &activity, &lesson, chrono::Utc::now()) {
        return Ok(resp);
    }

    let existing = match storage
        .get_submission_for_student(activity.id, user.id)
        .await
    {
        Ok(existing) => existing,
        Err(e) => return Ok(internal_error(format!("Failed to get submission: {e}"))),
    };

    match existing {
        Some(previous) if activity.allow_resubmission => {
            match storage.resubmit(previous.id, submission).await {
                Ok(updated) => Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(updated, "Submission updated successfully"))),
                Err(e) => Ok(internal_error(format!("Resubmission failed: {e}"))),
            }
        }
        Some(_) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::SubmissionAlreadyExists,
            "Activity was already submitted",
        ))),
        None => match storage.create_submission(user.id, submission).await {
            Ok(created) => {
                tracing::info!(
                    "Student {} submitted activity {}",
                    user.id,
                    created.submission.activity_id
                );
                Ok(HttpResponse::Created()
                    .json(ApiResponse::success(created, "Submission sent successfully")))
            }
            Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(
                ApiResponse::error_empty(
                    ErrorCode::SubmissionAlreadyExists,
                    "Activity was already submitted",
                ),
            )),
            Err(e) => Ok(internal_error(format!("Submission failed: {e}"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lessons::entities::LessonType;
    use chrono::{Duration, NaiveDate, NaiveTime, Utc};

    fn lesson(class_id: i64) -> Lesson {
        Lesson {
            id: 1,
            class_id,
            teacher_id: 2,
            subject_id: 3,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            topic: "Frações".into(),
            lesson_type: LessonType::Activity,
            created_at: Utc::now(),
        }
    }

    fn activity(access_until: Option<chrono::DateTime<Utc>>) -> Activity {
        Activity {
            id: 4,
            lesson_id: 1,
            description: "Lista 1".into(),
            due_at: Utc::now(),
            points: 10.0,
            allow_resubmission: false,
            access_until,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_other_class_is_forbidden() {
        let err = check_submission_allowed(8, &activity(None), &lesson(9), Utc::now()).unwrap_err();
        assert_eq!(err.status(), 403);
    }

    #[test]
    fn test_closed_activity_rejected() {
        let now = Utc::now();
        let closed = activity(Some(now - Duration::hours(1)));
        let err = check_submission_allowed(9, &closed, &lesson(9), now).unwrap_err();
        assert_eq!(err.status(), 400);

        let open = activity(Some(now + Duration::hours(1)));
        assert!(check_submission_allowed(9, &open, &lesson(9), now).is_ok());
    }
}
