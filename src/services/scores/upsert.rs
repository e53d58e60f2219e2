use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScoreService;
use crate::models::{
    ApiResponse, ErrorCode,
    assessments::requests::UpsertScoreRequest,
    users::entities::User,
};
use crate::services::{current_user, internal_error};

/// 成绩只能记给该班级的学生
fn check_student_in_class(student: Option<User>, class_id: i64) -> Result<(), HttpResponse> {
    match student {
        Some(student) if student.is_student() && student.class_id == Some(class_id) => Ok(()),
        Some(student) if student.is_student() => Err(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::ScoreInvalid, "Student is not in this class"),
        )),
        _ => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Student not found",
        ))),
    }
}

pub async fn upsert_score(
    service: &ScoreService,
    request: &HttpRequest,
    mut score: UpsertScoreRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = score.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ScoreInvalid, msg)));
    }
    score.note = score
        .note
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let storage = service.get_storage(request);

    let student = match storage.get_user_by_id(score.student_id).await {
        Ok(student) => student,
        Err(e) => return Ok(internal_error(format!("Failed to get student: {e}"))),
    };
    if let Err(resp) = check_student_in_class(student, score.class_id) {
        return Ok(resp);
    }

    let recorded_on = chrono::Utc::now().date_naive();
    match storage.upsert_score(user.id, score, recorded_on).await {
        Ok(saved) => {
            tracing::debug!("Score {} saved by teacher {}", saved.id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(saved, "Score saved successfully")))
        }
        Err(e) if e.is_foreign_key() => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::ScoreInvalid, "Class or subject does not exist"),
        )),
        Err(e) => Ok(internal_error(format!("Failed to save score: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    fn user(role: UserRole, class_id: Option<i64>) -> User {
        User {
            id: 11,
            full_name: "Aluno".into(),
            email: "aluno@escola.test".into(),
            password_hash: String::new(),
            role,
            class_id,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_student_must_belong_to_class() {
        assert!(check_student_in_class(Some(user(UserRole::Student, Some(3))), 3).is_ok());

        let other = check_student_in_class(Some(user(UserRole::Student, Some(4))), 3).unwrap_err();
        assert_eq!(other.status(), 400);

        let teacher = check_student_in_class(Some(user(UserRole::Teacher, None)), 3).unwrap_err();
        assert_eq!(teacher.status(), 404);

        assert_eq!(check_student_in_class(None, 3).unwrap_err().status(), 404);
    }
}
