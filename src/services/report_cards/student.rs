use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ReportCardService, load_report_card};
use crate::models::{
    ApiResponse, ErrorCode,
    teaching_assignments::entities::TeachingAssignmentView,
    users::entities::{User, UserRole},
};
use crate::services::{current_user, internal_error};

/// 教师只能查看自己任课班级的学生
fn check_teacher_linked(
    assignments: &[TeachingAssignmentView],
    class_id: i64,
) -> Result<(), HttpResponse> {
    if assignments.iter().any(|a| a.class_id == class_id) {
        Ok(())
    } else {
        Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You do not teach this student's class",
        )))
    }
}

async fn check_viewer_access(
    service: &ReportCardService,
    request: &HttpRequest,
    viewer: &User,
    class_id: i64,
) -> Result<(), HttpResponse> {
    if viewer.role != UserRole::Teacher {
        return Ok(());
    }

    let storage = service.get_storage(request);
    match storage.list_teaching_assignments(Some(viewer.id)).await {
        Ok(assignments) => check_teacher_linked(&assignments, class_id),
        Err(e) => Err(internal_error(format!(
            "Failed to list teaching assignments: {e}"
        ))),
    }
}

pub async fn student_report_card(
    service: &ReportCardService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let viewer = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let student = match storage.get_user_by_id(student_id).await {
        Ok(Some(user)) if user.is_student() => user,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get student: {e}"))),
    };

    let Some(class_id) = student.class_id else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ReportCardUnavailable,
            "Student is not assigned to a class",
        )));
    };

    if let Err(resp) = check_viewer_access(service, request, &viewer, class_id).await {
        return Ok(resp);
    }

    match load_report_card(storage.as_ref(), student.id, student.full_name, class_id).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            report,
            "Report card retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to build report card: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(class_id: i64) -> TeachingAssignmentView {
        TeachingAssignmentView {
            id: class_id * 10,
            teacher_id: 5,
            teacher_name: "Prof".into(),
            class_id,
            class_name: format!("Turma {class_id}"),
            subject_id: 1,
            subject_name: "Matemática".into(),
        }
    }

    #[test]
    fn test_teacher_must_teach_student_class() {
        let assignments = vec![assignment(3), assignment(4)];
        assert!(check_teacher_linked(&assignments, 4).is_ok());

        let other = check_teacher_linked(&assignments, 9).unwrap_err();
        assert_eq!(other.status(), 403);

        assert_eq!(check_teacher_linked(&[], 3).unwrap_err().status(), 403);
    }
}
