use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use crate::models::{
    ApiResponse, ErrorCode,
    lessons::{entities::LessonView, requests::LessonRangeQuery},
    users::entities::{User, UserRole},
};
use crate::services::{current_user, internal_error};
use crate::storage::LessonFilter;

/// 学生看本班，教师看自己，管理员看全部；未分班学生返回 None
fn filter_for(user: &User, query: &LessonRangeQuery) -> Option<LessonFilter> {
    let mut filter = LessonFilter {
        start_date: query.start_date,
        end_date: query.end_date,
        class_id: None,
        teacher_id: None,
    };
    match user.role {
        UserRole::Student => filter.class_id = Some(user.class_id?),
        UserRole::Teacher => filter.teacher_id = Some(user.id),
        UserRole::Admin => {}
    }
    Some(filter)
}

pub async fn list_lessons(
    service: &LessonService,
    request: &HttpRequest,
    query: LessonRangeQuery,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if query.start_date > query.end_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "start_date must not be after end_date",
        )));
    }

    let Some(filter) = filter_for(&user, &query) else {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            Vec::<LessonView>::new(),
            "Student is not assigned to a class",
        )));
    };

    let storage = service.get_storage(request);
    match storage.list_lessons(filter).await {
        Ok(lessons) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            lessons,
            "Lessons retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list lessons: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(role: UserRole, class_id: Option<i64>) -> User {
        User {
            id: 5,
            full_name: "Teste".into(),
            email: "teste@escola.test".into(),
            password_hash: String::new(),
            role,
            class_id,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn range() -> LessonRangeQuery {
        LessonRangeQuery {
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        }
    }

    #[test]
    fn test_filter_by_role() {
        let student = filter_for(&user(UserRole::Student, Some(9)), &range()).unwrap();
        assert_eq!(student.class_id, Some(9));
        assert_eq!(student.teacher_id, None);

        let teacher = filter_for(&user(UserRole::Teacher, None), &range()).unwrap();
        assert_eq!(teacher.teacher_id, Some(5));
        assert_eq!(teacher.class_id, None);

        let admin = filter_for(&user(UserRole::Admin, None), &range()).unwrap();
        assert_eq!((admin.class_id, admin.teacher_id), (None, None));
    }

    #[test]
    fn test_unassigned_student_has_no_filter() {
        assert!(filter_for(&user(UserRole::Student, None), &range()).is_none());
    }
}
