pub mod activities;
pub mod assessment_configs;
pub mod auth;
pub mod classes;
pub mod lessons;
pub mod report_cards;
pub mod scores;
pub mod subjects;
pub mod system;
pub mod teaching_assignments;
pub mod users;

pub use activities::ActivityService;
pub use assessment_configs::AssessmentConfigService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use lessons::LessonService;
pub use report_cards::ReportCardService;
pub use scores::ScoreService;
pub use subjects::SubjectService;
pub use system::SystemService;
pub use teaching_assignments::TeachingAssignmentService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, users::entities::User};

/// 取当前登录用户，未经 RequireJWT 时返回 401 响应
pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })
}

pub(crate) fn internal_error(message: String) -> HttpResponse {
    error!("{}", message);
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::InternalServerError, message))
}
