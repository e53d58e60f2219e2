use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::activities::requests::{
    CreateActivityRequest, GradeSubmissionRequest, SubmitActivityRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ActivityService;
use crate::utils::SafeIDI64;

static ACTIVITY_SERVICE: Lazy<ActivityService> = Lazy::new(ActivityService::new_lazy);

pub async fn list_activities(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.list_activities(&req).await
}

pub async fn create_activity(
    req: HttpRequest,
    activity: web::Json<CreateActivityRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .create_activity(&req, activity.into_inner())
        .await
}

pub async fn submit_activity(
    req: HttpRequest,
    submission: web::Json<SubmitActivityRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.submit(&req, submission.into_inner()).await
}

pub async fn list_pending(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.list_pending(&req).await
}

pub async fn grade_submission(
    req: HttpRequest,
    submission_id: SafeIDI64,
    grade: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .grade(&req, submission_id.0, grade.into_inner())
        .await
}

// 配置路由
pub fn configure_activity_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/activities")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_activities).wrap(
                        middlewares::RequireRole::new_any(&[
                            &UserRole::Student,
                            &UserRole::Teacher,
                        ]),
                    ))
                    .route(
                        web::post()
                            .to(create_activity)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/submissions")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route(web::post().to(submit_activity)),
            )
            .service(
                web::resource("/submissions/pending")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::get().to(list_pending)),
            )
            .service(
                web::resource("/submissions/{id}/grade")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::put().to(grade_submission)),
            ),
    );
}
