use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teaching_assignments::requests::CreateTeachingAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::services::TeachingAssignmentService;
use crate::utils::SafeIDI64;

static TEACHING_ASSIGNMENT_SERVICE: Lazy<TeachingAssignmentService> =
    Lazy::new(TeachingAssignmentService::new_lazy);

pub async fn list_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHING_ASSIGNMENT_SERVICE.list_assignments(&req).await
}

pub async fn list_my_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHING_ASSIGNMENT_SERVICE.list_my_assignments(&req).await
}

pub async fn create_assignment(
    req: HttpRequest,
    assignment: web::Json<CreateTeachingAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    TEACHING_ASSIGNMENT_SERVICE
        .create_assignment(&req, assignment.into_inner())
        .await
}

pub async fn delete_assignment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHING_ASSIGNMENT_SERVICE
        .delete_assignment(&req, id.0)
        .await
}

// 配置路由
pub fn configure_teaching_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teaching-assignments")
            .wrap(middlewares::RequireJWT)
            // /mine 须在 /{id} 之前注册
            .service(
                web::resource("/mine").route(
                    web::get()
                        .to(list_my_assignments)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment)),
            )
            .service(
                web::resource("/{id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::delete().to(delete_assignment)),
            ),
    );
}
