use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assessments::requests::{
    CreateAssessmentConfigRequest, ToggleAssessmentConfigRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssessmentConfigService;
use crate::utils::SafeIDI64;

static ASSESSMENT_CONFIG_SERVICE: Lazy<AssessmentConfigService> =
    Lazy::new(AssessmentConfigService::new_lazy);

pub async fn list_configs(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSESSMENT_CONFIG_SERVICE.list_configs(&req).await
}

pub async fn create_config(
    req: HttpRequest,
    config: web::Json<CreateAssessmentConfigRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_CONFIG_SERVICE
        .create_config(&req, config.into_inner())
        .await
}

pub async fn toggle_config(
    req: HttpRequest,
    config_id: SafeIDI64,
    toggle: web::Json<ToggleAssessmentConfigRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_CONFIG_SERVICE
        .toggle_config(&req, config_id.0, toggle.into_inner())
        .await
}

pub async fn delete_config(req: HttpRequest, config_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSESSMENT_CONFIG_SERVICE
        .delete_config(&req, config_id.0)
        .await
}

// 配置路由
pub fn configure_assessment_config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assessment-configs")
            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_configs))
                    .route(web::post().to(create_config)),
            )
            .route("/{id}/toggle", web::put().to(toggle_config))
            .route("/{id}", web::delete().to(delete_config)),
    );
}
