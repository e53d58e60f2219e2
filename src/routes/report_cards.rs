use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::ReportCardService;
use crate::utils::SafeIDI64;

static REPORT_CARD_SERVICE: Lazy<ReportCardService> = Lazy::new(ReportCardService::new_lazy);

pub async fn my_report_card(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_CARD_SERVICE.my_report_card(&req).await
}

pub async fn student_report_card(
    req: HttpRequest,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    REPORT_CARD_SERVICE
        .student_report_card(&req, student_id.0)
        .await
}

// 配置路由
pub fn configure_report_card_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/report-card")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route(web::get().to(my_report_card)),
            )
            .service(
                web::resource("/students/{id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route(web::get().to(student_report_card)),
            ),
    );
}
