use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ReportCardService, load_report_card};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, internal_error};

pub async fn my_report_card(
    service: &ReportCardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let class_id = match user.class_id {
        Some(class_id) if user.is_student() => class_id,
        _ => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ReportCardUnavailable,
                "Report card is only available to students assigned to a class",
            )));
        }
    };

    let storage = service.get_storage(request);
    match load_report_card(storage.as_ref(), user.id, user.full_name, class_id).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            report,
            "Report card retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to build report card: {e}"))),
    }
}
