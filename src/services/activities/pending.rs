use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::ApiResponse;
use crate::services::{current_user, internal_error};

// 最早提交的排在前面
pub async fn list_pending(
    service: &ActivityService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);
    match storage.list_pending_submissions(user.id).await {
        Ok(pending) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            pending,
            "Pending submissions retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!(
            "Failed to list pending submissions: {e}"
        ))),
    }
}
