use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScoreService;
use crate::models::{
    ApiResponse, ErrorCode,
    assessments::requests::{ScoreQuery, validate_unit},
};
use crate::services::{current_user, internal_error};

pub async fn list_scores(
    service: &ScoreService,
    request: &HttpRequest,
    query: ScoreQuery,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = validate_unit(query.unit) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ScoreInvalid, msg)));
    }

    let storage = service.get_storage(request);
    match storage.list_scores(user.id, query).await {
        Ok(scores) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            scores,
            "Scores retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list scores: {e}"))),
    }
}
