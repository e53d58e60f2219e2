use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::CreateSubjectRequest};
use crate::services::internal_error;

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let name = subject.name.trim();
    if name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Subject name is required",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_subject(name).await {
        Ok(subject) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(subject, "Subject created successfully"))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::SubjectAlreadyExists, "Subject already exists"),
        )),
        Err(e) => Ok(internal_error(format!("Subject creation failed: {e}"))),
    }
}
