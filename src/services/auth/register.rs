use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::RegisterTestRequest, responses::UserInfoResponse},
    users::requests::CreateUserRequest,
};
use crate::services::internal_error;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_full_name, validate_password_simple};

/// 仅开发环境可用
pub async fn handle_register_test(
    service: &AuthService,
    register_request: RegisterTestRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if !service.get_config().is_development() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Test registration is only available in development",
        )));
    }

    if let Err(msg) = validate_full_name(&register_request.full_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }
    let email = register_request.email.trim().to_lowercase();
    if let Err(msg) = validate_email(&email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    let password = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error(format!("Password hashing failed: {e}"))),
    };

    let storage = service.get_storage(request);
    let create = CreateUserRequest {
        full_name: register_request.full_name.trim().to_string(),
        email,
        password,
        role: register_request.role,
        class_id: None,
    };

    match storage.create_user(create).await {
        Ok(user) => {
            tracing::info!("Test user {} registered as {}", user.id, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                UserInfoResponse { user },
                "Registration successful",
            )))
        }
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserAlreadyExists,
            "Email already registered",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::RegisterFailed,
            format!("Registration failed: {e}"),
        ))),
    }
}
