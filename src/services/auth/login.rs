use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::services::internal_error;
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

const LOGIN_FAILED: &str = "Email, password or profile is incorrect";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let email = login_request.email.trim().to_lowercase();
    let user = match storage.get_user_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::AuthFailed, LOGIN_FAILED)));
        }
        Err(e) => return Ok(internal_error(format!("Login failed: {e}"))),
    };

    // 角色必须与登录入口一致
    if user.role != login_request.role
        || !verify_password(&login_request.password, &user.password_hash)
    {
        tracing::info!("Rejected login for user {}", user.id);
        return Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::AuthFailed, LOGIN_FAILED)));
    }

    match user.generate_token_pair() {
        Ok(token_pair) => {
            tracing::info!("User {} logged in as {}", user.id, user.role);

            let refresh_cookie =
                jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);
            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60,
                user,
                created_at: chrono::Utc::now(),
            };

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => Ok(internal_error(format!(
            "Login failed, unable to generate token: {e}"
        ))),
    }
}
