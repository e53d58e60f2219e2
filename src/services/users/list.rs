use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{entities::UserRole, requests::UserListQuery},
};
use crate::services::{current_user, internal_error};

pub async fn list_users(
    service: &UserService,
    query: UserListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let role = match (user.role, query.role) {
        (UserRole::Admin, role) => role,
        (UserRole::Teacher, None | Some(UserRole::Student)) => Some(UserRole::Student),
        _ => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Teachers can only list students",
            )));
        }
    };

    let storage = service.get_storage(request);
    match storage.list_users(role).await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            users,
            "User list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list users: {e}"))),
    }
}
