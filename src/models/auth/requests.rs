use crate::models::users::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

// 用户登录请求，邮箱与角色必须同时匹配
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

// 开发环境下的测试注册
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterTestRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}
