use super::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

// 用户列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListQuery {
    pub role: Option<UserRole>,
}

// 用户创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    /// 仅学生保留
    #[serde(default)]
    pub class_id: Option<i64>,
}

// 分配班级请求，class_id 为空表示移出班级
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct AssignClassRequest {
    pub student_id: i64,
    #[serde(default)]
    pub class_id: Option<i64>,
}
