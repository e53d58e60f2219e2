//! 用户存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::Result;
use crate::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建用户，只有学生保留班级
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();
        let class_id = if req.role == UserRole::Student {
            req.class_id
        } else {
            None
        };

        let model = ActiveModel {
            full_name: Set(req.full_name),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            class_id: Set(class_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建用户失败"))?;

        Ok(result.into_user())
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 列出用户，按姓名排序
    pub async fn list_users_impl(&self, role: Option<UserRole>) -> Result<Vec<User>> {
        let mut select = Users::find();
        if let Some(role) = role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        let users = select
            .order_by_asc(Column::FullName)
            .all(&self.db)
            .await
            .map_err(db_error("查询用户列表失败"))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(db_error("查询用户总数失败"))
    }

    /// 设置学生所在班级
    pub async fn assign_student_class_impl(
        &self,
        student_id: i64,
        class_id: Option<i64>,
    ) -> Result<Option<User>> {
        let existing = Users::find_by_id(student_id)
            .filter(Column::Role.eq(UserRole::Student.to_string()))
            .one(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.class_id = Set(class_id);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("分配班级失败"))?;

        Ok(Some(result.into_user()))
    }

    pub async fn count_students_in_class_impl(&self, class_id: i64) -> Result<u64> {
        Users::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::Role.eq(UserRole::Student.to_string()))
            .count(&self.db)
            .await
            .map_err(db_error("查询班级学生数失败"))
    }
}
