//! 科目存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::Result;
use crate::models::subjects::entities::Subject;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询科目列表失败"))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn create_subject_impl(&self, name: &str) -> Result<Subject> {
        let model = ActiveModel {
            name: Set(name.trim().to_string()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建科目失败"))?;

        Ok(result.into_subject())
    }
}
