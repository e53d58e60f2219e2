//! 班级存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, db_error};
use crate::entity::school_classes::{ActiveModel, Column, Entity as SchoolClasses};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::Result;
use crate::models::classes::{
    entities::{SchoolClass, SchoolClassWithCount},
    requests::ClassPayload,
};
use crate::models::users::entities::UserRole;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    pub async fn create_class_impl(&self, req: ClassPayload) -> Result<SchoolClass> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            grade_level: Set(req.grade_level.trim().to_string()),
            year: Set(req.year),
            shift: Set(req.shift.trim().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建班级失败"))?;

        Ok(result.into_school_class())
    }

    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<SchoolClass>> {
        let result = SchoolClasses::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询班级失败"))?;

        Ok(result.map(|m| m.into_school_class()))
    }

    /// 列出班级并统计学生数，按名称排序
    pub async fn list_classes_with_counts_impl(&self) -> Result<Vec<SchoolClassWithCount>> {
        let classes = SchoolClasses::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询班级列表失败"))?;

        let enrolled: Vec<Option<i64>> = Users::find()
            .select_only()
            .column(UserColumn::ClassId)
            .filter(UserColumn::Role.eq(UserRole::Student.to_string()))
            .filter(UserColumn::ClassId.is_not_null())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("统计班级学生数失败"))?;

        let mut counts: HashMap<i64, i64> = HashMap::new();
        for class_id in enrolled.into_iter().flatten() {
            *counts.entry(class_id).or_default() += 1;
        }

        Ok(classes
            .into_iter()
            .map(|m| {
                let student_count = counts.get(&m.id).copied().unwrap_or(0);
                SchoolClassWithCount {
                    class: m.into_school_class(),
                    student_count,
                }
            })
            .collect())
    }

    pub async fn update_class_impl(
        &self,
        class_id: i64,
        req: ClassPayload,
    ) -> Result<Option<SchoolClass>> {
        let existing = SchoolClasses::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询班级失败"))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.name = Set(req.name.trim().to_string());
        model.grade_level = Set(req.grade_level.trim().to_string());
        model.year = Set(req.year);
        model.shift = Set(req.shift.trim().to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新班级失败"))?;

        Ok(Some(result.into_school_class()))
    }

    /// 删除班级，仍被引用时返回外键冲突
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = SchoolClasses::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除班级失败"))?;

        Ok(result.rows_affected > 0)
    }
}
