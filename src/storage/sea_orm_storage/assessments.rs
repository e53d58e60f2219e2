//! 评估权重配置存储操作

use super::names::name_of;
use super::{SeaOrmStorage, db_error};
use crate::entity::assessment_configs::{ActiveModel, Column, Entity as AssessmentConfigs};
use crate::errors::Result;
use crate::models::assessments::{
    entities::{AssessmentConfig, AssessmentConfigView},
    requests::CreateAssessmentConfigRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 教师自己的配置，按班级、科目、单元排序
    pub async fn list_configs_for_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<AssessmentConfigView>> {
        let rows = AssessmentConfigs::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Unit)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询评估配置失败"))?;

        let classes = self.class_names(rows.iter().map(|r| r.class_id)).await?;
        let subjects = self.subject_names(rows.iter().map(|r| r.subject_id)).await?;

        let mut views: Vec<AssessmentConfigView> = rows
            .into_iter()
            .map(|r| AssessmentConfigView {
                class_name: name_of(&classes, r.class_id),
                subject_name: name_of(&subjects, r.subject_id),
                config: r.into_config(),
            })
            .collect();
        // 稳定排序，单元与 id 顺序保持
        views.sort_by(|a, b| {
            (&a.class_name, &a.subject_name, a.config.unit).cmp(&(
                &b.class_name,
                &b.subject_name,
                b.config.unit,
            ))
        });
        Ok(views)
    }

    pub async fn create_config_impl(
        &self,
        teacher_id: i64,
        req: CreateAssessmentConfigRequest,
    ) -> Result<AssessmentConfig> {
        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            unit: Set(req.unit),
            assessment_type: Set(req.assessment_type.to_string()),
            weight: Set(req.weight),
            active: Set(true),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建评估配置失败"))?;

        Ok(result.into_config())
    }

    pub async fn get_config_by_id_impl(&self, config_id: i64) -> Result<Option<AssessmentConfig>> {
        let result = AssessmentConfigs::find_by_id(config_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询评估配置失败"))?;

        Ok(result.map(|m| m.into_config()))
    }

    pub async fn set_config_active_impl(
        &self,
        config_id: i64,
        active: bool,
    ) -> Result<Option<AssessmentConfig>> {
        let existing = AssessmentConfigs::find_by_id(config_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询评估配置失败"))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.active = Set(active);
        let result = model
            .update(&self.db)
            .await
            .map_err(db_error("更新评估配置失败"))?;

        Ok(Some(result.into_config()))
    }

    pub async fn delete_config_impl(&self, config_id: i64) -> Result<bool> {
        let result = AssessmentConfigs::delete_by_id(config_id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除评估配置失败"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_active_weights_impl(
        &self,
        class_id: i64,
        subject_id: i64,
        unit: i32,
    ) -> Result<Vec<i32>> {
        AssessmentConfigs::find()
            .select_only()
            .column(Column::Weight)
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::Unit.eq(unit))
            .filter(Column::Active.eq(true))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询启用权重失败"))
    }
}
