//! 成绩单数据查询

use super::{SeaOrmStorage, db_error};
use crate::entity::assessment_configs::{Column as ConfigColumn, Entity as AssessmentConfigs};
use crate::entity::assessment_scores::{Column as ScoreColumn, Entity as AssessmentScores};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::teaching_assignments::{
    Column as AssignmentColumn, Entity as TeachingAssignments,
};
use crate::errors::Result;
use crate::models::report_cards::entities::{ReportConfigRow, ReportScoreRow, ReportSubject};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 班级关联的科目（去重），按名称排序
    pub async fn list_subjects_for_class_impl(&self, class_id: i64) -> Result<Vec<ReportSubject>> {
        let subject_ids: Vec<i64> = TeachingAssignments::find()
            .select_only()
            .column(AssignmentColumn::SubjectId)
            .distinct()
            .filter(AssignmentColumn::ClassId.eq(class_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询班级科目失败"))?;
        if subject_ids.is_empty() {
            return Ok(Vec::new());
        }

        let subjects = Subjects::find()
            .filter(SubjectColumn::Id.is_in(subject_ids))
            .order_by_asc(SubjectColumn::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询科目失败"))?;

        Ok(subjects
            .into_iter()
            .map(|s| ReportSubject {
                subject_id: s.id,
                subject_name: s.name,
            })
            .collect())
    }

    pub async fn list_active_configs_for_class_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<ReportConfigRow>> {
        let rows = AssessmentConfigs::find()
            .filter(ConfigColumn::ClassId.eq(class_id))
            .filter(ConfigColumn::Active.eq(true))
            .order_by_asc(ConfigColumn::SubjectId)
            .order_by_asc(ConfigColumn::Unit)
            .order_by_asc(ConfigColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询班级评估配置失败"))?;

        Ok(rows.into_iter().map(|m| m.into_report_row()).collect())
    }

    pub async fn list_scores_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<ReportScoreRow>> {
        let rows = AssessmentScores::find()
            .filter(ScoreColumn::StudentId.eq(student_id))
            .order_by_asc(ScoreColumn::SubjectId)
            .order_by_asc(ScoreColumn::Unit)
            .order_by_asc(ScoreColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询学生成绩失败"))?;

        Ok(rows.into_iter().map(|m| m.into_report_row()).collect())
    }
}
