//! 成绩存储操作

use super::names::name_of;
use super::{SeaOrmStorage, db_error};
use crate::entity::DATE_FORMAT;
use crate::entity::assessment_scores::{ActiveModel, Column, Entity as AssessmentScores};
use crate::errors::{AgendaError, Result};
use crate::models::assessments::{
    entities::{Score, ScoreView},
    requests::{ScoreQuery, UpsertScoreRequest},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 教师录入的某一切片成绩，按学生姓名排序
    pub async fn list_scores_impl(&self, teacher_id: i64, query: ScoreQuery) -> Result<Vec<ScoreView>> {
        let rows = AssessmentScores::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::ClassId.eq(query.class_id))
            .filter(Column::SubjectId.eq(query.subject_id))
            .filter(Column::Unit.eq(query.unit))
            .filter(Column::AssessmentType.eq(query.assessment_type.to_string()))
            .all(&self.db)
            .await
            .map_err(db_error("查询成绩失败"))?;

        let students = self.user_names(rows.iter().map(|r| r.student_id)).await?;

        let mut views: Vec<ScoreView> = rows
            .into_iter()
            .map(|r| ScoreView {
                student_name: name_of(&students, r.student_id),
                score: r.into_score(),
            })
            .collect();
        views.sort_by(|a, b| a.student_name.cmp(&b.student_name));
        Ok(views)
    }

    /// 插入或覆盖成绩，冲突键为（学生, 班级, 科目, 单元, 类型）
    pub async fn upsert_score_impl(
        &self,
        teacher_id: i64,
        req: UpsertScoreRequest,
        recorded_on: chrono::NaiveDate,
    ) -> Result<Score> {
        let assessment_type = req.assessment_type.to_string();
        let model = ActiveModel {
            student_id: Set(req.student_id),
            teacher_id: Set(teacher_id),
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            unit: Set(req.unit),
            assessment_type: Set(assessment_type.clone()),
            value: Set(req.value),
            note: Set(req.note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())),
            recorded_on: Set(recorded_on.format(DATE_FORMAT).to_string()),
            ..Default::default()
        };

        AssessmentScores::insert(model)
            .on_conflict(
                OnConflict::columns([
                    Column::StudentId,
                    Column::ClassId,
                    Column::SubjectId,
                    Column::Unit,
                    Column::AssessmentType,
                ])
                .update_columns([Column::Value, Column::Note, Column::RecordedOn])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_error("保存成绩失败"))?;

        let saved = AssessmentScores::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::ClassId.eq(req.class_id))
            .filter(Column::SubjectId.eq(req.subject_id))
            .filter(Column::Unit.eq(req.unit))
            .filter(Column::AssessmentType.eq(assessment_type))
            .one(&self.db)
            .await
            .map_err(db_error("查询成绩失败"))?
            .ok_or_else(|| AgendaError::not_found("Score not found after upsert"))?;

        Ok(saved.into_score())
    }
}
