//! 成绩实体

use sea_orm::entity::prelude::*;

use crate::models::assessments::entities::{AssessmentType, Score};
use crate::models::report_cards::entities::ReportScoreRow;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub unit: i32,
    pub assessment_type: String,
    #[sea_orm(column_type = "Double")]
    pub value: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub recorded_on: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::school_classes::Entity",
        from = "Column::ClassId",
        to = "super::school_classes::Column::Id"
    )]
    SchoolClass,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    fn parsed_type(&self) -> AssessmentType {
        self.assessment_type
            .parse::<AssessmentType>()
            .unwrap_or(AssessmentType::Other)
    }

    pub fn into_score(self) -> Score {
        Score {
            id: self.id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            class_id: self.class_id,
            subject_id: self.subject_id,
            unit: self.unit,
            assessment_type: self.parsed_type(),
            value: self.value,
            recorded_on: super::parse_date_column(&self.recorded_on),
            note: self.note,
        }
    }

    pub fn into_report_row(self) -> ReportScoreRow {
        ReportScoreRow {
            subject_id: self.subject_id,
            unit: self.unit,
            assessment_type: self.parsed_type(),
            value: self.value,
            recorded_on: super::parse_date_column(&self.recorded_on),
            note: self.note,
        }
    }
}
