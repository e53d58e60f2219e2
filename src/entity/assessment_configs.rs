//! 评估权重配置实体

use sea_orm::entity::prelude::*;

use crate::models::assessments::entities::{AssessmentConfig, AssessmentType};
use crate::models::report_cards::entities::ReportConfigRow;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment_configs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub unit: i32,
    pub assessment_type: String,
    pub weight: i32,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
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

    pub fn into_config(self) -> AssessmentConfig {
        AssessmentConfig {
            id: self.id,
            teacher_id: self.teacher_id,
            class_id: self.class_id,
            subject_id: self.subject_id,
            unit: self.unit,
            assessment_type: self.parsed_type(),
            weight: self.weight,
            active: self.active,
        }
    }

    pub fn into_report_row(self) -> ReportConfigRow {
        ReportConfigRow {
            subject_id: self.subject_id,
            unit: self.unit,
            assessment_type: self.parsed_type(),
            weight: self.weight,
        }
    }
}
