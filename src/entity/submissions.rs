//! 提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub activity_id: i64,
    pub student_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub response_text: Option<String>,
    pub file_name: Option<String>,
    pub submitted_at: i64,
    pub updated_at: Option<i64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub teacher_comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::activities::Entity",
        from = "Column::ActivityId",
        to = "super::activities::Column::Id"
    )]
    Activity,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_submission(self) -> crate::models::activities::entities::Submission {
        crate::models::activities::entities::Submission {
            id: self.id,
            activity_id: self.activity_id,
            student_id: self.student_id,
            response_text: self.response_text,
            file_name: self.file_name,
            submitted_at: super::ts_to_datetime(self.submitted_at),
            updated_at: self.updated_at.map(super::ts_to_datetime),
            score: self.score,
            teacher_comment: self.teacher_comment,
        }
    }
}
