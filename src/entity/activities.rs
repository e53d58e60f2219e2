//! 活动实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lesson_id: i64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub due_at: i64,
    #[sea_orm(column_type = "Double")]
    pub points: f64,
    pub allow_resubmission: bool,
    pub access_until: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lessons::Entity",
        from = "Column::LessonId",
        to = "super::lessons::Column::Id"
    )]
    Lesson,
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_activity(self) -> crate::models::activities::entities::Activity {
        crate::models::activities::entities::Activity {
            id: self.id,
            lesson_id: self.lesson_id,
            description: self.description,
            due_at: super::ts_to_datetime(self.due_at),
            points: self.points,
            allow_resubmission: self.allow_resubmission,
            access_until: self.access_until.map(super::ts_to_datetime),
            created_at: super::ts_to_datetime(self.created_at),
        }
    }
}
