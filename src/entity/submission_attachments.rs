//! 提交附件实体（仅元数据）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submission_attachments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub submission_id: i64,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub uploaded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submissions::Entity",
        from = "Column::SubmissionId",
        to = "super::submissions::Column::Id"
    )]
    Submission,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attachment(self) -> crate::models::activities::entities::SubmissionAttachment {
        crate::models::activities::entities::SubmissionAttachment {
            id: self.id,
            submission_id: self.submission_id,
            file_name: self.file_name,
            file_type: self.file_type,
            file_size: self.file_size,
            uploaded_at: super::ts_to_datetime(self.uploaded_at),
        }
    }
}
