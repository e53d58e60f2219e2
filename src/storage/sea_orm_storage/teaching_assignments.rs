//! 教师关联存储操作

use super::names::name_of;
use super::{SeaOrmStorage, db_error};
use crate::entity::teaching_assignments::{ActiveModel, Column, Entity as TeachingAssignments};
use crate::entity::teaching_assignments::Model as TeachingAssignmentModel;
use crate::errors::{AgendaError, Result};
use crate::models::teaching_assignments::{
    entities::TeachingAssignmentView, requests::CreateTeachingAssignmentRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    async fn to_assignment_views(
        &self,
        rows: Vec<TeachingAssignmentModel>,
    ) -> Result<Vec<TeachingAssignmentView>> {
        let teachers = self.user_names(rows.iter().map(|r| r.teacher_id)).await?;
        let classes = self.class_names(rows.iter().map(|r| r.class_id)).await?;
        let subjects = self.subject_names(rows.iter().map(|r| r.subject_id)).await?;

        let mut views: Vec<TeachingAssignmentView> = rows
            .into_iter()
            .map(|r| TeachingAssignmentView {
                id: r.id,
                teacher_id: r.teacher_id,
                teacher_name: name_of(&teachers, r.teacher_id),
                class_id: r.class_id,
                class_name: name_of(&classes, r.class_id),
                subject_id: r.subject_id,
                subject_name: name_of(&subjects, r.subject_id),
            })
            .collect();
        views.sort_by(|a, b| {
            (&a.teacher_name, &a.class_name, &a.subject_name).cmp(&(
                &b.teacher_name,
                &b.class_name,
                &b.subject_name,
            ))
        });
        Ok(views)
    }

    /// 列出关联，可限定教师
    pub async fn list_teaching_assignments_impl(
        &self,
        teacher_id: Option<i64>,
    ) -> Result<Vec<TeachingAssignmentView>> {
        let mut select = TeachingAssignments::find();
        if let Some(teacher_id) = teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        let rows = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询教师关联失败"))?;

        self.to_assignment_views(rows).await
    }

    pub async fn create_teaching_assignment_impl(
        &self,
        req: CreateTeachingAssignmentRequest,
    ) -> Result<TeachingAssignmentView> {
        let model = ActiveModel {
            teacher_id: Set(req.teacher_id),
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建教师关联失败"))?;

        self.to_assignment_views(vec![result])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AgendaError::not_found("Teaching assignment not found after insert"))
    }

    pub async fn delete_teaching_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = TeachingAssignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除教师关联失败"))?;

        Ok(result.rows_affected > 0)
    }
}
