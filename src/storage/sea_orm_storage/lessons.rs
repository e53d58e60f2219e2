//! 课表存储操作

use super::names::name_of;
use super::{SeaOrmStorage, db_error};
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::entity::{DATE_FORMAT, TIME_FORMAT};
use crate::errors::Result;
use crate::models::lessons::{
    entities::{Lesson, LessonView},
    requests::NewLesson,
};
use crate::storage::LessonFilter;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按日期区间查询课表，按日期、时间排序
    pub async fn list_lessons_impl(&self, filter: LessonFilter) -> Result<Vec<LessonView>> {
        let mut select = Lessons::find()
            .filter(Column::Date.gte(filter.start_date.format(DATE_FORMAT).to_string()))
            .filter(Column::Date.lte(filter.end_date.format(DATE_FORMAT).to_string()));

        if let Some(class_id) = filter.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(teacher_id) = filter.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        let rows = select
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Time)
            .all(&self.db)
            .await
            .map_err(db_error("查询课表失败"))?;

        let classes = self.class_names(rows.iter().map(|r| r.class_id)).await?;
        let subjects = self.subject_names(rows.iter().map(|r| r.subject_id)).await?;
        let teachers = self.user_names(rows.iter().map(|r| r.teacher_id)).await?;

        Ok(rows
            .into_iter()
            .map(|r| LessonView {
                class_name: name_of(&classes, r.class_id),
                subject_name: name_of(&subjects, r.subject_id),
                teacher_name: name_of(&teachers, r.teacher_id),
                lesson: r.into_lesson(),
            })
            .collect())
    }

    pub async fn create_lesson_impl(&self, lesson: NewLesson) -> Result<Lesson> {
        let model = ActiveModel {
            class_id: Set(lesson.class_id),
            teacher_id: Set(lesson.teacher_id),
            subject_id: Set(lesson.subject_id),
            date: Set(lesson.date.format(DATE_FORMAT).to_string()),
            time: Set(lesson.time.format(TIME_FORMAT).to_string()),
            topic: Set(lesson.topic),
            lesson_type: Set(lesson.lesson_type.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建课程失败"))?;

        Ok(result.into_lesson())
    }

    pub async fn get_lesson_by_id_impl(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?;

        Ok(result.map(|m| m.into_lesson()))
    }
}
