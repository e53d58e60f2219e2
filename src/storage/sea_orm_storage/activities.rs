//! 活动与提交存储操作

use std::collections::HashMap;

use super::names::name_of;
use super::{SeaOrmStorage, db_error};
use crate::entity::activities::{
    ActiveModel as ActivityActiveModel, Column as ActivityColumn, Entity as Activities,
};
use crate::entity::lessons::{Column as LessonColumn, Entity as Lessons, Model as LessonModel};
use crate::entity::submission_attachments::{
    ActiveModel as AttachmentActiveModel, Column as AttachmentColumn,
    Entity as SubmissionAttachments,
};
use crate::entity::submissions::{
    ActiveModel as SubmissionActiveModel, Column as SubmissionColumn, Entity as Submissions,
};
use crate::errors::{AgendaError, Result};
use crate::models::activities::{
    entities::{
        Activity, ActivityView, PendingSubmission, Submission, SubmissionResponse,
        SubmissionState,
    },
    requests::{AttachmentInput, CreateActivityRequest, SubmitActivityRequest},
};
use crate::models::lessons::entities::Lesson;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

/// 空白回答按未填写处理
fn normalized_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

impl SeaOrmStorage {
    pub async fn create_activity_impl(&self, req: CreateActivityRequest) -> Result<Activity> {
        let model = ActivityActiveModel {
            lesson_id: Set(req.lesson_id),
            description: Set(req.description.trim().to_string()),
            due_at: Set(req.due_at.timestamp()),
            points: Set(req.points),
            allow_resubmission: Set(req.allow_resubmission),
            access_until: Set(req.access_until.map(|t| t.timestamp())),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建活动失败"))?;

        Ok(result.into_activity())
    }

    pub async fn get_activity_with_lesson_impl(
        &self,
        activity_id: i64,
    ) -> Result<Option<(Activity, Lesson)>> {
        let result = Activities::find_by_id(activity_id)
            .find_also_related(Lessons)
            .one(&self.db)
            .await
            .map_err(db_error("查询活动失败"))?;

        Ok(match result {
            Some((activity, Some(lesson))) => Some((activity.into_activity(), lesson.into_lesson())),
            _ => None,
        })
    }

    /// 由课程集合构建活动列表，按截止时间排序
    async fn build_activity_views(
        &self,
        lessons: Vec<LessonModel>,
        student_id: Option<i64>,
    ) -> Result<Vec<ActivityView>> {
        if lessons.is_empty() {
            return Ok(Vec::new());
        }

        let lesson_ids: Vec<i64> = lessons.iter().map(|l| l.id).collect();
        let activities = Activities::find()
            .filter(ActivityColumn::LessonId.is_in(lesson_ids))
            .order_by_asc(ActivityColumn::DueAt)
            .all(&self.db)
            .await
            .map_err(db_error("查询活动列表失败"))?;

        let subjects = self
            .subject_names(lessons.iter().map(|l| l.subject_id))
            .await?;

        let mut submissions: HashMap<i64, SubmissionState> = HashMap::new();
        if let Some(student_id) = student_id
            && !activities.is_empty()
        {
            let rows = Submissions::find()
                .filter(SubmissionColumn::StudentId.eq(student_id))
                .filter(SubmissionColumn::ActivityId.is_in(activities.iter().map(|a| a.id)))
                .all(&self.db)
                .await
                .map_err(db_error("查询提交状态失败"))?;
            for row in rows {
                let submission = row.into_submission();
                submissions.insert(
                    submission.activity_id,
                    SubmissionState {
                        submission_id: submission.id,
                        score: submission.score,
                        submitted_at: submission.submitted_at,
                        teacher_comment: submission.teacher_comment,
                    },
                );
            }
        }

        let lessons: HashMap<i64, Lesson> = lessons
            .into_iter()
            .map(|l| (l.id, l.into_lesson()))
            .collect();

        Ok(activities
            .into_iter()
            .filter_map(|a| {
                let lesson = lessons.get(&a.lesson_id)?;
                let submission = submissions.remove(&a.id);
                Some(ActivityView {
                    class_id: lesson.class_id,
                    subject_id: lesson.subject_id,
                    subject_name: name_of(&subjects, lesson.subject_id),
                    lesson_topic: lesson.topic.clone(),
                    lesson_date: lesson.date,
                    submission,
                    activity: a.into_activity(),
                })
            })
            .collect())
    }

    pub async fn list_activities_for_student_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<ActivityView>> {
        let lessons = Lessons::find()
            .filter(LessonColumn::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(db_error("查询班级课程失败"))?;

        self.build_activity_views(lessons, Some(student_id)).await
    }

    pub async fn list_activities_for_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<ActivityView>> {
        let lessons = Lessons::find()
            .filter(LessonColumn::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(db_error("查询教师课程失败"))?;

        self.build_activity_views(lessons, None).await
    }

    pub async fn get_submission_for_student_impl(
        &self,
        activity_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(SubmissionColumn::ActivityId.eq(activity_id))
            .filter(SubmissionColumn::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        Ok(result.map(|m| m.into_submission()))
    }

    pub async fn get_submission_by_id_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 写入附件元数据
    async fn insert_attachments<C: ConnectionTrait>(
        conn: &C,
        submission_id: i64,
        files: Vec<AttachmentInput>,
        now: i64,
    ) -> Result<Vec<crate::models::activities::entities::SubmissionAttachment>> {
        let mut attachments = Vec::with_capacity(files.len());
        for file in files {
            let model = AttachmentActiveModel {
                submission_id: Set(submission_id),
                file_name: Set(file.name.trim().to_string()),
                file_type: Set(file.file_type),
                file_size: Set(file.size),
                uploaded_at: Set(now),
                ..Default::default()
            };
            let saved = model.insert(conn).await.map_err(db_error("保存附件失败"))?;
            attachments.push(saved.into_attachment());
        }
        Ok(attachments)
    }

    pub async fn create_submission_impl(
        &self,
        student_id: i64,
        req: SubmitActivityRequest,
    ) -> Result<SubmissionResponse> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let model = SubmissionActiveModel {
            activity_id: Set(req.activity_id),
            student_id: Set(student_id),
            response_text: Set(normalized_text(req.response_text)),
            file_name: Set(req.files.first().map(|f| f.name.trim().to_string())),
            submitted_at: Set(now),
            updated_at: Set(None),
            score: Set(None),
            teacher_comment: Set(None),
            ..Default::default()
        };
        let submission = model.insert(&txn).await.map_err(db_error("创建提交失败"))?;
        let attachments = Self::insert_attachments(&txn, submission.id, req.files, now).await?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(SubmissionResponse {
            submission: submission.into_submission(),
            attachments,
        })
    }

    /// 重新提交：覆盖内容、替换附件并清除已有评分
    pub async fn resubmit_impl(
        &self,
        submission_id: i64,
        req: SubmitActivityRequest,
    ) -> Result<SubmissionResponse> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let existing = Submissions::find_by_id(submission_id)
            .one(&txn)
            .await
            .map_err(db_error("查询提交失败"))?
            .ok_or_else(|| AgendaError::not_found(format!("Submission {submission_id} not found")))?;

        let mut model: SubmissionActiveModel = existing.into();
        model.response_text = Set(normalized_text(req.response_text));
        model.file_name = Set(req.files.first().map(|f| f.name.trim().to_string()));
        model.updated_at = Set(Some(now));
        model.score = Set(None);
        model.teacher_comment = Set(None);
        let submission = model.update(&txn).await.map_err(db_error("更新提交失败"))?;

        SubmissionAttachments::delete_many()
            .filter(AttachmentColumn::SubmissionId.eq(submission_id))
            .exec(&txn)
            .await
            .map_err(db_error("清理附件失败"))?;
        let attachments = Self::insert_attachments(&txn, submission_id, req.files, now).await?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(SubmissionResponse {
            submission: submission.into_submission(),
            attachments,
        })
    }

    /// 教师课程下未评分的提交，最早提交在前
    pub async fn list_pending_submissions_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<PendingSubmission>> {
        let lesson_ids: Vec<i64> = Lessons::find()
            .select_only()
            .column(LessonColumn::Id)
            .filter(LessonColumn::TeacherId.eq(teacher_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询教师课程失败"))?;
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        let activities: HashMap<i64, String> = Activities::find()
            .filter(ActivityColumn::LessonId.is_in(lesson_ids))
            .all(&self.db)
            .await
            .map_err(db_error("查询活动失败"))?
            .into_iter()
            .map(|a| (a.id, a.description))
            .collect();
        if activities.is_empty() {
            return Ok(Vec::new());
        }

        let submissions = Submissions::find()
            .filter(SubmissionColumn::ActivityId.is_in(activities.keys().copied()))
            .filter(SubmissionColumn::Score.is_null())
            .order_by_asc(SubmissionColumn::SubmittedAt)
            .order_by_asc(SubmissionColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询待批改提交失败"))?;
        if submissions.is_empty() {
            return Ok(Vec::new());
        }

        let students = self
            .user_names(submissions.iter().map(|s| s.student_id))
            .await?;

        let attachment_rows: Vec<i64> = SubmissionAttachments::find()
            .select_only()
            .column(AttachmentColumn::SubmissionId)
            .filter(AttachmentColumn::SubmissionId.is_in(submissions.iter().map(|s| s.id)))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("统计附件失败"))?;
        let mut attachment_counts: HashMap<i64, i64> = HashMap::new();
        for submission_id in attachment_rows {
            *attachment_counts.entry(submission_id).or_default() += 1;
        }

        Ok(submissions
            .into_iter()
            .map(|s| PendingSubmission {
                student_name: name_of(&students, s.student_id),
                activity_description: activities.get(&s.activity_id).cloned().unwrap_or_default(),
                attachment_count: attachment_counts.get(&s.id).copied().unwrap_or(0),
                submission: s.into_submission(),
            })
            .collect())
    }

    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        score: f64,
        comment: Option<String>,
    ) -> Result<Option<Submission>> {
        let existing = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: SubmissionActiveModel = existing.into();
        model.score = Set(Some(score));
        model.teacher_comment = Set(normalized_text(comment));

        let result = model.update(&self.db).await.map_err(db_error("评分失败"))?;

        Ok(Some(result.into_submission()))
    }
}
