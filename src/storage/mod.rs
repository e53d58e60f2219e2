use crate::models::{
    activities::{
        entities::{Activity, ActivityView, PendingSubmission, Submission, SubmissionResponse},
        requests::{CreateActivityRequest, SubmitActivityRequest},
    },
    assessments::{
        entities::{AssessmentConfig, AssessmentConfigView, Score, ScoreView},
        requests::{CreateAssessmentConfigRequest, ScoreQuery, UpsertScoreRequest},
    },
    classes::{
        entities::{SchoolClass, SchoolClassWithCount},
        requests::ClassPayload,
    },
    lessons::{
        entities::{Lesson, LessonView},
        requests::NewLesson,
    },
    report_cards::entities::{ReportConfigRow, ReportScoreRow, ReportSubject},
    subjects::entities::Subject,
    teaching_assignments::{
        entities::TeachingAssignmentView, requests::CreateTeachingAssignmentRequest,
    },
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 课表查询条件，日期两端包含
#[derive(Debug, Clone)]
pub struct LessonFilter {
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub class_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户，password 字段须为哈希值
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 按姓名排序，可按角色筛选
    async fn list_users(&self, role: Option<UserRole>) -> Result<Vec<User>>;
    async fn count_users(&self) -> Result<u64>;
    // 设置学生班级，非学生返回 None
    async fn assign_student_class(
        &self,
        student_id: i64,
        class_id: Option<i64>,
    ) -> Result<Option<User>>;

    /// 班级管理方法
    async fn create_class(&self, class: ClassPayload) -> Result<SchoolClass>;
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<SchoolClass>>;
    async fn list_classes_with_counts(&self) -> Result<Vec<SchoolClassWithCount>>;
    async fn update_class(&self, class_id: i64, class: ClassPayload)
    -> Result<Option<SchoolClass>>;
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    async fn count_students_in_class(&self, class_id: i64) -> Result<u64>;

    /// 科目管理方法
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    async fn create_subject(&self, name: &str) -> Result<Subject>;

    /// 教师关联方法
    async fn list_teaching_assignments(
        &self,
        teacher_id: Option<i64>,
    ) -> Result<Vec<TeachingAssignmentView>>;
    async fn create_teaching_assignment(
        &self,
        req: CreateTeachingAssignmentRequest,
    ) -> Result<TeachingAssignmentView>;
    async fn delete_teaching_assignment(&self, id: i64) -> Result<bool>;

    /// 课表方法
    async fn list_lessons(&self, filter: LessonFilter) -> Result<Vec<LessonView>>;
    async fn create_lesson(&self, lesson: NewLesson) -> Result<Lesson>;
    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>>;

    /// 活动与提交方法
    async fn create_activity(&self, req: CreateActivityRequest) -> Result<Activity>;
    // 返回活动及其所属课程
    async fn get_activity_with_lesson(&self, activity_id: i64)
    -> Result<Option<(Activity, Lesson)>>;
    // 学生视角，附带本人提交状态
    async fn list_activities_for_student(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<ActivityView>>;
    async fn list_activities_for_teacher(&self, teacher_id: i64) -> Result<Vec<ActivityView>>;
    async fn get_submission_for_student(
        &self,
        activity_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    async fn create_submission(
        &self,
        student_id: i64,
        req: SubmitActivityRequest,
    ) -> Result<SubmissionResponse>;
    // 覆盖原提交内容并替换附件
    async fn resubmit(
        &self,
        submission_id: i64,
        req: SubmitActivityRequest,
    ) -> Result<SubmissionResponse>;
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    async fn list_pending_submissions(&self, teacher_id: i64) -> Result<Vec<PendingSubmission>>;
    async fn grade_submission(
        &self,
        submission_id: i64,
        score: f64,
        comment: Option<String>,
    ) -> Result<Option<Submission>>;

    /// 评估配置方法
    async fn list_configs_for_teacher(&self, teacher_id: i64)
    -> Result<Vec<AssessmentConfigView>>;
    async fn create_config(
        &self,
        teacher_id: i64,
        req: CreateAssessmentConfigRequest,
    ) -> Result<AssessmentConfig>;
    async fn get_config_by_id(&self, config_id: i64) -> Result<Option<AssessmentConfig>>;
    async fn set_config_active(
        &self,
        config_id: i64,
        active: bool,
    ) -> Result<Option<AssessmentConfig>>;
    async fn delete_config(&self, config_id: i64) -> Result<bool>;
    // 同一（班级, 科目, 单元）下所有教师的启用权重
    async fn list_active_weights(&self, class_id: i64, subject_id: i64, unit: i32)
    -> Result<Vec<i32>>;

    /// 成绩方法
    async fn list_scores(&self, teacher_id: i64, query: ScoreQuery) -> Result<Vec<ScoreView>>;
    // 按（学生, 班级, 科目, 单元, 类型）插入或覆盖
    async fn upsert_score(
        &self,
        teacher_id: i64,
        req: UpsertScoreRequest,
        recorded_on: chrono::NaiveDate,
    ) -> Result<Score>;

    /// 成绩单数据
    async fn list_subjects_for_class(&self, class_id: i64) -> Result<Vec<ReportSubject>>;
    async fn list_active_configs_for_class(&self, class_id: i64) -> Result<Vec<ReportConfigRow>>;
    async fn list_scores_for_student(&self, student_id: i64) -> Result<Vec<ReportScoreRow>>;

    /// 系统
    async fn ping(&self) -> Result<()>;
}
