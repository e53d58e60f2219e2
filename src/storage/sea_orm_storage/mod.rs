//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod activities;
mod assessments;
mod classes;
mod lessons;
mod names;
mod report_cards;
mod scores;
mod subjects;
mod teaching_assignments;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{AgendaError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// 保留约束冲突的分类，其余错误附加上下文
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(DbErr) -> AgendaError {
    move |e| match AgendaError::from(e) {
        AgendaError::DatabaseOperation(msg) => {
            AgendaError::database_operation(format!("{context}: {msg}"))
        }
        other => other,
    }
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, pool_size: u32, timeout_secs: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout_secs).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout_secs).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| AgendaError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // 内存库每个连接各自独立，只能用单连接
        let in_memory = url.contains(":memory:");
        let max_connections = if in_memory { 1 } else { pool_size.max(1) };

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AgendaError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(timeout_secs));
        if in_memory {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        } else {
            pool_options = pool_options.idle_timeout(Duration::from_secs(300));
        }

        let pool = pool_options
            .connect_with(opt)
            .await
            .map_err(|e| AgendaError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout_secs))
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| AgendaError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    pub(crate) fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AgendaError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    pub async fn ping_impl(&self) -> Result<()> {
        self.db
            .execute_unprepared("SELECT 1")
            .await
            .map_err(db_error("数据库连通性检查失败"))?;
        Ok(())
    }
}

// Storage trait 实现
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
use crate::storage::{LessonFilter, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users(&self, role: Option<UserRole>) -> Result<Vec<User>> {
        self.list_users_impl(role).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn assign_student_class(
        &self,
        student_id: i64,
        class_id: Option<i64>,
    ) -> Result<Option<User>> {
        self.assign_student_class_impl(student_id, class_id).await
    }

    // 班级模块
    async fn create_class(&self, class: ClassPayload) -> Result<SchoolClass> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<SchoolClass>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_with_counts(&self) -> Result<Vec<SchoolClassWithCount>> {
        self.list_classes_with_counts_impl().await
    }

    async fn update_class(
        &self,
        class_id: i64,
        class: ClassPayload,
    ) -> Result<Option<SchoolClass>> {
        self.update_class_impl(class_id, class).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    async fn count_students_in_class(&self, class_id: i64) -> Result<u64> {
        self.count_students_in_class_impl(class_id).await
    }

    // 科目模块
    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn create_subject(&self, name: &str) -> Result<Subject> {
        self.create_subject_impl(name).await
    }

    // 教师关联模块
    async fn list_teaching_assignments(
        &self,
        teacher_id: Option<i64>,
    ) -> Result<Vec<TeachingAssignmentView>> {
        self.list_teaching_assignments_impl(teacher_id).await
    }

    async fn create_teaching_assignment(
        &self,
        req: CreateTeachingAssignmentRequest,
    ) -> Result<TeachingAssignmentView> {
        self.create_teaching_assignment_impl(req).await
    }

    async fn delete_teaching_assignment(&self, id: i64) -> Result<bool> {
        self.delete_teaching_assignment_impl(id).await
    }

    // 课表模块
    async fn list_lessons(&self, filter: LessonFilter) -> Result<Vec<LessonView>> {
        self.list_lessons_impl(filter).await
    }

    async fn create_lesson(&self, lesson: NewLesson) -> Result<Lesson> {
        self.create_lesson_impl(lesson).await
    }

    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_by_id_impl(lesson_id).await
    }

    // 活动模块
    async fn create_activity(&self, req: CreateActivityRequest) -> Result<Activity> {
        self.create_activity_impl(req).await
    }

    async fn get_activity_with_lesson(
        &self,
        activity_id: i64,
    ) -> Result<Option<(Activity, Lesson)>> {
        self.get_activity_with_lesson_impl(activity_id).await
    }

    async fn list_activities_for_student(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<ActivityView>> {
        self.list_activities_for_student_impl(class_id, student_id)
            .await
    }

    async fn list_activities_for_teacher(&self, teacher_id: i64) -> Result<Vec<ActivityView>> {
        self.list_activities_for_teacher_impl(teacher_id).await
    }

    async fn get_submission_for_student(
        &self,
        activity_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_for_student_impl(activity_id, student_id)
            .await
    }

    async fn create_submission(
        &self,
        student_id: i64,
        req: SubmitActivityRequest,
    ) -> Result<SubmissionResponse> {
        self.create_submission_impl(student_id, req).await
    }

    async fn resubmit(
        &self,
        submission_id: i64,
        req: SubmitActivityRequest,
    ) -> Result<SubmissionResponse> {
        self.resubmit_impl(submission_id, req).await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn list_pending_submissions(&self, teacher_id: i64) -> Result<Vec<PendingSubmission>> {
        self.list_pending_submissions_impl(teacher_id).await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        score: f64,
        comment: Option<String>,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(submission_id, score, comment)
            .await
    }

    // 评估配置模块
    async fn list_configs_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<AssessmentConfigView>> {
        self.list_configs_for_teacher_impl(teacher_id).await
    }

    async fn create_config(
        &self,
        teacher_id: i64,
        req: CreateAssessmentConfigRequest,
    ) -> Result<AssessmentConfig> {
        self.create_config_impl(teacher_id, req).await
    }

    async fn get_config_by_id(&self, config_id: i64) -> Result<Option<AssessmentConfig>> {
        self.get_config_by_id_impl(config_id).await
    }

    async fn set_config_active(
        &self,
        config_id: i64,
        active: bool,
    ) -> Result<Option<AssessmentConfig>> {
        self.set_config_active_impl(config_id, active).await
    }

    async fn delete_config(&self, config_id: i64) -> Result<bool> {
        self.delete_config_impl(config_id).await
    }

    async fn list_active_weights(
        &self,
        class_id: i64,
        subject_id: i64,
        unit: i32,
    ) -> Result<Vec<i32>> {
        self.list_active_weights_impl(class_id, subject_id, unit)
            .await
    }

    // 成绩模块
    async fn list_scores(&self, teacher_id: i64, query: ScoreQuery) -> Result<Vec<ScoreView>> {
        self.list_scores_impl(teacher_id, query).await
    }

    async fn upsert_score(
        &self,
        teacher_id: i64,
        req: UpsertScoreRequest,
        recorded_on: chrono::NaiveDate,
    ) -> Result<Score> {
        self.upsert_score_impl(teacher_id, req, recorded_on).await
    }

    // 成绩单模块
    async fn list_subjects_for_class(&self, class_id: i64) -> Result<Vec<ReportSubject>> {
        self.list_subjects_for_class_impl(class_id).await
    }

    async fn list_active_configs_for_class(&self, class_id: i64) -> Result<Vec<ReportConfigRow>> {
        self.list_active_configs_for_class_impl(class_id).await
    }

    async fn list_scores_for_student(&self, student_id: i64) -> Result<Vec<ReportScoreRow>> {
        self.list_scores_for_student_impl(student_id).await
    }

    async fn ping(&self) -> Result<()> {
        self.ping_impl().await
    }
}
