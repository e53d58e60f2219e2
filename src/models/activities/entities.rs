use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业活动
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct Activity {
    pub id: i64,
    pub lesson_id: i64,
    pub description: String,
    pub due_at: chrono::DateTime<chrono::Utc>,
    pub points: f64,
    pub allow_resubmission: bool,
    /// 超过此时间不再接受提交
    pub access_until: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Activity {
    pub fn is_open_at(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.access_until.is_none_or(|until| now <= until)
    }
}

// 学生提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct Submission {
    pub id: i64,
    pub activity_id: i64,
    pub student_id: i64,
    pub response_text: Option<String>,
    pub file_name: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub score: Option<f64>,
    pub teacher_comment: Option<String>,
}

// 附件元数据，文件本身不落盘
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct SubmissionAttachment {
    pub id: i64,
    pub submission_id: i64,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

// 学生视角下的提交状态
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct SubmissionState {
    pub submission_id: i64,
    pub score: Option<f64>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub teacher_comment: Option<String>,
}

// 活动列表项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct ActivityView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub activity: Activity,
    pub class_id: i64,
    pub subject_id: i64,
    pub subject_name: String,
    pub lesson_topic: String,
    pub lesson_date: chrono::NaiveDate,
    /// 仅学生视角填充
    pub submission: Option<SubmissionState>,
}

// 待批改的提交
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct PendingSubmission {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub student_name: String,
    pub activity_description: String,
    pub attachment_count: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct SubmissionResponse {
    pub submission: Submission,
    pub attachments: Vec<SubmissionAttachment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn activity(access_until: Option<chrono::DateTime<Utc>>) -> Activity {
        let now = Utc::now();
        Activity {
            id: 1,
            lesson_id: 1,
            description: "Lista 1".into(),
            due_at: now,
            points: 10.0,
            allow_resubmission: false,
            access_until,
            created_at: now,
        }
    }

    #[test]
    fn test_activity_open_window() {
        let now = Utc::now();
        assert!(activity(None).is_open_at(now));
        assert!(activity(Some(now + Duration::hours(1))).is_open_at(now));
        assert!(!activity(Some(now - Duration::seconds(1))).is_open_at(now));
    }
}
