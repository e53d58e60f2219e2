use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct CreateActivityRequest {
    pub lesson_id: i64,
    pub description: String,
    pub due_at: chrono::DateTime<chrono::Utc>,
    pub points: f64,
    #[serde(default)]
    pub allow_resubmission: bool,
    #[serde(default)]
    pub access_until: Option<chrono::DateTime<chrono::Utc>>,
}

impl CreateActivityRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.description.trim().is_empty() {
            return Err("Description is required");
        }
        if !self.points.is_finite() || self.points <= 0.0 {
            return Err("Points must be positive");
        }
        Ok(())
    }
}

// 模拟上传的文件元数据
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct AttachmentInput {
    pub name: String,
    #[serde(rename = "type", default)]
    #[ts(rename = "type")]
    pub file_type: String,
    #[serde(default)]
    pub size: i64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct SubmitActivityRequest {
    pub activity_id: i64,
    #[serde(default)]
    pub response_text: Option<String>,
    #[serde(default)]
    pub files: Vec<AttachmentInput>,
}

impl SubmitActivityRequest {
    /// 至少需要非空回答或一个文件
    pub fn validate(&self) -> Result<(), &'static str> {
        let has_text = self
            .response_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        if !has_text && self.files.is_empty() {
            return Err("A response text or at least one file is required");
        }
        if self.files.iter().any(|f| f.name.trim().is_empty() || f.size < 0) {
            return Err("File metadata is invalid");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct GradeSubmissionRequest {
    pub score: f64,
    #[serde(default)]
    pub comment: Option<String>,
}

impl GradeSubmissionRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.score.is_finite() || !(0.0..=100.0).contains(&self.score) {
            return Err("Score must be between 0 and 100");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_requires_text_or_file() {
        let empty: SubmitActivityRequest =
            serde_json::from_str(r#"{"activity_id": 1, "response_text": "   "}"#).unwrap();
        assert!(empty.validate().is_err());

        let with_file: SubmitActivityRequest = serde_json::from_str(
            r#"{"activity_id": 1, "files": [{"name": "a.pdf", "type": "application/pdf", "size": 10}]}"#,
        )
        .unwrap();
        assert!(with_file.validate().is_ok());
        assert_eq!(with_file.files[0].file_type, "application/pdf");
    }

    #[test]
    fn test_grade_range() {
        let ok = GradeSubmissionRequest { score: 100.0, comment: None };
        assert!(ok.validate().is_ok());
        let too_high = GradeSubmissionRequest { score: 100.5, comment: None };
        assert!(too_high.validate().is_err());
        let negative = GradeSubmissionRequest { score: -1.0, comment: None };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_activity_points_positive() {
        let req: CreateActivityRequest = serde_json::from_str(
            r#"{"lesson_id": 1, "description": "Lista", "due_at": "2025-03-10T12:00:00Z", "points": 0}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
        assert!(!req.allow_resubmission);
    }
}
