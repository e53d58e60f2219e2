use super::entities::SubjectReport;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report_card.ts")]
pub struct ReportCardResponse {
    pub student_id: i64,
    pub student_name: String,
    pub class_id: i64,
    pub subjects: Vec<SubjectReport>,
}
