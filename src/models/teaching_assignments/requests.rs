use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teaching_assignment.ts")]
pub struct CreateTeachingAssignmentRequest {
    pub teacher_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
}
