use serde::Serialize;
use ts_rs::TS;

// 教师-班级-科目关联，附带名称
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teaching_assignment.ts")]
pub struct TeachingAssignmentView {
    pub id: i64,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub class_id: i64,
    pub class_name: String,
    pub subject_id: i64,
    pub subject_name: String,
}
