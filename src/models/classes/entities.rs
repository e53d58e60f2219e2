use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct SchoolClass {
    pub id: i64,
    pub name: String,
    pub grade_level: String,
    pub year: i32,
    pub shift: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 列表项附带在读学生数
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct SchoolClassWithCount {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: SchoolClass,
    pub student_count: i64,
}
