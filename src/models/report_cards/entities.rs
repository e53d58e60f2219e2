//! 成绩单计算的输入与输出
//!
//! 输入行由存储层查询得到，输出结构直接序列化给前端。

use crate::models::assessments::entities::AssessmentType;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 班级关联的科目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSubject {
    pub subject_id: i64,
    pub subject_name: String,
}

/// 班级内一条启用的权重配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfigRow {
    pub subject_id: i64,
    pub unit: i32,
    pub assessment_type: AssessmentType,
    pub weight: i32,
}

/// 学生的一条成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportScoreRow {
    pub subject_id: i64,
    pub unit: i32,
    pub assessment_type: AssessmentType,
    pub value: f64,
    pub note: Option<String>,
    pub recorded_on: chrono::NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report_card.ts")]
pub struct UnitScore {
    pub assessment_type: AssessmentType,
    pub value: f64,
    pub note: Option<String>,
    pub recorded_on: chrono::NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report_card.ts")]
pub struct UnitWeight {
    pub assessment_type: AssessmentType,
    pub weight: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report_card.ts")]
pub struct UnitReport {
    pub unit: i32,
    /// 权重和为 0 时为空
    pub average: Option<f64>,
    pub scores: Vec<UnitScore>,
    pub configs: Vec<UnitWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report_card.ts")]
pub struct SubjectReport {
    pub subject_id: i64,
    pub subject_name: String,
    pub overall_average: Option<f64>,
    pub units: Vec<UnitReport>,
}
