use super::entities::AssessmentConfig;
use serde::Serialize;
use ts_rs::TS;

/// 同一（班级, 科目, 单元）下启用权重之和的提示，不阻止写入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct WeightAdvisory {
    pub total_weight: i32,
    pub balanced: bool,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentConfigResponse {
    pub config: AssessmentConfig,
    pub advisory: Option<WeightAdvisory>,
}
