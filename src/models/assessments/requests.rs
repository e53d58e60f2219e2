use super::entities::AssessmentType;
use serde::Deserialize;
use ts_rs::TS;

pub const MIN_UNIT: i32 = 1;
pub const MAX_UNIT: i32 = 4;
pub const MAX_SCORE: f64 = 10.0;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct CreateAssessmentConfigRequest {
    pub class_id: i64,
    pub subject_id: i64,
    pub unit: i32,
    pub assessment_type: AssessmentType,
    pub weight: i32,
}

impl CreateAssessmentConfigRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_unit(self.unit)?;
        if !(0..=100).contains(&self.weight) {
            return Err("Weight must be between 0 and 100");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct ToggleAssessmentConfigRequest {
    pub active: bool,
}

/// 查询某一切片的成绩，四个条件均必填
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct ScoreQuery {
    pub class_id: i64,
    pub subject_id: i64,
    pub unit: i32,
    pub assessment_type: AssessmentType,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct UpsertScoreRequest {
    pub student_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub unit: i32,
    pub assessment_type: AssessmentType,
    pub value: f64,
    #[serde(default)]
    pub note: Option<String>,
}

impl UpsertScoreRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_unit(self.unit)?;
        if !self.value.is_finite() || !(0.0..=MAX_SCORE).contains(&self.value) {
            return Err("Score must be between 0 and 10");
        }
        Ok(())
    }
}

pub fn validate_unit(unit: i32) -> Result<(), &'static str> {
    if !(MIN_UNIT..=MAX_UNIT).contains(&unit) {
        return Err("Unit must be between 1 and 4");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(unit: i32, value: f64) -> UpsertScoreRequest {
        UpsertScoreRequest {
            student_id: 1,
            class_id: 1,
            subject_id: 1,
            unit,
            assessment_type: AssessmentType::Exam,
            value,
            note: None,
        }
    }

    #[test]
    fn test_score_bounds() {
        assert!(score(1, 0.0).validate().is_ok());
        assert!(score(4, 10.0).validate().is_ok());
        assert!(score(1, 10.01).validate().is_err());
        assert!(score(1, -0.5).validate().is_err());
        assert!(score(1, f64::NAN).validate().is_err());
        assert!(score(5, 7.0).validate().is_err());
        assert!(score(0, 7.0).validate().is_err());
    }

    #[test]
    fn test_config_bounds() {
        let mut req = CreateAssessmentConfigRequest {
            class_id: 1,
            subject_id: 1,
            unit: 2,
            assessment_type: AssessmentType::Quiz,
            weight: 0,
        };
        assert!(req.validate().is_ok());
        req.weight = 101;
        assert!(req.validate().is_err());
        req.weight = 100;
        req.unit = 0;
        assert!(req.validate().is_err());
    }
}
