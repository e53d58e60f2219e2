use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 评估类型
///
/// 存储使用英文 snake_case，输入同时接受前端的葡语名称。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub enum AssessmentType {
    Activity, // atividade
    Notebook, // caderno
    Quiz,     // teste
    Project,  // trabalho
    Exam,     // prova
    Other,    // outro
}

impl AssessmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Activity => "activity",
            AssessmentType::Notebook => "notebook",
            AssessmentType::Quiz => "quiz",
            AssessmentType::Project => "project",
            AssessmentType::Exam => "exam",
            AssessmentType::Other => "other",
        }
    }
}

impl std::fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssessmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activity" | "atividade" => Ok(AssessmentType::Activity),
            "notebook" | "caderno" => Ok(AssessmentType::Notebook),
            "quiz" | "teste" => Ok(AssessmentType::Quiz),
            "project" | "trabalho" => Ok(AssessmentType::Project),
            "exam" | "prova" => Ok(AssessmentType::Exam),
            "other" | "outro" => Ok(AssessmentType::Other),
            _ => Err(format!("Invalid assessment type: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for AssessmentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的评估类型: '{s}'. 支持的类型: activity, notebook, quiz, project, exam, other"
            ))
        })
    }
}

// 评估权重配置
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentConfig {
    pub id: i64,
    pub teacher_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub unit: i32,
    pub assessment_type: AssessmentType,
    /// 百分比权重 0..=100
    pub weight: i32,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentConfigView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub config: AssessmentConfig,
    pub class_name: String,
    pub subject_name: String,
}

// 成绩
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct Score {
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub unit: i32,
    pub assessment_type: AssessmentType,
    pub value: f64,
    pub note: Option<String>,
    pub recorded_on: chrono::NaiveDate,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct ScoreView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub score: Score,
    pub student_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_type_aliases() {
        let pairs = [
            ("atividade", AssessmentType::Activity),
            ("caderno", AssessmentType::Notebook),
            ("teste", AssessmentType::Quiz),
            ("trabalho", AssessmentType::Project),
            ("prova", AssessmentType::Exam),
            ("outro", AssessmentType::Other),
        ];
        for (alias, expected) in pairs {
            assert_eq!(alias.parse::<AssessmentType>().unwrap(), expected);
            assert_eq!(expected.as_str().parse::<AssessmentType>().unwrap(), expected);
        }
        assert!("seminario".parse::<AssessmentType>().is_err());
    }

    #[test]
    fn test_assessment_type_serializes_english() {
        let ty: AssessmentType = serde_json::from_str("\"prova\"").unwrap();
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\"exam\"");
    }
}
