use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub enum LessonType {
    Theory,
    Practice,
    Activity,
}

impl LessonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonType::Theory => "theory",
            LessonType::Practice => "practice",
            LessonType::Activity => "activity",
        }
    }
}

impl std::fmt::Display for LessonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LessonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "theory" | "teórica" | "teorica" => Ok(LessonType::Theory),
            "practice" | "prática" | "pratica" => Ok(LessonType::Practice),
            "activity" | "atividade" => Ok(LessonType::Activity),
            _ => Err(format!("Invalid lesson type: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for LessonType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课程类型: '{s}'. 支持的类型: theory, practice, activity"
            ))
        })
    }
}

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct Lesson {
    pub id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub date: chrono::NaiveDate,
    pub time: chrono::NaiveTime,
    pub topic: String,
    pub lesson_type: LessonType,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 课表视图，附带名称
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct LessonView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub lesson: Lesson,
    pub class_name: String,
    pub subject_name: String,
    pub teacher_name: String,
}
