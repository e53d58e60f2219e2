use super::entities::LessonType;
use serde::Deserialize;
use ts_rs::TS;

/// 日期区间，两端包含
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct LessonRangeQuery {
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct CreateLessonRequest {
    pub class_id: i64,
    pub subject_id: i64,
    pub date: String,
    pub time: String,
    pub topic: String,
    pub lesson_type: LessonType,
}

/// 解析后的课程输入
#[derive(Debug, Clone)]
pub struct NewLesson {
    pub class_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub date: chrono::NaiveDate,
    pub time: chrono::NaiveTime,
    pub topic: String,
    pub lesson_type: LessonType,
}

impl CreateLessonRequest {
    pub fn into_new_lesson(self, teacher_id: i64) -> Result<NewLesson, String> {
        if self.topic.trim().is_empty() {
            return Err("Topic is required".to_string());
        }
        let date = chrono::NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| format!("Invalid date: {}", self.date))?;
        let time = parse_time(self.time.trim()).ok_or_else(|| format!("Invalid time: {}", self.time))?;
        Ok(NewLesson {
            class_id: self.class_id,
            teacher_id,
            subject_id: self.subject_id,
            date,
            time,
            topic: self.topic.trim().to_string(),
            lesson_type: self.lesson_type,
        })
    }
}

// 接受 HH:MM 与 HH:MM:SS
fn parse_time(value: &str) -> Option<chrono::NaiveTime> {
    chrono::NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| chrono::NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(date: &str, time: &str, topic: &str) -> CreateLessonRequest {
        CreateLessonRequest {
            class_id: 1,
            subject_id: 2,
            date: date.into(),
            time: time.into(),
            topic: topic.into(),
            lesson_type: LessonType::Theory,
        }
    }

    #[test]
    fn test_lesson_request_parsing() {
        let lesson = request("2025-03-10", "07:30", " Frações ")
            .into_new_lesson(9)
            .unwrap();
        assert_eq!(lesson.teacher_id, 9);
        assert_eq!(lesson.topic, "Frações");
        assert_eq!(lesson.time.format("%H:%M").to_string(), "07:30");

        assert!(request("2025-03-10", "07:30:15", "x").into_new_lesson(1).is_ok());
    }

    #[test]
    fn test_lesson_request_rejects_bad_input() {
        assert!(request("10/03/2025", "07:30", "x").into_new_lesson(1).is_err());
        assert!(request("2025-03-10", "25:00", "x").into_new_lesson(1).is_err());
        assert!(request("2025-03-10", "07:30", "  ").into_new_lesson(1).is_err());
    }

    #[test]
    fn test_lesson_type_aliases() {
        let t: LessonType = serde_json::from_str("\"prática\"").unwrap();
        assert_eq!(t, LessonType::Practice);
        assert!(serde_json::from_str::<LessonType>("\"lab\"").is_err());
    }
}
