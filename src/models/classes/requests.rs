use serde::Deserialize;
use ts_rs::TS;

/// 创建与更新共用，所有字段必填
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassPayload {
    pub name: String,
    pub grade_level: String,
    pub year: i32,
    pub shift: String,
}

impl ClassPayload {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty()
            || self.grade_level.trim().is_empty()
            || self.shift.trim().is_empty()
        {
            return Err("Name, grade level and shift are required");
        }
        if !(1900..=9999).contains(&self.year) {
            return Err("Year is invalid");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, year: i32) -> ClassPayload {
        ClassPayload {
            name: name.into(),
            grade_level: "9º ano".into(),
            year,
            shift: "Matutino".into(),
        }
    }

    #[test]
    fn test_class_payload_validation() {
        assert!(payload("9A", 2025).validate().is_ok());
        assert!(payload("  ", 2025).validate().is_err());
        assert!(payload("9A", 0).validate().is_err());
    }
}
