//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod activities;
pub mod assessment_configs;
pub mod assessment_scores;
pub mod lessons;
pub mod school_classes;
pub mod subjects;
pub mod submission_attachments;
pub mod submissions;
pub mod teaching_assignments;
pub mod users;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// 日期列格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// 时间列格式
pub const TIME_FORMAT: &str = "%H:%M";

pub(crate) fn ts_to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

pub(crate) fn parse_date_column(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, DATE_FORMAT).unwrap_or_default()
}

pub(crate) fn parse_time_column(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .unwrap_or_default()
}
