//! 成绩汇总
//!
//! 纯计算模块，不做任何 I/O。成绩单接口是唯一调用方。

pub mod advisory;
pub mod aggregate;

pub use advisory::{EXPECTED_TOTAL_WEIGHT, weight_advisory};
pub use aggregate::{UNITS, build_report, round_average};
