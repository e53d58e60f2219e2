pub mod activities;
pub mod assessments;
pub mod auth;
pub mod classes;
pub mod common;
pub mod lessons;
pub mod report_cards;
pub mod subjects;
pub mod system;
pub mod teaching_assignments;
pub mod users;

pub use common::{ApiResponse, ErrorCode};
pub use system::entities::AppStartTime;
