pub mod activities;

pub mod assessment_configs;

pub mod auth;

pub mod classes;

pub mod lessons;

pub mod report_cards;

pub mod scores;

pub mod subjects;

pub mod system;

pub mod teaching_assignments;

pub mod users;

pub use activities::configure_activity_routes;
pub use assessment_configs::configure_assessment_config_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use lessons::configure_lesson_routes;
pub use report_cards::configure_report_card_routes;
pub use scores::configure_score_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use teaching_assignments::configure_teaching_assignment_routes;
pub use users::configure_user_routes;
