//! 预导入模块，方便使用

pub use super::activities::{
    ActiveModel as ActivityActiveModel, Entity as Activities, Model as ActivityModel,
};
pub use super::assessment_configs::{
    ActiveModel as AssessmentConfigActiveModel, Entity as AssessmentConfigs,
    Model as AssessmentConfigModel,
};
pub use super::assessment_scores::{
    ActiveModel as AssessmentScoreActiveModel, Entity as AssessmentScores,
    Model as AssessmentScoreModel,
};
pub use super::lessons::{ActiveModel as LessonActiveModel, Entity as Lessons, Model as LessonModel};
pub use super::school_classes::{
    ActiveModel as SchoolClassActiveModel, Entity as SchoolClasses, Model as SchoolClassModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::submission_attachments::{
    ActiveModel as SubmissionAttachmentActiveModel, Entity as SubmissionAttachments,
    Model as SubmissionAttachmentModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::teaching_assignments::{
    ActiveModel as TeachingAssignmentActiveModel, Entity as TeachingAssignments,
    Model as TeachingAssignmentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
