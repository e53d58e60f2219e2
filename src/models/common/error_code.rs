//! 业务错误码
//!
//! 写入 `ApiResponse.code`，前端据此区分错误类别。HTTP 状态码仍由各处理函数决定。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1000-1999
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证 2000-2099
    AuthFailed = 2000,
    RegisterFailed = 2001,

    // 用户 2100-2199
    UserNotFound = 2100,
    UserAlreadyExists = 2101,
    UserEmailInvalid = 2102,
    UserPasswordInvalid = 2103,
    UserNameInvalid = 2104,
    UserCreationFailed = 2105,
    UserRoleInvalid = 2106,

    // 班级 3000-3099
    ClassNotFound = 3000,
    ClassHasStudents = 3001,
    ClassInUse = 3002,
    ClassFieldsMissing = 3003,

    // 科目与关联 3100-3199
    SubjectNotFound = 3100,
    SubjectAlreadyExists = 3101,
    TeachingAssignmentNotFound = 3110,
    TeachingAssignmentAlreadyExists = 3111,

    // 课程与活动 4000-4199
    LessonNotFound = 4000,
    LessonInvalid = 4001,
    ActivityNotFound = 4100,
    ActivityInvalid = 4101,
    ActivityClosed = 4102,
    SubmissionNotFound = 4110,
    SubmissionInvalid = 4111,
    SubmissionAlreadyExists = 4112,
    SubmissionGradeInvalid = 4113,

    // 评估与成绩 5000-5199
    AssessmentConfigNotFound = 5000,
    AssessmentConfigInvalid = 5001,
    ScoreInvalid = 5100,
    ReportCardUnavailable = 5200,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.as_i32(), 0);
        assert_eq!(ErrorCode::BadRequest.as_i32(), 1000);
        assert_eq!(ErrorCode::ScoreInvalid as i32, 5100);
    }
}
