//! 统一错误处理模块
//!
//! 使用宏生成错误类型，每个变体带错误代码与类型名称。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - snake_case 构造函数
macro_rules! define_agenda_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum AgendaError {
            $($variant(String),)*
        }

        impl AgendaError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(AgendaError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AgendaError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(AgendaError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl AgendaError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AgendaError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_agenda_errors! {
    CacheConnection("A001", "Cache Connection Error"),
    CachePluginNotFound("A002", "Cache Plugin Not Found"),
    DatabaseConfig("A003", "Database Configuration Error"),
    DatabaseConnection("A004", "Database Connection Error"),
    DatabaseOperation("A005", "Database Operation Error"),
    UniqueViolation("A006", "Unique Constraint Violation"),
    ForeignKeyViolation("A007", "Foreign Key Constraint Violation"),
    Io("A008", "I/O Error"),
    Validation("A009", "Validation Error"),
    NotFound("A010", "Resource Not Found"),
    Serialization("A011", "Serialization Error"),
    DateParse("A012", "Date Parse Error"),
    AuthenticationFailed("A013", "Authentication Error"),
    PermissionDenied("A014", "Authorization Error"),
}

impl AgendaError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 唯一约束冲突，对应 HTTP 409
    pub fn is_conflict(&self) -> bool {
        matches!(self, AgendaError::UniqueViolation(_))
    }

    /// 外键约束冲突
    pub fn is_foreign_key(&self) -> bool {
        matches!(self, AgendaError::ForeignKeyViolation(_))
    }
}

impl fmt::Display for AgendaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AgendaError {}

// 约束冲突单独归类，其余数据库错误统一为操作错误
impl From<DbErr> for AgendaError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AgendaError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                AgendaError::ForeignKeyViolation(msg)
            }
            _ => {
                let msg = err.to_string();
                if is_sqlite_restrict_violation(&msg) {
                    AgendaError::ForeignKeyViolation(msg)
                } else {
                    AgendaError::DatabaseOperation(msg)
                }
            }
        }
    }
}

// SQLite 的 RESTRICT 外键以扩展码 1811 报错，sql_err() 不识别
fn is_sqlite_restrict_violation(msg: &str) -> bool {
    msg.contains("(code: 1811)") || msg.contains("FOREIGN KEY constraint failed")
}

impl From<std::io::Error> for AgendaError {
    fn from(err: std::io::Error) -> Self {
        AgendaError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AgendaError {
    fn from(err: serde_json::Error) -> Self {
        AgendaError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AgendaError {
    fn from(err: chrono::ParseError) -> Self {
        AgendaError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AgendaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AgendaError::cache_connection("test").code(), "A001");
        assert_eq!(AgendaError::database_config("test").code(), "A003");
        assert_eq!(AgendaError::validation("test").code(), "A009");
        assert_eq!(AgendaError::permission_denied("test").code(), "A014");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AgendaError::unique_violation("email").error_type(),
            "Unique Constraint Violation"
        );
        assert_eq!(
            AgendaError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message_and_format() {
        let err = AgendaError::validation("Score must be between 0 and 10");
        assert_eq!(err.message(), "Score must be between 0 and 10");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("between 0 and 10"));
    }

    #[test]
    fn test_generic_db_error_maps_to_operation() {
        let err: AgendaError = DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "A005");
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_sqlite_restrict_maps_to_foreign_key() {
        let err: AgendaError = DbErr::Custom(
            "error returned from database: (code: 1811) FOREIGN KEY constraint failed".into(),
        )
        .into();
        assert!(err.is_foreign_key());
        assert_eq!(err.code(), "A007");
    }

    #[test]
    fn test_date_parse_conversion() {
        let parse_err = chrono::NaiveDate::parse_from_str("2025-13-40", "%Y-%m-%d").unwrap_err();
        let err: AgendaError = parse_err.into();
        assert_eq!(err.error_type(), "Date Parse Error");
    }
}
