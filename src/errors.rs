//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_assigntrack_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AssignTrackError {
            $($variant(String),)*
        }

        impl AssignTrackError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AssignTrackError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AssignTrackError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AssignTrackError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AssignTrackError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AssignTrackError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_assigntrack_errors! {
    Validation("E001", "Validation Error"),
    NotFound("E002", "Resource Not Found"),
    Persistence("E003", "Persistence Error"),
    Serialization("E004", "Serialization Error"),
    StorageBackendNotFound("E005", "Storage Backend Not Found"),
}

impl AssignTrackError {
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

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AssignTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AssignTrackError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for AssignTrackError {
    fn from(err: std::io::Error) -> Self {
        AssignTrackError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for AssignTrackError {
    fn from(err: serde_json::Error) -> Self {
        AssignTrackError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssignTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AssignTrackError::validation("test").code(), "E001");
        assert_eq!(AssignTrackError::not_found("test").code(), "E002");
        assert_eq!(AssignTrackError::persistence("test").code(), "E003");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AssignTrackError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            AssignTrackError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AssignTrackError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = AssignTrackError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: AssignTrackError = io.into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("missing file"));
    }
}
