//! 错误类型
//!
//! 转换本身是全函数，不会失败；这里的错误只出现在命令行层。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostfixError {
    #[error("无法读取文件 '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("未知选项: {0}")]
    UnknownOption(String),

    #[error("选项 {0} 需要一个参数")]
    MissingValue(String),

    #[error("无效的日志级别: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::FromEnvError),

    #[error("日志初始化失败: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("参数冲突: {0}")]
    Conflict(String),
}

impl PostfixError {
    /// 参数错误需要额外打印用法说明
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            PostfixError::UnknownOption(_) | PostfixError::MissingValue(_) | PostfixError::Conflict(_)
        )
    }
}

pub type PostfixResult<T> = Result<T, PostfixError>;

pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> PostfixError {
    PostfixError::Io {
        path: path.into(),
        source,
    }
}
