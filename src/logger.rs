//! 日志初始化
//!
//! 输出到 stderr，避免与转换结果混在一起。

use tracing_subscriber::{
    EnvFilter, fmt::Layer, prelude::*,
    filter::LevelFilter,
};
use crate::config::LOG_ENV;
use crate::error::PostfixResult;

/// 默认只输出警告及以上
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// 命令行给出的级别优先，否则读取 `INFIX2POSTFIX_LOG`
pub fn build_filter(level: Option<LevelFilter>) -> PostfixResult<EnvFilter> {
    let filter = match level {
        Some(level) => EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy(""),
        None => EnvFilter::builder()
            .with_default_directive(DEFAULT_LEVEL.into())
            .with_env_var(LOG_ENV)
            .from_env()?,
    };
    Ok(filter)
}

/// 安装全局订阅者，只能调用一次
pub fn init(level: Option<LevelFilter>) -> PostfixResult<()> {
    let filter = build_filter(level)?;

    tracing_subscriber::registry()
        .with(Layer::new()
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .with_filter(filter)
        )
        .try_init()?;

    Ok(())
}

