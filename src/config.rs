//! 命令行配置

use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use crate::error::{PostfixError, PostfixResult};

/// 没有给出任何表达式时使用的示例
pub const DEFAULT_EXPRESSION: &str = "A+B*C";

/// 读取日志级别的环境变量
pub const LOG_ENV: &str = "INFIX2POSTFIX_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub expressions: Vec<String>,
    pub file: Option<PathBuf>,
    pub spaced: bool,
    /// 命令行指定的日志级别；为 `None` 时由环境变量决定
    pub log_level: Option<LevelFilter>,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            expressions: Vec::new(),
            file: None,
            spaced: false,
            log_level: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Convert(CliOptions),
    Version,
    Help,
}

/// 解析命令行参数，`args[0]` 为程序名
pub fn parse_args(args: &[String]) -> PostfixResult<Command> {
    let mut options = CliOptions::default();
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--spaced" | "-s" => {
                options.spaced = true;
            }
            "--verbose" => {
                options.log_level = Some(options.log_level.unwrap_or(LevelFilter::DEBUG).max(LevelFilter::DEBUG));
            }
            "--trace" => {
                options.log_level = Some(LevelFilter::TRACE);
            }
            "--file" | "-f" => {
                if options.file.is_some() {
                    return Err(PostfixError::Conflict("--file 只能指定一次".to_string()));
                }
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| PostfixError::MissingValue(arg.clone()))?;
                options.file = Some(PathBuf::from(path));
            }
            "--" => {
                // 之后的参数都是表达式，便于输入以 '-' 开头的内容
                options.expressions.extend(args[i + 1..].iter().cloned());
                break;
            }
            _ => {
                if arg.starts_with('-') && arg.len() > 1 {
                    return Err(PostfixError::UnknownOption(arg.clone()));
                }
                options.expressions.push(arg.clone());
            }
        }
        i += 1;
    }

    if options.file.is_some() && !options.expressions.is_empty() {
        return Err(PostfixError::Conflict(
            "不能同时指定 --file 和表达式".to_string(),
        ));
    }

    Ok(Command::Convert(options))
}

impl CliOptions {
    /// 未提供任何输入时回退到示例表达式
    pub fn with_default_expression(mut self) -> Self {
        if self.file.is_none() && self.expressions.is_empty() {
            self.expressions.push(DEFAULT_EXPRESSION.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("infix2postfix")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    fn options(list: &[&str]) -> CliOptions {
        match parse_args(&args(list)).unwrap() {
            Command::Convert(options) => options,
            other => panic!("expected Convert, got {:?}", other),
        }
    }

    #[test]
    fn test_no_args_uses_default() {
        let opts = options(&[]).with_default_expression();
        assert_eq!(opts.expressions, vec![DEFAULT_EXPRESSION.to_string()]);
        assert_eq!(opts.log_level, None);
        assert!(!opts.spaced);
    }

    #[test]
    fn test_positional_expressions() {
        let opts = options(&["A+B", "-s", "(A)"]);
        assert_eq!(opts.expressions, vec!["A+B".to_string(), "(A)".to_string()]);
        assert!(opts.spaced);
    }

    #[test]
    fn test_lone_dash_is_an_expression() {
        assert_eq!(options(&["-"]).expressions, vec!["-".to_string()]);
    }

    #[test]
    fn test_double_dash_ends_options() {
        let opts = options(&["--", "-A", "--spaced"]);
        assert_eq!(opts.expressions, vec!["-A".to_string(), "--spaced".to_string()]);
        assert!(!opts.spaced);
    }

    #[test]
    fn test_file_option() {
        let opts = options(&["-f", "exprs.txt"]).with_default_expression();
        assert_eq!(opts.file, Some(PathBuf::from("exprs.txt")));
        assert!(opts.expressions.is_empty());
    }

    #[test]
    fn test_file_missing_value() {
        let err = parse_args(&args(&["--file"])).unwrap_err();
        assert!(matches!(err, PostfixError::MissingValue(ref o) if o == "--file"));
    }

    #[test]
    fn test_file_and_expression_conflict() {
        let err = parse_args(&args(&["-f", "a.txt", "A+B"])).unwrap_err();
        assert!(matches!(err, PostfixError::Conflict(_)));
    }

    #[test]
    fn test_unknown_option() {
        let err = parse_args(&args(&["--bogus"])).unwrap_err();
        assert!(matches!(err, PostfixError::UnknownOption(ref o) if o == "--bogus"));
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(&args(&["-v"])).unwrap(), Command::Version);
        assert_eq!(parse_args(&args(&["A", "--help"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_log_level_flags() {
        assert_eq!(options(&["--verbose"]).log_level, Some(LevelFilter::DEBUG));
        assert_eq!(options(&["--trace"]).log_level, Some(LevelFilter::TRACE));
        assert_eq!(options(&["--trace", "--verbose"]).log_level, Some(LevelFilter::TRACE));
    }
}
