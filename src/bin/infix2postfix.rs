use std::env;
use std::fs;
use std::process;
use anyhow::Context;
use tracing::info;
use infix2postfix::config::{self, CliOptions, Command};
use infix2postfix::error::io_error;
use infix2postfix::{convert, logger, to_spaced};

const VERSION: &str = env!("INFIX2POSTFIX_VERSION");

fn print_usage() {
    println!("infix2postfix v{}", VERSION);
    println!("Usage: infix2postfix [options] [expression...]");
    println!();
    println!("Options:");
    println!("  --file, -f <path>     逐行转换文件中的表达式");
    println!("  --spaced, -s          以空格分隔输出的后缀表达式");
    println!("  --verbose             输出调试日志");
    println!("  --trace               输出每一步的栈操作");
    println!("  --version, -v         显示版本号");
    println!("  --help, -h            显示帮助信息");
    println!("  --                    之后的参数都视为表达式");
    println!();
    println!("以 '-' 开头的表达式（如 -A）会被当作选项，需要放在 -- 之后：");
    println!("  infix2postfix -- -A+B");
    println!();
    println!("Environment:");
    println!("  {}      日志级别 (error|warn|info|debug|trace|off)", config::LOG_ENV);
    println!();
    println!("Examples:");
    println!("  infix2postfix \"A+B*C\"");
    println!("  infix2postfix -s \"(A+B)*C\"");
    println!("  infix2postfix --file exprs.txt");
}

fn print_conversion(expression: &str, spaced: bool) {
    let postfix = convert(expression);
    let postfix = if spaced { to_spaced(&postfix) } else { postfix };
    println!("Infix: {}", expression);
    println!("Postfix: {}", postfix);
}

fn run(options: CliOptions) -> anyhow::Result<()> {
    if let Some(path) = &options.file {
        let source = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        let mut count = 0;
        for line in source.lines() {
            let expression = line.trim_end_matches('\r');
            if expression.is_empty() {
                continue;
            }
            print_conversion(expression, options.spaced);
            count += 1;
        }
        info!("converted {} expressions from {}", count, path.display());
        return Ok(());
    }

    for expression in &options.expressions {
        print_conversion(expression, options.spaced);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match config::parse_args(&args) {
        Ok(Command::Convert(options)) => options.with_default_expression(),
        Ok(Command::Version) => {
            println!("infix2postfix v{}", VERSION);
            return;
        }
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("错误: {}", e);
            if e.is_usage_error() {
                print_usage();
            }
            process::exit(1);
        }
    };

    if let Err(e) = logger::init(options.log_level) {
        eprintln!("警告: {}", e);
    }

    if let Err(e) = run(options).context("转换失败") {
        eprintln!("错误: {:#}", e);
        process::exit(1);
    }
}
