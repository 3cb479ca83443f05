//! infix2postfix
//!
//! 将中缀算术表达式（如 `A+B*C`）转换为后缀表达式（逆波兰式，如 `ABC*+`）。
//! 单遍从左到右扫描，借助一个运算符栈处理优先级与括号作用域。

pub mod config;
pub mod converter;
pub mod error;
pub mod lexer;
pub mod logger;

pub use converter::{convert, to_spaced};
pub use error::{PostfixError, PostfixResult};
pub use lexer::{Token, TokenKind, lex, precedence};
