//! 中缀转后缀
//!
//! 调度场算法的单字符简化版。操作数直接输出；运算符在栈上等待，
//! 直到后面出现优先级不高于它的运算符、右括号或输入结束。

use tracing::{debug, trace};
use crate::lexer::{TokenKind, lex, precedence};

/// 将中缀表达式转换为后缀表达式
///
/// 同级运算符一律左结合（包括 `^`）。输入格式错误时尽力输出：
/// 多余的 `)` 被忽略，未闭合的 `(` 会在结束时被当作运算符输出。
pub fn convert(expression: &str) -> String {
    let mut output = String::with_capacity(expression.len());
    let mut stack: Vec<char> = Vec::new();

    for token in lex(expression) {
        let c = token.ch;
        match token.kind {
            TokenKind::Operand => {
                trace!("emit operand {:?} @{}", c, token.offset);
                output.push(c);
            }
            TokenKind::OpenParen => {
                trace!("push '(' @{}", token.offset);
                stack.push(c);
            }
            TokenKind::CloseParen => {
                while let Some(&top) = stack.last() {
                    if top == '(' {
                        break;
                    }
                    stack.pop();
                    trace!("pop {:?} for ')' @{}", top, token.offset);
                    output.push(top);
                }
                if stack.last() == Some(&'(') {
                    stack.pop();
                    trace!("discard '(' matched @{}", token.offset);
                } else {
                    trace!("unmatched ')' @{}", token.offset);
                }
            }
            TokenKind::Operator => {
                let prec = precedence(c);
                while let Some(&top) = stack.last() {
                    if precedence(top) < prec {
                        break;
                    }
                    stack.pop();
                    trace!("pop {:?} before {:?} @{}", top, c, token.offset);
                    output.push(top);
                }
                trace!("push {:?} @{}", c, token.offset);
                stack.push(c);
            }
        }
    }

    // 剩余的栈内容按出栈顺序输出（未闭合的 `(` 也会输出）
    while let Some(top) = stack.pop() {
        trace!("drain {:?}", top);
        output.push(top);
    }

    debug!("convert {:?} -> {:?}", expression, output);
    output
}

/// 以空格分隔每个 token，例如 `ABC*+` -> `A B C * +`
pub fn to_spaced(postfix: &str) -> String {
    let mut spaced = String::with_capacity(postfix.len() * 2);
    for (i, c) in postfix.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    spaced
}
