//! 字符分类
//!
//! 每个输入字符恰好对应一个 token：操作数、左括号、右括号，其余一律视为运算符。

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// 单个字母或十进制数字
    #[regex(r"[\p{L}\p{Nd}]", priority = 3)]
    Operand,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// 兜底分支：`+ - * / ^` 以及任何无法识别的字符（包括空白）
    #[regex(r"(?s:.)", priority = 1)]
    Operator,
}

impl TokenKind {
    /// 对单个字符分类
    pub fn classify(c: char) -> TokenKind {
        let mut buf = [0u8; 4];
        let mut lexer = TokenKind::lexer(c.encode_utf8(&mut buf));
        match lexer.next() {
            Some(Ok(kind)) => kind,
            _ => TokenKind::Operator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub ch: char,
    /// 字节偏移
    pub offset: usize,
}

/// 词法分析（不会失败）
pub fn lex(expression: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(expression);
    let mut tokens = Vec::with_capacity(expression.len());

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = result.unwrap_or(TokenKind::Operator);
        for (i, ch) in lexer.slice().char_indices() {
            tokens.push(Token {
                kind,
                ch,
                offset: span.start + i,
            });
        }
    }

    tokens
}

/// 运算符优先级，数值越大结合越紧；`(` 与未知字符为 -1
pub fn precedence(c: char) -> i32 {
    match c {
        '^' => 3,
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => -1,
    }
}
