use std::fmt;

use crate::ast::Operator;
use crate::span::Span;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// let
    Let,
    /// if
    If,
    /// else
    Else,
    /// while
    While,

    // atoms
    InbuiltType(String),
    Identifier(String),
    Number(String),
    String(String),
    Char(char),
    Bool(bool),

    /// + - * / %
    Operator(Operator),
    /// `=` when `None`, otherwise a compound assignment like `+=`
    Assign(Option<Operator>),

    // delimeters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// {
    LeftCurly,
    /// }
    RightCurly,
    /// ;
    Semi,
    /// ,
    Comma,

    EOF,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// One line of `-d` output, e.g. `Operator ("+")`.
    pub fn debug_str(&self) -> String {
        format!("{} (\"{}\")", self.kind.category(), self.kind)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl TokenKind {
    /// Short description used in parse errors.
    pub fn desc(&self) -> &str {
        match self {
            TokenKind::Let => "`let`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::While => "`while`",
            TokenKind::InbuiltType(_) => "type",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::Char(_) => "char",
            TokenKind::Bool(b) => {
                if *b {
                    "`true`"
                } else {
                    "`false`"
                }
            }
            TokenKind::Operator(_) => "operator",
            TokenKind::Assign(None) => "`=`",
            TokenKind::Assign(Some(_)) => "assignment operator",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBracket => "`[`",
            TokenKind::RightBracket => "`]`",
            TokenKind::LeftCurly => "`{`",
            TokenKind::RightCurly => "`}`",
            TokenKind::Semi => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::EOF => "EOF",
        }
    }

    /// Token category as printed in debug mode.
    pub fn category(&self) -> &str {
        match self {
            TokenKind::Operator(_) => "Operator",
            TokenKind::Assign(_) => "Assignment operator",
            TokenKind::LeftParen => "Opening parenthesis",
            TokenKind::RightParen => "Closing parenthesis",
            TokenKind::LeftBracket => "Opening bracket",
            TokenKind::RightBracket => "Closing bracket",
            TokenKind::LeftCurly => "Opening brace",
            TokenKind::RightCurly => "Closing brace",
            TokenKind::InbuiltType(_) => "Inbuilt type",
            TokenKind::Identifier(_) => "Custom name",
            TokenKind::Number(_) => "Number literal",
            TokenKind::String(_) => "String literal",
            TokenKind::Char(_) => "Char literal",
            TokenKind::Bool(_) => "Bool literal",
            TokenKind::Semi => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Let | TokenKind::If | TokenKind::Else | TokenKind::While => "Keyword",
            TokenKind::EOF => "End of file",
        }
    }

    pub fn similar_to(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Let => write!(f, "let"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::While => write!(f, "while"),
            TokenKind::InbuiltType(s) | TokenKind::Identifier(s) | TokenKind::Number(s) => {
                write!(f, "{}", s)
            }
            TokenKind::String(s) => write!(f, "\"{}\"", s.escape_debug()),
            TokenKind::Char(c) => write!(f, "'{}'", c.escape_debug()),
            TokenKind::Bool(b) => write!(f, "{}", b),
            TokenKind::Operator(op) => write!(f, "{}", op),
            TokenKind::Assign(None) => write!(f, "="),
            TokenKind::Assign(Some(op)) => write!(f, "{}=", op),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::LeftBracket => write!(f, "["),
            TokenKind::RightBracket => write!(f, "]"),
            TokenKind::LeftCurly => write!(f, "{{"),
            TokenKind::RightCurly => write!(f, "}}"),
            TokenKind::Semi => write!(f, ";"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::EOF => write!(f, "EOF"),
        }
    }
}
