use crate::{
    ast::{
        token::{Token, TokenKind},
        Operator, INBUILT_TYPES,
    },
    errors::{HjError, HjErrorKind, HjResult},
    pathlib::FilePath,
    span::{Pos, Source, Span},
};

pub struct Lexer {
    src: Vec<char>,
    pos: Pos,
    filepath: FilePath,
}

fn is_valid_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Lexer {
    pub fn new(src: &str, filepath: FilePath) -> Lexer {
        Lexer {
            src: src.chars().collect(),
            pos: Pos::new(),
            filepath,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.src.get(self.pos.offset).is_none()
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.src.get(index).copied()
    }

    fn first(&self) -> char {
        self.char_at(self.pos.offset).unwrap_or('\0')
    }

    fn second(&self) -> char {
        self.char_at(self.pos.offset + 1).unwrap_or('\0')
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.char_at(self.pos.offset)?;
        if ch == '\n' {
            self.pos.lineno += 1;
            self.pos.col = 0;
        } else {
            self.pos.col += 1;
        }
        self.pos.offset += 1;
        Some(ch)
    }

    fn next_char_while(&mut self, start_ch: Option<char>, mut f: impl FnMut(char) -> bool) -> String {
        let mut s = start_ch.map(String::from).unwrap_or_default();
        while !self.is_eof() && f(self.first()) {
            if let Some(ch) = self.next_char() {
                s.push(ch);
            }
        }
        s
    }

    fn error(&self, msg: String, start: Pos) -> HjError {
        HjError::new(
            HjErrorKind::Lex,
            msg,
            Source::new(
                self.filepath.clone(),
                Span {
                    start,
                    end: self.pos,
                },
            ),
        )
    }

    /// Skips whitespace and `//` line comments.
    fn skip_trivia(&mut self) {
        loop {
            match (self.first(), self.second()) {
                (c, _) if c.is_whitespace() => {
                    self.next_char();
                }
                ('/', '/') => {
                    self.next_char_while(None, |c| c != '\n');
                }
                _ => break,
            }
        }
    }

    fn keyword_or_ident(&mut self, start_ch: char) -> TokenKind {
        let id = self.next_char_while(Some(start_ch), is_valid_id_char);
        match id.as_str() {
            "let" => TokenKind::Let,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            s if INBUILT_TYPES.contains(&s) => TokenKind::InbuiltType(id),
            _ => TokenKind::Identifier(id),
        }
    }

    fn number(&mut self, start_ch: char, start: Pos) -> HjResult<TokenKind> {
        let value = self.next_char_while(Some(start_ch), |c| c.is_ascii_digit() || c == '.');
        let dots = value.chars().filter(|c| *c == '.').count();
        if dots > 1 || value.ends_with('.') {
            return Err(self.error(format!("invalid number syntax `{}`", value), start));
        }
        Ok(TokenKind::Number(value))
    }

    /// Reads the body of a quoted literal after its opening quote, resolving
    /// escape sequences. Returns `None` if the closing quote is missing.
    fn quoted(&mut self, quote: char) -> HjResult<Option<String>> {
        let mut s = String::new();
        let mut bad_escape = None;
        while let Some(ch) = self.next_char() {
            match ch {
                c if c == quote => {
                    return match bad_escape {
                        Some(err) => Err(err),
                        None => Ok(Some(s)),
                    };
                }
                '\\' => {
                    let esc_start = Pos {
                        col: self.pos.col - 1,
                        offset: self.pos.offset - 1,
                        ..self.pos
                    };
                    match self.next_char() {
                        Some('n') => s.push('\n'),
                        Some('t') => s.push('\t'),
                        Some('r') => s.push('\r'),
                        Some('0') => s.push('\0'),
                        Some(c @ '\\') | Some(c @ '"') | Some(c @ '\'') => s.push(c),
                        Some(c) => {
                            if bad_escape.is_none() {
                                bad_escape = Some(self.error(
                                    format!("unknown escape sequence `\\{}`", c),
                                    esc_start,
                                ));
                            }
                        }
                        None => break,
                    }
                }
                c => s.push(c),
            }
        }

        Ok(None)
    }

    fn string(&mut self, start: Pos) -> HjResult<TokenKind> {
        match self.quoted('"')? {
            Some(s) => Ok(TokenKind::String(s)),
            None => Err(self.error(
                "unterminated string literal (you have to close the `\"`)".to_string(),
                start,
            )),
        }
    }

    fn char(&mut self, start: Pos) -> HjResult<TokenKind> {
        let s = match self.quoted('\'')? {
            Some(s) => s,
            None => {
                return Err(self.error(
                    "unterminated char literal (you have to close the `'`)".to_string(),
                    start,
                ))
            }
        };

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(TokenKind::Char(c)),
            (None, _) => Err(self.error("empty char literal".to_string(), start)),
            _ => Err(self.error(
                format!("char literal '{}' must contain exactly one character", s),
                start,
            )),
        }
    }

    pub fn next_token(&mut self) -> HjResult<Token> {
        self.skip_trivia();
        let start = self.pos;
        let c = match self.next_char() {
            Some(c) => c,
            None => {
                return Ok(Token {
                    kind: TokenKind::EOF,
                    span: Span::from(start),
                })
            }
        };

        let kind = match c {
            // single symbol tokens
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftCurly,
            '}' => TokenKind::RightCurly,
            ';' => TokenKind::Semi,
            ',' => TokenKind::Comma,
            '=' => TokenKind::Assign(None),

            '+' | '-' | '*' | '/' | '%' => {
                let op = match Operator::from_symbol(c) {
                    Some(op) => op,
                    None => unreachable!("operator symbol `{}` has no operator", c),
                };
                if self.first() == '=' {
                    self.next_char();
                    TokenKind::Assign(Some(op))
                } else {
                    TokenKind::Operator(op)
                }
            }

            '\'' => self.char(start)?,
            '"' => self.string(start)?,

            c @ '0'..='9' => self.number(c, start)?,
            c if c == '_' || c.is_ascii_alphabetic() => self.keyword_or_ident(c),

            c => return Err(self.error(format!("unexpected character `{}`", c), start)),
        };

        Ok(Token {
            kind,
            span: Span {
                start,
                end: self.pos,
            },
        })
    }

    /// Runs the lexer to completion. The returned tokens always end with
    /// `EOF`; every lexing error in the source is reported.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<HjError>> {
        let mut tokens = vec![];
        let mut errors = vec![];
        loop {
            match self.next_token() {
                Ok(tok) => {
                    let is_eof = tok.kind == TokenKind::EOF;
                    tokens.push(tok);
                    if is_eof {
                        break;
                    }
                }
                Err(err) => {
                    log::debug!("lexer: {}", err);
                    errors.push(err);
                }
            }
        }

        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(errors)
        }
    }
}

/// Convenience helper that lexes `src` with a placeholder file path.
pub fn tokens(src: &str) -> Result<Vec<Token>, Vec<HjError>> {
    Lexer::new(src, FilePath::from("<input>")).tokenize()
}
