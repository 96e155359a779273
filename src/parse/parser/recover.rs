use crate::ast::token::TokenKind;
use crate::errors::HjError;
use crate::span::Pos;

use super::Parser;

pub trait Recover<T> {
    fn recover_with(
        self,
        parser: &mut Parser,
        stop: Option<&TokenKind>,
        fallback: impl FnOnce(&mut Parser, Pos) -> T,
    ) -> T;
}

impl<T> Recover<T> for Result<T, HjError> {
    fn recover_with(
        self,
        parser: &mut Parser,
        stop: Option<&TokenKind>,
        fallback: impl FnOnce(&mut Parser, Pos) -> T,
    ) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                parser.record_parse_error(err);
                let recovered = parser.recover_after_error(stop);
                fallback(parser, recovered)
            }
        }
    }
}

impl Parser {
    pub(super) fn record_parse_error(&mut self, err: HjError) {
        log::debug!("[record parse error] {}", err);
        self.errors.push(err);
    }

    /// Skips tokens until the parser is past the end of the broken command:
    /// just after a `;` or a closing `}` at the same nesting level, or in
    /// front of `stop`. Returns the end of the last skipped token.
    pub(super) fn recover_after_error(&mut self, stop: Option<&TokenKind>) -> Pos {
        let mut depth: usize = 0;
        while !self.is_eof() {
            let kind = self.peek_kind();
            if depth == 0 {
                if let Some(stop) = stop {
                    if kind.similar_to(stop) {
                        break;
                    }
                }

                if kind == TokenKind::Semi {
                    self.bump();
                    break;
                }
            }

            let tok = self.bump();
            match tok.kind {
                TokenKind::LeftCurly => depth += 1,
                TokenKind::RightCurly => {
                    if depth <= 1 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }

        self.prev_end()
    }
}
