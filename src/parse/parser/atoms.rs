use super::{ParseResult, Parser};

use crate::ast::{token::TokenKind, Expr, Name, TypedExpr};
use crate::span::Span;

impl Parser {
    pub(super) fn parse_atom(&mut self) -> ParseResult<TypedExpr> {
        let tok = self.token()?;
        let span = tok.span;
        let expr = match tok.kind.clone() {
            TokenKind::Number(value) => self.parse_number(&value, span)?,
            TokenKind::String(s) => Expr::StringLiteral(s),
            TokenKind::Char(c) => Expr::CharLiteral(c),
            TokenKind::Bool(b) => Expr::BoolLiteral(b),
            TokenKind::Identifier(id) => {
                let name = Name::new(id, span);
                if peek!(self, TokenKind::LeftParen) {
                    let (call, rparen) = self.parse_call(name)?;
                    return Ok(TypedExpr::new(
                        Expr::FunctionCall(call),
                        span.extend_to(&rparen),
                    ));
                }
                Expr::Variable(name)
            }
            TokenKind::LeftParen => {
                let lparen = tok.clone();
                let mut inner = self.parse_expr()?;
                let rparen = self.expect_matching(&lparen, TokenKind::RightParen)?;
                inner.span = span.extend_to(&rparen);
                return Ok(inner);
            }
            _ => {
                self.idx -= 1;
                return Err(self.unexpected_token(&tok, "expression"));
            }
        };

        Ok(TypedExpr::new(expr, span))
    }

    fn parse_number(&self, value: &str, span: Span) -> ParseResult<Expr> {
        if value.contains('.') {
            value.parse::<f64>().map(Expr::FloatLiteral).map_err(|_| {
                self.parse_error(format!("invalid float literal `{}`", value), span)
            })
        } else {
            value.parse::<i64>().map(Expr::IntLiteral).map_err(|_| {
                self.parse_error(
                    format!("integer literal `{}` does not fit in an int", value),
                    span,
                )
            })
        }
    }
}
