use super::{ParseResult, Parser};

use crate::{
    ast::{token::TokenKind, Command, CommandKind, If, Scope, While},
    span::Span,
};

impl Parser {
    pub(super) fn parse_if(&mut self) -> ParseResult<Command> {
        let start = self.expect_sp(TokenKind::If)?.start;
        let condition = self.parse_expr()?;
        let then_scope = self.parse_block()?;
        let mut end = then_scope.span.end;

        let else_scope = if expect_if!(self, TokenKind::Else) {
            let scope = if peek!(self, TokenKind::If) {
                // `else if` is an `if` nested in the else scope
                let nested = self.parse_if()?;
                let span = nested.span;
                Scope::new(vec![nested], span)
            } else {
                self.parse_block()?
            };
            end = scope.span.end;
            Some(scope)
        } else {
            None
        };

        Ok(Command::new(
            CommandKind::If(If {
                condition,
                then_scope,
                else_scope,
            }),
            Span { start, end },
        ))
    }

    pub(super) fn parse_while(&mut self) -> ParseResult<Command> {
        let start = self.expect_sp(TokenKind::While)?.start;
        let condition = self.parse_expr()?;
        let body = self.parse_block()?;
        let end = body.span.end;
        Ok(Command::new(
            CommandKind::While(While { condition, body }),
            Span { start, end },
        ))
    }
}
