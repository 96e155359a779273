use super::{recover::Recover, ParseResult, Parser};

use crate::{
    ast::{
        token::TokenKind, Command, CommandKind, FunctionCall, Name, Scope, VariableAssignment,
        VariableDefinition,
    },
    span::Span,
};

impl Parser {
    /// Parses commands until `stop` (not consumed) or the end of the file.
    /// Broken commands are recorded as errors and skipped.
    pub(super) fn parse_commands(&mut self, stop: Option<&TokenKind>) -> Vec<Command> {
        let mut commands = vec![];
        while !self.is_eof() {
            if let Some(stop) = stop {
                if self.peek_kind().similar_to(stop) {
                    break;
                }
            }

            if let Some(command) = self
                .parse_command()
                .map(Some)
                .recover_with(self, stop, |_, _| None)
            {
                commands.push(command);
            }
        }
        commands
    }

    pub(super) fn parse_command(&mut self) -> ParseResult<Command> {
        match self.peek_kind() {
            TokenKind::Let => self.parse_variable_definition(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Identifier(_) => match self.peek_kind_at(1) {
                TokenKind::Assign(_) => self.parse_variable_assignment(),
                TokenKind::LeftParen => self.parse_call_command(),
                _ => {
                    let tok = self.peek_at(1).clone();
                    Err(self.unexpected_token(&tok, "`=`, an assignment operator or `(`"))
                }
            },
            _ => {
                let tok = self.current().clone();
                Err(self.unexpected_token(&tok, "a command"))
            }
        }
    }

    /// `let [type] name [= expression];`
    fn parse_variable_definition(&mut self) -> ParseResult<Command> {
        let start = self.expect_sp(TokenKind::Let)?.start;
        let ty = match self.peek_kind() {
            TokenKind::InbuiltType(name) => {
                let tok = self.bump();
                Some(Name::new(name, tok.span))
            }
            _ => None,
        };

        let variable = self.expect_id()?;
        let expression = match self.peek_kind() {
            TokenKind::Assign(None) => {
                self.bump();
                Some(self.parse_expr()?)
            }
            TokenKind::Assign(Some(_)) => {
                let tok = self.current().clone();
                return Err(self.unexpected_token(&tok, "`=` or `;`"));
            }
            _ => None,
        };

        let end = self.expect_sp(TokenKind::Semi)?.end;
        Ok(Command::new(
            CommandKind::VariableDefinition(VariableDefinition {
                ty,
                variable,
                expression,
            }),
            Span { start, end },
        ))
    }

    /// `name = expression;` and `name op= expression;`
    fn parse_variable_assignment(&mut self) -> ParseResult<Command> {
        let variable = self.expect_id()?;
        let operator = match self.expect(TokenKind::Assign(None))?.kind {
            TokenKind::Assign(op) => op,
            _ => unreachable!(),
        };
        let expression = self.parse_expr()?;
        let end = self.expect_sp(TokenKind::Semi)?.end;
        let span = Span {
            start: variable.span.start,
            end,
        };
        Ok(Command::new(
            CommandKind::VariableAssignment(VariableAssignment {
                variable,
                operator,
                expression,
            }),
            span,
        ))
    }

    fn parse_call_command(&mut self) -> ParseResult<Command> {
        let function = self.expect_id()?;
        let start = function.span.start;
        let (call, _) = self.parse_call(function)?;
        let end = self.expect_sp(TokenKind::Semi)?.end;
        Ok(Command::new(
            CommandKind::FunctionCall(call),
            Span { start, end },
        ))
    }

    /// Parses the argument list after a function name. Returns the call and
    /// the span of the closing parenthesis.
    pub(super) fn parse_call(&mut self, function: Name) -> ParseResult<(FunctionCall, Span)> {
        let lparen = self.expect(TokenKind::LeftParen)?;
        let mut args = vec![];
        if !expect_if!(self, TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if expect_if!(self, TokenKind::Comma) {
                    continue;
                }
                break;
            }
            self.expect_matching(&lparen, TokenKind::RightParen)?;
        }

        let end = self.prev_end();
        Ok((
            FunctionCall { function, args },
            Span {
                start: lparen.span.start,
                end,
            },
        ))
    }

    /// `{ command* }`
    pub(super) fn parse_block(&mut self) -> ParseResult<Scope> {
        let start = self.expect_sp(TokenKind::LeftCurly)?.start;
        let commands = self.parse_commands(Some(&TokenKind::RightCurly));
        let end = self.expect_sp(TokenKind::RightCurly)?.end;
        Ok(Scope::new(commands, Span { start, end }))
    }
}
