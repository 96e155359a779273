#[macro_use]
mod macros;

mod atoms;
mod command;
mod control;
mod ops;
mod recover;

use crate::{
    ast::{
        token::{Token, TokenKind},
        Name, Scope,
    },
    errors::{HjError, HjErrorKind},
    parse::lexer::Lexer,
    pathlib::FilePath,
    span::{Pos, Source, Span},
};

pub type ParseResult<T> = Result<T, HjError>;

pub struct Parser {
    tokens: Vec<Token>,
    idx: usize,
    filepath: FilePath,
    errors: Vec<HjError>,
}

impl Parser {
    /// Lexes and parses `src`. Lexing errors are returned without parsing.
    pub fn parse_src(src: &str, filepath: FilePath) -> Result<Scope, Vec<HjError>> {
        let tokens = Lexer::new(src, filepath.clone()).tokenize()?;
        Parser::parse_tokens(tokens, filepath)
    }

    pub fn parse_tokens(tokens: Vec<Token>, filepath: FilePath) -> Result<Scope, Vec<HjError>> {
        let mut parser = Parser::new(tokens, filepath);
        let scope = parser.parse_file();
        if parser.errors.is_empty() {
            Ok(scope)
        } else {
            Err(parser.errors)
        }
    }

    fn new(mut tokens: Vec<Token>, filepath: FilePath) -> Parser {
        if !matches!(tokens.last(), Some(Token { kind: TokenKind::EOF, .. })) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or_default();
            tokens.push(Token {
                kind: TokenKind::EOF,
                span: Span::from(end),
            });
        }

        Parser {
            tokens,
            idx: 0,
            filepath,
            errors: vec![],
        }
    }

    fn parse_file(&mut self) -> Scope {
        let start = self.position();
        let commands = self.parse_commands(None);
        let end = self.position();
        log::debug!("parsed {} top-level commands", commands.len());
        Scope::new(commands, Span { start, end })
    }

    fn is_eof(&self) -> bool {
        self.peek_kind() == TokenKind::EOF
    }

    fn current(&self) -> &Token {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> &Token {
        // the token list always ends in EOF, so clamp to it
        let idx = (self.idx + n).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn peek_kind(&self) -> TokenKind {
        self.current().kind.clone()
    }

    fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.peek_at(n).kind.clone()
    }

    /// Start of the next token.
    fn position(&self) -> Pos {
        self.current().span.start
    }

    /// End of the previously consumed token.
    fn prev_end(&self) -> Pos {
        if self.idx == 0 {
            Pos::new()
        } else {
            self.tokens[self.idx - 1].span.end
        }
    }

    /// Consumes the next token, even if it is `EOF`.
    fn bump(&mut self) -> Token {
        let tok = self.current().clone();
        if tok.kind != TokenKind::EOF {
            self.idx += 1;
        }
        tok
    }

    fn token(&mut self) -> ParseResult<Token> {
        if self.is_eof() {
            return Err(self.unexpected_eof());
        }
        Ok(self.bump())
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let tok = self.token()?;
        if tok.kind.similar_to(&kind) {
            Ok(tok)
        } else {
            self.idx -= 1;
            Err(self.unexpected_token(&tok, kind.desc()))
        }
    }

    fn expect_sp(&mut self, kind: TokenKind) -> ParseResult<Span> {
        Ok(self.expect(kind)?.span)
    }

    fn expect_id(&mut self) -> ParseResult<Name> {
        let tok = self.token()?;
        match tok.kind {
            TokenKind::Identifier(id) => Ok(Name::new(id, tok.span)),
            TokenKind::InbuiltType(_)
            | TokenKind::Let
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Bool(_) => {
                self.idx -= 1;
                Err(self.parse_error(
                    format!("`{}` is reserved and cannot be used as a name", tok.kind),
                    tok.span,
                ))
            }
            _ => {
                self.idx -= 1;
                Err(self.unexpected_token(&tok, "identifier"))
            }
        }
    }

    fn expect_matching(&mut self, start: &Token, end: TokenKind) -> ParseResult<Span> {
        let kind = self.peek_kind();
        if !kind.similar_to(&end) {
            let found = self.current().span;
            return Err(self.parse_error(
                format!(
                    "expected a matching `{}` for `{}` at {}, but found `{}`",
                    end, start.kind, start.span, kind
                ),
                start.span.extend_to(&found),
            ));
        }

        self.expect_sp(end)
    }

    fn parse_error(&self, msg: String, span: Span) -> HjError {
        HjError::new(
            HjErrorKind::Parse,
            msg,
            Source::new(self.filepath.clone(), span),
        )
    }

    fn unexpected_eof(&self) -> HjError {
        self.parse_error(
            "unexpected end of file".to_string(),
            Span::from(self.position()),
        )
    }

    fn unexpected_token(&self, tok: &Token, expected: &str) -> HjError {
        if tok.kind == TokenKind::EOF {
            return self.unexpected_eof();
        }

        self.parse_error(
            format!("expected {}, but found `{}`", expected, tok),
            tok.span,
        )
    }
}

#[cfg(test)]
mod parser_tests {
    use super::Parser;
    use crate::ast::{CommandKind, Expr, Operator, Scope, TypedExpr};
    use crate::errors::{HjError, HjErrorKind};
    use crate::pathlib::FilePath;

    fn parse(src: &str) -> Scope {
        Parser::parse_src(src, FilePath::from("test.hj"))
            .unwrap_or_else(|errs| panic!("parse failed: {:#?}", errs))
    }

    fn parse_errors(src: &str) -> Vec<HjError> {
        match Parser::parse_src(src, FilePath::from("test.hj")) {
            Ok(scope) => panic!("expected parse errors, got {:#?}", scope),
            Err(errs) => errs,
        }
    }

    fn definition_expr(scope: &Scope, idx: usize) -> &TypedExpr {
        match &scope.commands[idx].kind {
            CommandKind::VariableDefinition(def) => def.expression.as_ref().expect("initializer"),
            other => panic!("expected a variable definition, got {:?}", other),
        }
    }

    fn binop(expr: &TypedExpr) -> (&TypedExpr, Operator, &TypedExpr) {
        match &expr.expr {
            Expr::BinaryOperation(b) => (&b.lhs, b.op, &b.rhs),
            other => panic!("expected a binary operation, got {:?}", other),
        }
    }

    #[test]
    fn multiplication_binds_tighter() {
        let scope = parse("let x = 1 + 2 * 3;");
        let (lhs, op, rhs) = binop(definition_expr(&scope, 0));
        assert_eq!(op, Operator::Plus);
        assert_eq!(lhs.expr, Expr::IntLiteral(1));
        let (l, op, r) = binop(rhs);
        assert_eq!(op, Operator::Multiply);
        assert_eq!(l.expr, Expr::IntLiteral(2));
        assert_eq!(r.expr, Expr::IntLiteral(3));
    }

    #[test]
    fn operators_are_left_associative() {
        let scope = parse("let x = 1 - 2 - 3;");
        let (lhs, op, rhs) = binop(definition_expr(&scope, 0));
        assert_eq!(op, Operator::Minus);
        assert_eq!(rhs.expr, Expr::IntLiteral(3));
        let (l, _, r) = binop(lhs);
        assert_eq!(l.expr, Expr::IntLiteral(1));
        assert_eq!(r.expr, Expr::IntLiteral(2));
    }

    #[test]
    fn parentheses_and_unary_operators() {
        let scope = parse("let x = -(1 + 2) * +4.5;");
        let (lhs, op, rhs) = binop(definition_expr(&scope, 0));
        assert_eq!(op, Operator::Multiply);
        match &lhs.expr {
            Expr::UnaryOperation(u) => {
                assert_eq!(u.op, Operator::Minus);
                let (_, inner, _) = binop(&u.expr);
                assert_eq!(inner, Operator::Plus);
            }
            other => panic!("expected a unary operation, got {:?}", other),
        }
        match &rhs.expr {
            Expr::UnaryOperation(u) => assert_eq!(u.expr.expr, Expr::FloatLiteral(4.5)),
            other => panic!("expected a unary operation, got {:?}", other),
        }
    }

    #[test]
    fn all_command_forms() {
        let scope = parse(
            r#"
let int a = 1;
let b;
a += 2;
b = 'c';
print("hi");
if flag { print(a); } else if other { } else { a = 3; }
while running { a -= 1; }
"#,
        );
        let kinds = scope
            .commands
            .iter()
            .map(|c| match &c.kind {
                CommandKind::VariableDefinition(_) => "def",
                CommandKind::VariableAssignment(_) => "assign",
                CommandKind::FunctionCall(_) => "call",
                CommandKind::If(_) => "if",
                CommandKind::While(_) => "while",
            })
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec!["def", "def", "assign", "assign", "call", "if", "while"]
        );

        match &scope.commands[2].kind {
            CommandKind::VariableAssignment(assign) => {
                assert_eq!(assign.operator, Some(Operator::Plus));
                assert_eq!(assign.variable.value, "a");
            }
            _ => unreachable!(),
        }

        match &scope.commands[5].kind {
            CommandKind::If(node) => {
                assert_eq!(node.then_scope.commands.len(), 1);
                let else_scope = node.else_scope.as_ref().expect("else branch");
                assert!(matches!(else_scope.commands[0].kind, CommandKind::If(_)));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn call_arguments() {
        let scope = parse("print(1, x + 2, \"s\"); print();");
        match &scope.commands[0].kind {
            CommandKind::FunctionCall(call) => {
                assert_eq!(call.function.value, "print");
                assert_eq!(call.args.len(), 3);
            }
            _ => unreachable!(),
        }
        match &scope.commands[1].kind {
            CommandKind::FunctionCall(call) => assert!(call.args.is_empty()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn missing_semicolon() {
        let errs = parse_errors("if x { a = 1 }");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, HjErrorKind::Parse);
        assert_eq!(errs[0].msg, "expected `;`, but found `}`");
    }

    #[test]
    fn recovers_after_errors() {
        let errs = parse_errors("let = 1;\nlet y = 2;\nx + 1;\nprint(y);");
        assert_eq!(errs.len(), 2, "{:#?}", errs);
        assert_eq!(errs[0].msg, "expected identifier, but found `=`");
        assert_eq!(errs[1].msg, "expected `=`, an assignment operator or `(`, but found `+`");
        assert_eq!(errs[1].src[0].span.unwrap().start.lineno, 2);
    }

    #[test]
    fn unexpected_end_of_file() {
        let errs = parse_errors("let x = ");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].msg, "unexpected end of file");

        let errs = parse_errors("while x { print(x);");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].msg, "unexpected end of file");
    }

    #[test]
    fn integer_overflow_is_reported() {
        let errs = parse_errors("let x = 99999999999999999999;");
        assert_eq!(
            errs[0].msg,
            "integer literal `99999999999999999999` does not fit in an int"
        );
    }

    #[test]
    fn reserved_words_are_not_names() {
        let errs = parse_errors("let int float = 1.0;");
        assert_eq!(
            errs[0].msg,
            "`float` is reserved and cannot be used as a name"
        );
    }

    #[test]
    fn debug_rendering() {
        let scope = parse("let int x = 1 + y;\nprint(x);");
        assert_eq!(
            scope.debug_str(),
            "Outer scope node with commands:\n\
             \tVariable definition with explicit type int defining variable x\n\
             \t\twith expression:\n\
             \t\tBinary operation:\n\
             \t\t\tInt literal with value 1\n\
             \t\t\tOperator: +\n\
             \t\t\tVariable with name y\n\
             \tFunction call command calling to function print\n\
             \t\tArgument 1:\n\
             \t\t\tVariable with name x\n"
        );
    }
}
