use super::{ParseResult, Parser};

use crate::ast::{token::TokenKind, BinaryOperation, Expr, TypedExpr, UnaryOperation};

impl Parser {
    pub(super) fn parse_expr(&mut self) -> ParseResult<TypedExpr> {
        self.parse_infix_expr(1)
    }

    /// Precedence climbing over the binary operators. Every operator is left
    /// associative, so the right operand binds one level tighter.
    pub(super) fn parse_infix_expr(&mut self, min_prec: usize) -> ParseResult<TypedExpr> {
        let mut lhs = self.parse_prefix_expr()?;

        while let TokenKind::Operator(op) = self.peek_kind() {
            let prec = op.priority();
            if prec < min_prec {
                break;
            }

            let op_span = self.bump().span;
            let rhs = self.parse_infix_expr(prec + 1)?;
            let span = lhs.span.extend_to(&rhs.span);
            lhs = TypedExpr::new(
                Expr::BinaryOperation(BinaryOperation {
                    lhs: Box::new(lhs),
                    op,
                    op_span,
                    rhs: Box::new(rhs),
                }),
                span,
            );
        }

        Ok(lhs)
    }

    pub(super) fn parse_prefix_expr(&mut self) -> ParseResult<TypedExpr> {
        match self.peek_kind() {
            TokenKind::Operator(op) if op.is_prefix() => {
                let op_span = self.bump().span;
                let expr = self.parse_prefix_expr()?;
                let span = op_span.extend_to(&expr.span);
                Ok(TypedExpr::new(
                    Expr::UnaryOperation(UnaryOperation {
                        op,
                        op_span,
                        expr: Box::new(expr),
                    }),
                    span,
                ))
            }
            _ => self.parse_atom(),
        }
    }
}
