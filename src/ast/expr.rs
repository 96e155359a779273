use crate::ast::{tabs, Operator, Type};
use crate::span::Span;

/// An identifier together with where it was written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name {
    pub value: String,
    pub span: Span,
}

impl Name {
    pub fn new<S: Into<String>>(value: S, span: Span) -> Name {
        Name {
            value: value.into(),
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryOperation {
    pub lhs: Box<TypedExpr>,
    pub op: Operator,
    pub op_span: Span,
    pub rhs: Box<TypedExpr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryOperation {
    pub op: Operator,
    pub op_span: Span,
    pub expr: Box<TypedExpr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub function: Name,
    pub args: Vec<TypedExpr>,
}

impl FunctionCall {
    pub(crate) fn args_debug_str(&self, tab_lvl: usize) -> String {
        if self.args.is_empty() {
            return format!("{}without arguments\n", tabs(tab_lvl));
        }

        let mut s = String::new();
        for (i, arg) in self.args.iter().enumerate() {
            s += &format!("{}Argument {}:\n", tabs(tab_lvl), i + 1);
            s += &arg.debug_str(tab_lvl + 1);
        }
        s
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    BinaryOperation(BinaryOperation),
    UnaryOperation(UnaryOperation),
    Variable(Name),
    IntLiteral(i64),
    FloatLiteral(f64),
    BoolLiteral(bool),
    StringLiteral(String),
    CharLiteral(char),
    FunctionCall(FunctionCall),
}

/// An expression and the type the checker assigned to it. `ty` stays `None`
/// until the expression has been checked.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedExpr {
    pub expr: Expr,
    pub ty: Option<Type>,
    pub span: Span,
}

impl TypedExpr {
    pub fn new(expr: Expr, span: Span) -> TypedExpr {
        TypedExpr {
            expr,
            ty: None,
            span,
        }
    }

    fn ty_suffix(&self) -> String {
        match self.ty {
            Some(ty) => format!(" ({})", ty),
            None => String::new(),
        }
    }

    pub fn debug_str(&self, tab_lvl: usize) -> String {
        let indent = tabs(tab_lvl);
        let ty = self.ty_suffix();
        match &self.expr {
            Expr::BinaryOperation(node) => {
                let mut s = format!("{}Binary operation{}:\n", indent, ty);
                s += &node.lhs.debug_str(tab_lvl + 1);
                s += &format!("{}Operator: {}\n", tabs(tab_lvl + 1), node.op);
                s += &node.rhs.debug_str(tab_lvl + 1);
                s
            }
            Expr::UnaryOperation(node) => {
                let mut s = format!("{}Unary operation{}:\n", indent, ty);
                s += &format!("{}Operator: {}\n", tabs(tab_lvl + 1), node.op);
                s += &node.expr.debug_str(tab_lvl + 1);
                s
            }
            Expr::Variable(name) => format!("{}Variable with name {}{}\n", indent, name.value, ty),
            Expr::FunctionCall(call) => {
                let mut s = format!(
                    "{}Function call calling to function {}{}\n",
                    indent, call.function.value, ty
                );
                s += &call.args_debug_str(tab_lvl + 1);
                s
            }
            Expr::IntLiteral(v) => format!("{}Int literal with value {}{}\n", indent, v, ty),
            Expr::FloatLiteral(v) => format!("{}Float literal with value {}{}\n", indent, v, ty),
            Expr::BoolLiteral(v) => format!("{}Bool literal with value {}{}\n", indent, v, ty),
            Expr::CharLiteral(v) => format!(
                "{}Char literal with value '{}'{}\n",
                indent,
                v.escape_debug(),
                ty
            ),
            Expr::StringLiteral(v) => format!(
                "{}String literal with value \"{}\"{}\n",
                indent,
                v.escape_debug(),
                ty
            ),
        }
    }
}
