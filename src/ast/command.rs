use crate::ast::{tabs, FunctionCall, Name, Operator, TypedExpr};
use crate::span::Span;

/// `let [type] name [= expression];`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub ty: Option<Name>,
    pub variable: Name,
    pub expression: Option<TypedExpr>,
}

/// `name = expression;` or `name op= expression;`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableAssignment {
    pub variable: Name,
    pub operator: Option<Operator>,
    pub expression: TypedExpr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct If {
    pub condition: TypedExpr,
    pub then_scope: Scope,
    pub else_scope: Option<Scope>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct While {
    pub condition: TypedExpr,
    pub body: Scope,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CommandKind {
    VariableDefinition(VariableDefinition),
    VariableAssignment(VariableAssignment),
    FunctionCall(FunctionCall),
    If(If),
    While(While),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub kind: CommandKind,
    pub span: Span,
}

impl Command {
    pub fn new(kind: CommandKind, span: Span) -> Command {
        Command { kind, span }
    }

    pub fn debug_str(&self, tab_lvl: usize) -> String {
        let indent = tabs(tab_lvl);
        match &self.kind {
            CommandKind::VariableDefinition(node) => {
                let mut s = format!("{}Variable definition", indent);
                if let Some(ty) = &node.ty {
                    s += &format!(" with explicit type {}", ty.value);
                }
                s += &format!(" defining variable {}\n", node.variable.value);
                if let Some(expr) = &node.expression {
                    s += &format!("{}with expression:\n", tabs(tab_lvl + 1));
                    s += &expr.debug_str(tab_lvl + 1);
                }
                s
            }
            CommandKind::VariableAssignment(node) => {
                let mut s = format!("{}Variable assignment", indent);
                if let Some(op) = node.operator {
                    s += &format!(" with operator {}=", op);
                }
                s += &format!(" assigning to variable {}\n", node.variable.value);
                s += &format!("{}with expression:\n", tabs(tab_lvl + 1));
                s += &node.expression.debug_str(tab_lvl + 1);
                s
            }
            CommandKind::FunctionCall(call) => {
                let mut s = format!(
                    "{}Function call command calling to function {}\n",
                    indent, call.function.value
                );
                s += &call.args_debug_str(tab_lvl + 1);
                s
            }
            CommandKind::If(node) => {
                let mut s = format!("{}If statement with condition:\n", indent);
                s += &node.condition.debug_str(tab_lvl + 1);
                s += &format!("{}then:\n", indent);
                s += &node.then_scope.commands_debug_str(tab_lvl + 1);
                if let Some(else_scope) = &node.else_scope {
                    s += &format!("{}else:\n", indent);
                    s += &else_scope.commands_debug_str(tab_lvl + 1);
                }
                s
            }
            CommandKind::While(node) => {
                let mut s = format!("{}While loop with condition:\n", indent);
                s += &node.condition.debug_str(tab_lvl + 1);
                s += &format!("{}body:\n", indent);
                s += &node.body.commands_debug_str(tab_lvl + 1);
                s
            }
        }
    }
}

/// A list of commands that share a variable scope: a whole file or a braced block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scope {
    pub commands: Vec<Command>,
    pub span: Span,
}

impl Scope {
    pub fn new(commands: Vec<Command>, span: Span) -> Scope {
        Scope { commands, span }
    }

    pub fn debug_str(&self) -> String {
        let mut s = String::from("Outer scope node with commands:\n");
        s += &self.commands_debug_str(1);
        s
    }

    fn commands_debug_str(&self, tab_lvl: usize) -> String {
        if self.commands.is_empty() {
            return format!("{}(no commands)\n", tabs(tab_lvl));
        }

        self.commands
            .iter()
            .map(|command| command.debug_str(tab_lvl))
            .collect()
    }
}
