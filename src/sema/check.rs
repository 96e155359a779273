use itertools::Itertools;

use crate::{
    ast::{
        Command, CommandKind, Expr, FunctionCall, Name, Scope, Type, TypedExpr,
        VariableAssignment, VariableDefinition,
    },
    errors::{HjError, HjErrorKind, HjResult},
    pathlib::FilePath,
    span::{Source, Span},
};

use super::{
    builtins,
    scope::{ScopeStack, Variable},
};

/// Resolves variables and assigns a type to every expression of a parsed
/// file. Errors are collected per command, so one broken command does not
/// hide problems in the ones after it.
pub struct TypeChecker {
    scopes: ScopeStack,
    filepath: FilePath,
    errors: Vec<HjError>,
}

impl TypeChecker {
    pub fn new(filepath: FilePath) -> TypeChecker {
        TypeChecker {
            scopes: ScopeStack::new(),
            filepath,
            errors: vec![],
        }
    }

    pub fn check(&mut self, scope: &mut Scope) -> Result<(), Vec<HjError>> {
        self.check_commands(&mut scope.commands);
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }

    /// Variables visible at the outermost level after checking, sorted by name.
    pub fn variables(&self) -> Vec<&Variable> {
        self.scopes.outer_variables()
    }

    fn type_error(&self, msg: String, span: Span) -> HjError {
        HjError::new(
            HjErrorKind::Type,
            msg,
            Source::new(self.filepath.clone(), span),
        )
    }

    fn check_commands(&mut self, commands: &mut [Command]) {
        for command in commands.iter_mut() {
            if let Err(err) = self.check_command(command) {
                log::debug!("type checker: {}", err);
                self.errors.push(err);
            }
        }
    }

    fn check_block(&mut self, scope: &mut Scope) {
        self.scopes.push();
        log::debug!("checking block at scope depth {}", self.scopes.depth());
        self.check_commands(&mut scope.commands);
        self.scopes.pop();
    }

    fn check_command(&mut self, command: &mut Command) -> HjResult<()> {
        match &mut command.kind {
            CommandKind::VariableDefinition(def) => self.check_definition(def, command.span),
            CommandKind::VariableAssignment(assign) => self.check_assignment(assign),
            CommandKind::FunctionCall(call) => self.check_call(call, command.span),
            CommandKind::If(node) => {
                if let Err(err) = self.check_condition(&mut node.condition, "if statement") {
                    self.errors.push(err);
                }
                self.check_block(&mut node.then_scope);
                if let Some(else_scope) = &mut node.else_scope {
                    self.check_block(else_scope);
                }
                Ok(())
            }
            CommandKind::While(node) => {
                if let Err(err) = self.check_condition(&mut node.condition, "while loop") {
                    self.errors.push(err);
                }
                self.check_block(&mut node.body);
                Ok(())
            }
        }
    }

    fn resolve_type_name(&self, name: &Name) -> HjResult<Type> {
        Type::from_name(&name.value).ok_or_else(|| {
            self.type_error(
                format!("type \"{}\" is not supported yet", name.value),
                name.span,
            )
        })
    }

    fn check_definition(&mut self, def: &mut VariableDefinition, span: Span) -> HjResult<()> {
        // a rejected type name defines nothing: there is no type to give the variable
        let declared = match &def.ty {
            Some(name) => Some(self.resolve_type_name(name)?),
            None => None,
        };

        let result = match (declared, &mut def.expression) {
            (Some(left), Some(expr)) => match self.assign_expression_type(expr) {
                Ok(right) if right != left => Err(self.type_error(
                    format!(
                        "mismatching variable types in variable definition: \"{}\" (left) and \"{}\" (right)",
                        left, right
                    ),
                    span,
                )),
                Ok(_) => Ok(left),
                Err(err) => Err(err),
            },
            (Some(left), None) => Ok(left),
            (None, Some(expr)) => self.assign_expression_type(expr),
            (None, None) => Err(self.type_error(
                format!(
                    "undefined type for variable definition of \"{}\"",
                    def.variable.value
                ),
                span,
            )),
        };

        match result {
            Ok(ty) => {
                self.define(&def.variable, ty);
                Ok(())
            }
            Err(err) => {
                // an explicit type still defines the variable, so later uses don't cascade
                if let Some(left) = declared {
                    self.define(&def.variable, left);
                }
                Err(err)
            }
        }
    }

    fn define(&mut self, name: &Name, ty: Type) {
        let prev = self.scopes.define(Variable {
            name: name.value.clone(),
            ty,
            defined_at: name.span,
        });
        if let Some(prev) = prev {
            log::debug!(
                "`{}: {}` at {} shadows `{}: {}` from {}",
                name.value,
                ty,
                name.span,
                prev.name,
                prev.ty,
                prev.defined_at
            );
        }
    }

    fn check_assignment(&mut self, assign: &mut VariableAssignment) -> HjResult<()> {
        let var_ty = match self.scopes.lookup(&assign.variable.value) {
            Some(var) => var.ty,
            None => {
                return Err(self.type_error(
                    format!(
                        "assigning to undefined variable \"{}\"",
                        assign.variable.value
                    ),
                    assign.variable.span,
                ))
            }
        };

        let expr_ty = self.assign_expression_type(&mut assign.expression)?;
        let result_ty = match assign.operator {
            None => expr_ty,
            Some(op) => {
                if !var_ty.is_numeric() || !expr_ty.is_numeric() {
                    return Err(self.type_error(
                        format!(
                            "invalid types \"{}\" and \"{}\" for compound assignment \"{}=\"",
                            var_ty, expr_ty, op
                        ),
                        assign.variable.span.extend_to(&assign.expression.span),
                    ));
                }
                Type::promote(var_ty, expr_ty)
            }
        };

        if result_ty != var_ty {
            return Err(self.type_error(
                format!(
                    "cannot assign expression of type \"{}\" to variable of type \"{}\"",
                    result_ty, var_ty
                ),
                assign.expression.span,
            ));
        }

        Ok(())
    }

    fn check_call(&mut self, call: &mut FunctionCall, span: Span) -> HjResult<()> {
        let builtin = match builtins::lookup(&call.function.value) {
            Some(b) => b,
            None => {
                let names = builtins::names();
                let noun = if names.len() == 1 {
                    "function is"
                } else {
                    "functions are"
                };
                return Err(self.type_error(
                    format!(
                        "undefined function \"{}\" (only the {} {} implemented yet)",
                        call.function.value,
                        names.iter().join(", "),
                        noun
                    ),
                    call.function.span,
                ));
            }
        };

        if call.args.len() != builtin.arity {
            return Err(self.type_error(
                format!(
                    "invalid number of arguments for {} function (you have to supply exactly {})",
                    builtin.name, builtin.arity
                ),
                span,
            ));
        }

        // every argument type is accepted, they only need to check
        for arg in call.args.iter_mut() {
            self.assign_expression_type(arg)?;
        }
        Ok(())
    }

    fn check_condition(&mut self, cond: &mut TypedExpr, what: &str) -> HjResult<()> {
        let ty = self.assign_expression_type(cond)?;
        if ty != Type::Bool {
            return Err(self.type_error(
                format!(
                    "condition of {} must be of type \"bool\", but found \"{}\"",
                    what, ty
                ),
                cond.span,
            ));
        }
        Ok(())
    }

    /// Determines the type of `expr` and its children and stores it in their
    /// `ty` fields.
    fn assign_expression_type(&self, expr: &mut TypedExpr) -> HjResult<Type> {
        let ty = match &mut expr.expr {
            Expr::Variable(name) => match self.scopes.lookup(&name.value) {
                Some(var) => var.ty,
                None => {
                    return Err(self.type_error(
                        format!("usage of undefined variable \"{}\" in expression", name.value),
                        name.span,
                    ))
                }
            },
            Expr::UnaryOperation(node) => {
                let inner = self.assign_expression_type(&mut node.expr)?;
                if !inner.is_numeric() {
                    return Err(self.type_error(
                        format!(
                            "invalid type \"{}\" for unary operation (must be either int or float)",
                            inner
                        ),
                        expr.span,
                    ));
                }
                inner
            }
            Expr::BinaryOperation(node) => {
                let lhs = self.assign_expression_type(&mut node.lhs)?;
                let rhs = self.assign_expression_type(&mut node.rhs)?;
                if !lhs.is_numeric() || !rhs.is_numeric() {
                    return Err(self.type_error(
                        format!(
                            "invalid types \"{}\" and \"{}\" for binary operation \"{}\"",
                            lhs, rhs, node.op
                        ),
                        expr.span,
                    ));
                }
                Type::promote(lhs, rhs)
            }
            Expr::FunctionCall(call) => {
                return Err(self.type_error(
                    format!(
                        "function calls in expressions aren't supported yet (tried to call \"{}()\" in expression)",
                        call.function.value
                    ),
                    expr.span,
                ))
            }
            Expr::IntLiteral(_) => Type::Int,
            Expr::FloatLiteral(_) => Type::Float,
            Expr::BoolLiteral(_) => Type::Bool,
            Expr::CharLiteral(_) => Type::Char,
            Expr::StringLiteral(_) => Type::Str,
        };

        expr.ty = Some(ty);
        Ok(ty)
    }
}
