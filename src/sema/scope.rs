use fnv::FnvHashMap;

use crate::ast::Type;
use crate::span::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub ty: Type,
    pub defined_at: Span,
}

/// Variable tables, innermost scope last. The outermost scope is never popped.
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<FnvHashMap<String, Variable>>,
}

impl ScopeStack {
    pub fn new() -> ScopeStack {
        ScopeStack {
            scopes: vec![FnvHashMap::default()],
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push(&mut self) {
        self.scopes.push(FnvHashMap::default());
    }

    pub fn pop(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Defines `var` in the innermost scope, returning the definition it
    /// replaced in that same scope.
    pub fn define(&mut self, var: Variable) -> Option<Variable> {
        let scope = self.scopes.last_mut()?;
        scope.insert(var.name.clone(), var)
    }

    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Variables of the outermost scope, sorted by name.
    pub fn outer_variables(&self) -> Vec<&Variable> {
        let mut vars = self
            .scopes
            .first()
            .map(|scope| scope.values().collect::<Vec<_>>())
            .unwrap_or_default();
        vars.sort_by(|a, b| a.name.cmp(&b.name));
        vars
    }
}

impl Default for ScopeStack {
    fn default() -> ScopeStack {
        ScopeStack::new()
    }
}
