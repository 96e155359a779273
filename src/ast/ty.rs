use std::fmt;

/// Type names the lexer accepts as inbuilt types.
pub const INBUILT_TYPES: [&str; 7] = ["int", "uint", "float", "ufloat", "bool", "char", "str"];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Type {
    Int,
    Float,
    Bool,
    Char,
    Str,
}

impl Type {
    /// Resolves a type name. Reserved names without a type yet (`uint`,
    /// `ufloat`) resolve to `None`.
    pub fn from_name(name: &str) -> Option<Type> {
        Some(match name {
            "int" => Type::Int,
            "float" => Type::Float,
            "bool" => Type::Bool,
            "char" => Type::Char,
            "str" => Type::Str,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::Bool => "bool",
            Type::Char => "char",
            Type::Str => "str",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Result type of a binary arithmetic operation on two numeric operands.
    pub fn promote(lhs: Type, rhs: Type) -> Type {
        if lhs == Type::Float || rhs == Type::Float {
            Type::Float
        } else {
            Type::Int
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
