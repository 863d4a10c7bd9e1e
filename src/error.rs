// src/error.rs

use std::fmt;

use thiserror::Error;

use crate::value::Type;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Unbound variable: '{0}'")]
    UnboundVariable(String),
    #[error("Type error in {context}: expected {expected}, found {found}")]
    TypeMismatch {
        context: &'static str,
        expected: Expected,
        found: Found,
    },
    #[error("Arithmetic error: integer division by zero")]
    DivisionByZero,
}

impl Error {
    pub(crate) fn mismatch(context: &'static str, expected: Expected, found: Found) -> Self {
        Error::TypeMismatch { context, expected, found }
    }
}

/// What an operator required of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Numeric,
    Bool,
    SameType,
}

/// The operand tags actually seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    One(Type),
    Pair(Type, Type),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Numeric => write!(f, "matching int or float operands"),
            Expected::Bool => write!(f, "bool"),
            Expected::SameType => write!(f, "branches of the same type"),
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::One(ty) => write!(f, "{}", ty),
            Found::Pair(lhs, rhs) => write!(f, "{} and {}", lhs, rhs),
        }
    }
}
