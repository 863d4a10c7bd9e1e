// src/printer.rs

//! Text rendering for expressions, values and type tags.
//!
//! Every compound form is fully parenthesized, so a conforming parser reads
//! the output back into a structurally equal tree. Two exceptions: variable
//! names are written verbatim and must satisfy [`Expr::is_identifier`], and a
//! NaN literal has no literal spelling (it is not equal to itself anyway).

use std::fmt;

use crate::ast::{ArithOp, Expr};
use crate::stack::ensure_sufficient_stack;
use crate::value::{Type, Value};

pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

pub fn render_value(value: &Value) -> String {
    value.to_string()
}

// Debug formatting keeps a fractional part or exponent (`1.0`, `1e100`), so a
// float never reads back as an int. Infinities are spelled as an overflowing
// literal and NaN as `(0.0 / 0.0)`; `inf` and `NaN` would read back as variables.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "(0.0 / 0.0)")
    } else if n.is_infinite() {
        write!(f, "{}1e999", if n < 0.0 { "-" } else { "" })
    } else {
        write!(f, "{:?}", n)
    }
}

fn write_arith(f: &mut fmt::Formatter<'_>, op: ArithOp, lhs: &Expr, rhs: &Expr) -> fmt::Result {
    write!(f, "({} {} {})", lhs, op.symbol(), rhs)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Int(n) => write!(f, "{}", n),
            Expr::Float(n) => write_float(f, *n),
            Expr::Bool(b) => write!(f, "{}", b),
            Expr::Var(name) => write!(f, "{}", name),
            // The space keeps `(- 3)` apart from the literal `-3`.
            Expr::Neg(e) => write!(f, "(- {})", e),
            Expr::Add(lhs, rhs) => write_arith(f, ArithOp::Add, lhs, rhs),
            Expr::Sub(lhs, rhs) => write_arith(f, ArithOp::Sub, lhs, rhs),
            Expr::Mult(lhs, rhs) => write_arith(f, ArithOp::Mul, lhs, rhs),
            Expr::Div(lhs, rhs) => write_arith(f, ArithOp::Div, lhs, rhs),
            Expr::Let(name, bound, body) => write!(f, "(let {} = {} in {})", name, bound, body),
            Expr::If(cond, then, else_) => {
                write!(f, "(if {} then {} else {})", cond, then, else_)
            }
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write_float(f, *n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::Bool => write!(f, "bool"),
        }
    }
}
