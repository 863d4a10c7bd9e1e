// src/evaluator.rs

use paste::paste;

use crate::ast::{ArithOp, Expr};
use crate::environment::Environment;
use crate::error::{Error, Expected, Found, Result};
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

/// Evaluates `expr` under `env`. Does not assume the program was type checked.
pub fn eval(expr: &Expr, env: &Environment) -> Result<Value> {
    expr.eval(env)
}

// --- Arithmetic ---
// Ints wrap on overflow and divide toward zero; floats follow IEEE-754, so
// float division by zero yields inf or NaN rather than an error.
macro_rules! arith_ops {
    ($($variant:ident => $method:ident, $float_op:tt);* $(;)?) => {
        paste! {
            fn apply_int(op: ArithOp, a: i64, b: i64) -> i64 {
                match op {
                    $(ArithOp::$variant => a.[<wrapping_ $method>](b),)*
                }
            }
        }

        fn apply_float(op: ArithOp, a: f64, b: f64) -> f64 {
            match op {
                $(ArithOp::$variant => a $float_op b,)*
            }
        }
    };
}

arith_ops! {
    Add => add, +;
    Sub => sub, -;
    Mul => mul, *;
    Div => div, /;
}

fn eval_arith(op: ArithOp, lhs: &Expr, rhs: &Expr, env: &Environment) -> Result<Value> {
    // Both operands are always evaluated, left first.
    let lhs_val = lhs.eval(env)?;
    let rhs_val = rhs.eval(env)?;

    match (lhs_val, rhs_val) {
        (Value::Int(_), Value::Int(0)) if op == ArithOp::Div => Err(Error::DivisionByZero),
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(apply_int(op, a, b))),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(apply_float(op, a, b))),
        (a, b) => Err(Error::mismatch(
            op.symbol(),
            Expected::Numeric,
            Found::Pair(a.type_of(), b.type_of()),
        )),
    }
}

// --- The Evaluator ---
impl Expr {
    pub fn eval(&self, env: &Environment) -> Result<Value> {
        ensure_sufficient_stack(|| match self {
            Expr::Int(n) => Ok(Value::Int(*n)),
            Expr::Float(n) => Ok(Value::Float(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),

            Expr::Var(name) => env.lookup(name),

            Expr::Neg(e) => match e.eval(env)? {
                Value::Int(n) => Ok(Value::Int(n.wrapping_neg())),
                Value::Float(n) => Ok(Value::Float(-n)),
                other => Err(Error::mismatch(
                    "negation",
                    Expected::Numeric,
                    Found::One(other.type_of()),
                )),
            },

            Expr::Add(lhs, rhs) => eval_arith(ArithOp::Add, lhs, rhs, env),
            Expr::Sub(lhs, rhs) => eval_arith(ArithOp::Sub, lhs, rhs, env),
            Expr::Mult(lhs, rhs) => eval_arith(ArithOp::Mul, lhs, rhs, env),
            Expr::Div(lhs, rhs) => eval_arith(ArithOp::Div, lhs, rhs, env),

            Expr::Let(name, bound, body) => {
                let value = bound.eval(env)?;
                tracing::trace!(%name, %value, "let binding");
                // The child scope lives only as long as the body's evaluation.
                body.eval(&env.extend(name.as_str(), value))
            }

            Expr::If(cond, then, else_) => match cond.eval(env)? {
                Value::Bool(true) => then.eval(env),
                Value::Bool(false) => else_.eval(env),
                other => Err(Error::mismatch(
                    "if condition",
                    Expected::Bool,
                    Found::One(other.type_of()),
                )),
            },
        })
    }
}
