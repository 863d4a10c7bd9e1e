// src/typechecker.rs

use crate::ast::{ArithOp, Expr};
use crate::environment::TypeEnv;
use crate::error::{Error, Expected, Found, Result};
use crate::stack::ensure_sufficient_stack;
use crate::value::Type;

/// Assigns a type tag to `expr` under `env`, or rejects the program.
pub fn check(expr: &Expr, env: &TypeEnv) -> Result<Type> {
    expr.check(env)
}

// --- The Type Checker ---
impl Expr {
    pub fn check(&self, env: &TypeEnv) -> Result<Type> {
        ensure_sufficient_stack(|| match self {
            Expr::Int(_) => Ok(Type::Int),
            Expr::Float(_) => Ok(Type::Float),
            Expr::Bool(_) => Ok(Type::Bool),

            Expr::Var(name) => env.lookup(name),

            Expr::Neg(e) => {
                let ty = e.check(env)?;
                if ty.is_numeric() {
                    Ok(ty)
                } else {
                    Err(Error::mismatch("negation", Expected::Numeric, Found::One(ty)))
                }
            }

            Expr::Add(lhs, rhs) => check_arith(ArithOp::Add, lhs, rhs, env),
            Expr::Sub(lhs, rhs) => check_arith(ArithOp::Sub, lhs, rhs, env),
            Expr::Mult(lhs, rhs) => check_arith(ArithOp::Mul, lhs, rhs, env),
            // Int division by zero cannot be ruled out here; the evaluator reports it.
            Expr::Div(lhs, rhs) => check_arith(ArithOp::Div, lhs, rhs, env),

            Expr::Let(name, bound, body) => {
                let bound_ty = bound.check(env)?;
                body.check(&env.extend(name.as_str(), bound_ty))
            }

            Expr::If(cond, then, else_) => {
                let cond_ty = cond.check(env)?;
                if cond_ty != Type::Bool {
                    return Err(Error::mismatch(
                        "if condition",
                        Expected::Bool,
                        Found::One(cond_ty),
                    ));
                }
                let then_ty = then.check(env)?;
                let else_ty = else_.check(env)?;
                if then_ty == else_ty {
                    Ok(then_ty)
                } else {
                    Err(Error::mismatch(
                        "if branches",
                        Expected::SameType,
                        Found::Pair(then_ty, else_ty),
                    ))
                }
            }
        })
    }
}

/// Both operands must carry the same numeric tag; there is no mixed-mode promotion.
fn check_arith(op: ArithOp, lhs: &Expr, rhs: &Expr, env: &TypeEnv) -> Result<Type> {
    let lhs_ty = lhs.check(env)?;
    let rhs_ty = rhs.check(env)?;
    if lhs_ty == rhs_ty && lhs_ty.is_numeric() {
        Ok(lhs_ty)
    } else {
        Err(Error::mismatch(
            op.symbol(),
            Expected::Numeric,
            Found::Pair(lhs_ty, rhs_ty),
        ))
    }
}
