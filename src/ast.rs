// src/ast.rs

use std::mem;

use crate::stack::ensure_sufficient_stack;

// AST Definition
// `Clone`, `PartialEq` and `Drop` are written by hand below so that very deep
// trees never recurse on an unguarded native stack.
#[derive(Debug)]
pub enum Expr {
    Int(i64),
    Float(f64),
    Bool(bool),
    Var(String),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mult(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Let(String, Box<Expr>, Box<Expr>),
    If(Box<Expr>, Box<Expr>, Box<Expr>),
}

/// The four binary arithmetic operators, shared by the checker, the
/// evaluator and the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

// --- Constructors ---
// Parsers and tests build trees through these instead of spelling out Box::new.
impl Expr {
    pub fn int(n: i64) -> Self {
        Expr::Int(n)
    }

    pub fn float(n: f64) -> Self {
        Expr::Float(n)
    }

    pub fn bool(b: bool) -> Self {
        Expr::Bool(b)
    }

    /// Names should be identifiers (see [`Expr::is_identifier`]); the printer
    /// emits them verbatim, so any other name does not read back as the same tree.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn neg(e: Expr) -> Self {
        Expr::Neg(Box::new(e))
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Expr::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Expr::Sub(Box::new(lhs), Box::new(rhs))
    }

    pub fn mult(lhs: Expr, rhs: Expr) -> Self {
        Expr::Mult(Box::new(lhs), Box::new(rhs))
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Expr::Div(Box::new(lhs), Box::new(rhs))
    }

    pub fn binary(op: ArithOp, lhs: Expr, rhs: Expr) -> Self {
        match op {
            ArithOp::Add => Expr::add(lhs, rhs),
            ArithOp::Sub => Expr::sub(lhs, rhs),
            ArithOp::Mul => Expr::mult(lhs, rhs),
            ArithOp::Div => Expr::div(lhs, rhs),
        }
    }

    /// The bound name follows the same rule as [`Expr::var`].
    pub fn let_in(name: impl Into<String>, bound: Expr, body: Expr) -> Self {
        Expr::Let(name.into(), Box::new(bound), Box::new(body))
    }

    pub fn if_then_else(cond: Expr, then: Expr, else_: Expr) -> Self {
        Expr::If(Box::new(cond), Box::new(then), Box::new(else_))
    }
}

// Reserved words of the concrete syntax; a variable may not be spelled as one.
static KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "let", "in", "if", "then", "else", "true", "false",
};

impl Expr {
    /// Whether `name` prints as a plain variable: an ASCII letter or `_`
    /// followed by letters, digits or `_`, and not a keyword.
    pub fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        let starts_well = chars
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '_');
        starts_well
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !KEYWORDS.contains(name)
    }

    /// Moves every direct child out, leaving `Bool(false)` placeholders behind.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        let mut take = |child: &mut Box<Expr>| {
            out.push(mem::replace(&mut **child, Expr::Bool(false)));
        };
        match self {
            Expr::Int(_) | Expr::Float(_) | Expr::Bool(_) | Expr::Var(_) => {}
            Expr::Neg(e) => take(e),
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mult(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Let(_, lhs, rhs) => {
                take(lhs);
                take(rhs);
            }
            Expr::If(cond, then, else_) => {
                take(cond);
                take(then);
                take(else_);
            }
        }
    }
}

// Tear the tree down with a work-list instead of one native frame per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.take_children(&mut pending);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Int(n) => Expr::Int(*n),
            Expr::Float(n) => Expr::Float(*n),
            Expr::Bool(b) => Expr::Bool(*b),
            Expr::Var(name) => Expr::Var(name.clone()),
            Expr::Neg(e) => Expr::Neg(e.clone()),
            Expr::Add(lhs, rhs) => Expr::Add(lhs.clone(), rhs.clone()),
            Expr::Sub(lhs, rhs) => Expr::Sub(lhs.clone(), rhs.clone()),
            Expr::Mult(lhs, rhs) => Expr::Mult(lhs.clone(), rhs.clone()),
            Expr::Div(lhs, rhs) => Expr::Div(lhs.clone(), rhs.clone()),
            Expr::Let(name, bound, body) => Expr::Let(name.clone(), bound.clone(), body.clone()),
            Expr::If(cond, then, else_) => Expr::If(cond.clone(), then.clone(), else_.clone()),
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expr::Int(a), Expr::Int(b)) => a == b,
            (Expr::Float(a), Expr::Float(b)) => a == b,
            (Expr::Bool(a), Expr::Bool(b)) => a == b,
            (Expr::Var(a), Expr::Var(b)) => a == b,
            (Expr::Neg(a), Expr::Neg(b)) => a == b,
            (Expr::Add(l1, r1), Expr::Add(l2, r2))
            | (Expr::Sub(l1, r1), Expr::Sub(l2, r2))
            | (Expr::Mult(l1, r1), Expr::Mult(l2, r2))
            | (Expr::Div(l1, r1), Expr::Div(l2, r2)) => l1 == l2 && r1 == r2,
            (Expr::Let(n1, b1, x1), Expr::Let(n2, b2, x2)) => n1 == n2 && b1 == b2 && x1 == x2,
            (Expr::If(c1, t1, e1), Expr::If(c2, t2, e2)) => c1 == c2 && t1 == t2 && e1 == e2,
            _ => false,
        })
    }
}
