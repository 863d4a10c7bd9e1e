// src/lib.rs

// A small expression language: int, float and bool arithmetic with
// let-bindings and conditionals. Trees come from an external parser; this
// crate checks, evaluates and prints them.

// --- Module Declarations ---
pub mod ast;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod interpreter;
pub mod printer;
pub mod stack;
pub mod typechecker;
pub mod value;

// --- Public API Re-exports ---
pub use ast::{ArithOp, Expr};
pub use environment::{Environment, Scope, TypeEnv};
pub use error::{Error, Expected, Found, Result};
pub use evaluator::eval;
pub use interpreter::{run, run_closed, Config};
pub use printer::{render, render_value};
pub use typechecker::check;
pub use value::{Type, Value};
