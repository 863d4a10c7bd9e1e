// src/interpreter.rs

//! The check-then-evaluate pipeline.

use crate::ast::Expr;
use crate::environment::Environment;
use crate::error::Result;
use crate::value::Value;

/// Options for a top-level run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Reject ill-typed programs before evaluating anything.
    pub check_types: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { check_types: true }
    }
}

impl Config {
    pub fn with_type_check(mut self, check_types: bool) -> Self {
        self.check_types = check_types;
        self
    }
}

/// Runs `expr` against `env`, type checking first when `config` asks for it.
#[tracing::instrument(level = "debug", skip_all, fields(check_types = config.check_types))]
pub fn run(expr: &Expr, env: &Environment, config: &Config) -> Result<Value> {
    if config.check_types {
        let ty = expr.check(&env.type_env()).map_err(|err| {
            tracing::debug!(%err, "program rejected by type checker");
            err
        })?;
        tracing::debug!(%ty, "type check passed");
    }

    let value = expr.eval(env).map_err(|err| {
        tracing::debug!(%err, "evaluation failed");
        err
    })?;
    tracing::debug!(%value, "evaluation finished");
    Ok(value)
}

/// Runs a closed program under a fresh empty root with the default config.
pub fn run_closed(expr: &Expr) -> Result<Value> {
    run(expr, &Environment::new(), &Config::default())
}
