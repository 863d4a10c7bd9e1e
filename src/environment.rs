// src/environment.rs

//! Persistent lexical scopes.
//!
//! A `Scope` is a chain of frames linked from innermost to outermost. Extending
//! a scope allocates one new frame pointing at the existing chain, so the
//! original scope stays valid and unchanged. Parents are shared through `Arc`,
//! which lets many child scopes (and many threads) hang off one root.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::iter;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value::{Type, Value};

/// Runtime scope: variable names to values.
pub type Environment = Scope<Value>;

/// Checker scope: variable names to type tags.
pub type TypeEnv = Scope<Type>;

#[derive(Debug)]
struct Frame<T> {
    bindings: HashMap<String, T>,
    parent: Option<Arc<Frame<T>>>,
}

// Unlink the parent chain iteratively so a long chain does not recurse on drop.
// Stops at the first frame someone else still shares.
impl<T> Drop for Frame<T> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            next = match Arc::try_unwrap(parent) {
                Ok(mut frame) => frame.parent.take(),
                Err(_) => None,
            };
        }
    }
}

#[derive(Debug)]
pub struct Scope<T> {
    frame: Option<Arc<Frame<T>>>,
}

impl<T> Scope<T> {
    /// The empty root scope.
    pub fn new() -> Self {
        Scope { frame: None }
    }

    /// Returns a child scope binding `name` to `value`, shadowing any outer
    /// binding of the same name. `self` is left untouched.
    pub fn extend(&self, name: impl Into<String>, value: T) -> Self {
        let mut bindings = HashMap::with_capacity(1);
        bindings.insert(name.into(), value);
        Scope {
            frame: Some(Arc::new(Frame {
                bindings,
                parent: self.frame.clone(),
            })),
        }
    }

    /// Searches local bindings first, then each parent in turn.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.frames().find_map(|frame| frame.bindings.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of frames in the chain; the empty root has depth 0.
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    /// Every name reachable from this scope with the binding that wins after
    /// shadowing, ordered by name.
    pub fn visible(&self) -> BTreeMap<&str, &T> {
        let mut seen = BTreeMap::new();
        for frame in self.frames() {
            for (name, value) in &frame.bindings {
                seen.entry(name.as_str()).or_insert(value);
            }
        }
        seen
    }

    fn frames(&self) -> impl Iterator<Item = &Frame<T>> {
        iter::successors(self.frame.as_deref(), |frame| frame.parent.as_deref())
    }
}

impl<T: Copy> Scope<T> {
    pub fn lookup(&self, name: &str) -> Result<T> {
        self.get(name)
            .copied()
            .ok_or_else(|| Error::UnboundVariable(name.to_string()))
    }
}

impl Environment {
    /// Tags every visible binding with its value's type, producing a flat
    /// root scope the checker can run against.
    pub fn type_env(&self) -> TypeEnv {
        self.visible()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.type_of()))
            .collect()
    }
}

// Manual impls so `T` needs no bounds; cloning only bumps a refcount.
impl<T> Clone for Scope<T> {
    fn clone(&self) -> Self {
        Scope { frame: self.frame.clone() }
    }
}

impl<T> Default for Scope<T> {
    fn default() -> Self {
        Scope::new()
    }
}

/// Builds a single root frame holding all the given bindings. Later duplicates
/// overwrite earlier ones.
impl<T> FromIterator<(String, T)> for Scope<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let bindings: HashMap<String, T> = iter.into_iter().collect();
        if bindings.is_empty() {
            return Scope::new();
        }
        Scope {
            frame: Some(Arc::new(Frame { bindings, parent: None })),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Scope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.visible().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
