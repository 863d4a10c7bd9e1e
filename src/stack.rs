// src/stack.rs

//! Stack growth for the recursive tree walks.
//!
//! Checking, evaluating and rendering all recurse once per tree level, so a
//! deeply nested program could exhaust the native stack. On native targets
//! `stacker` grows the stack on demand; on WASM the closure runs directly.

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    // Grow when less than 100KB remains, by 1MB at a time.
    const RED_ZONE: usize = 100 * 1024;
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
