//! Stack growth for deep recursive evaluation.
//!
//! Node evaluation recurses once per tree edge and once per user function
//! call. Neither is bounded, so on native targets the stack is grown on
//! demand instead of overflowing. This is not a depth limit: a program that
//! recurses forever still runs forever.
//!
//! On `wasm32` the closure is called directly.

/// Remaining stack below which we grow (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const GROWTH: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// pub fn eval(&mut self, id: NodeId) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
