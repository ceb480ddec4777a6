//! Tree-walking interpreter.
//!
//! Evaluation is a depth-first, left-to-right walk. Every node produces a
//! [`Value`]; side effects land in the [`Environment`] and the print handler
//! in visit order.
//!
//! `Return` does not unwind. It writes the innermost frame's result slot and
//! evaluation carries on, so later statements of the same sequence still run
//! and the last `Return` executed in a block decides what the block yields.
//!
//! - `node_eval` - per-node dispatch
//! - `function_call` - argument binding and call frames
//! - `scope_guard` - RAII frame push/pop

mod builder;
mod function_call;
mod node_eval;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use quill_ir::{Name, NodeArena, NodeId, StringInterner};
use quill_stack::ensure_sufficient_stack;

use crate::errors::{out_of_scope, EvalResult};
use crate::eval_mode::EvalMode;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalError, Value};

/// Evaluates nodes of one arena against one environment.
pub struct Interpreter<'a> {
    /// Interner used to turn names back into strings for errors.
    pub(crate) interner: &'a StringInterner,
    /// The tree being evaluated.
    pub(crate) arena: &'a NodeArena,
    /// Runtime state.
    pub env: Environment,
    pub(crate) mode: EvalMode,
    pub(crate) print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with a fresh environment, default mode and stdout output.
    pub fn new(interner: &'a StringInterner, arena: &'a NodeArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Evaluate a whole program rooted at `root`.
    #[tracing::instrument(level = "debug", skip(self), fields(mode = ?self.mode))]
    pub fn evaluate(&mut self, root: NodeId) -> EvalResult {
        let result = self.eval(root);
        if let Err(err) = &result {
            tracing::debug!(%err, "evaluation aborted");
        }
        result
    }

    /// Evaluate one node.
    ///
    /// Grows the stack before recursing so deep trees and deep user
    /// recursion don't overflow the native stack.
    #[inline]
    pub fn eval(&mut self, id: NodeId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_node(id))
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn into_env(self) -> Environment {
        self.env
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Storage slot for a variable reference, resolved per the eval mode.
    pub(crate) fn variable_slot(&mut self, name: Name) -> Result<&mut Value, EvalError> {
        if self.mode.sees_enclosing_frames() {
            return self.env.lookup_or_declare(name);
        }
        if !self.env.is_local(name) && self.env.lookup(name).is_some() {
            return Err(out_of_scope(self.interner.lookup(name)));
        }
        self.env.declare_local(name)
    }
}

/// Evaluate `root` with a fresh environment, writing `Log` output to stdout.
pub fn evaluate(arena: &NodeArena, interner: &StringInterner, root: NodeId) -> EvalResult {
    Interpreter::new(interner, arena).evaluate(root)
}

#[cfg(test)]
mod tests;
