//! Quill Eval - tree-walking evaluator for Quill node trees.
//!
//! An external parser builds a [`NodeArena`](quill_ir::NodeArena) and hands
//! the root to [`Interpreter::evaluate`] (or the [`evaluate`] shorthand).
//!
//! # Architecture
//!
//! - [`Environment`]: scope stack, per-frame result slots, global function table
//! - [`Interpreter`]: dispatch over the closed [`Node`](quill_ir::Node) set
//! - [`ScopedInterpreter`](interpreter::ScopedInterpreter): RAII frame push/pop
//! - [`PrintHandlerImpl`]: where `Log` output goes
//! - [`EvalMode`]: variable resolution rule
//! - [`EvalError`]: why an evaluation aborted

mod environment;
pub mod errors;
mod eval_mode;
pub mod interpreter;
mod print_handler;
pub mod value;

pub use environment::{Environment, FunctionEntry};
pub use errors::{EvalError, EvalResult};
pub use eval_mode::EvalMode;
pub use interpreter::{evaluate, Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;
