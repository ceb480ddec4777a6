//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::eval_mode::EvalMode;
use crate::{stdout_handler, Environment, SharedPrintHandler};
use quill_ir::{NodeArena, StringInterner};

/// Builder for [`Interpreter`].
///
/// Defaults: `EvalMode::Interpret`, a fresh environment with its root frame
/// pushed, and stdout output.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a NodeArena,
    env: Option<Environment>,
    mode: EvalMode,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a NodeArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
            mode: EvalMode::default(),
            print_handler: None,
        }
    }

    /// Set the variable resolution mode.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Start from an existing environment, e.g. one carried over from an
    /// earlier evaluation so its functions stay defined.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `Log` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: self.env.unwrap_or_default(),
            mode: self.mode,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
