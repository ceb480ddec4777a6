//! RAII frame management for the interpreter.
//!
//! [`ScopedInterpreter`] pushes a frame when created and pops it when
//! dropped, so every exit path out of a block or call, including `?` on an
//! error, leaves the scope stack as it found it.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so
//! evaluation goes through it exactly as through the interpreter.
//!
//! ```text
//! {
//!     let mut scoped = interpreter.scoped();
//!     scoped.eval(inner)?;
//!     scoped.env.return_value()
//! } // frame popped here, on success or error
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard that pops the frame it pushed when dropped.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        if let Err(err) = self.interpreter.env.pop_scope() {
            // Only reachable if something popped our frame behind our back.
            tracing::error!(%err, "scope guard found no frame to pop");
        }
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a frame and return a guard that pops it on drop.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a fresh frame.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
