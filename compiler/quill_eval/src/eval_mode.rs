//! Evaluation modes.
//!
//! The mode decides how a variable reference resolves. `Interpret` is the
//! normal behaviour; `FrameLocal` reproduces the older resolution rule where
//! a frame can only see the names it declared itself.

/// How variable references resolve against the scope stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Search every frame from the innermost out; declare unknown names as 0
    /// in the innermost frame.
    #[default]
    Interpret,
    /// Only the innermost frame is visible. Unknown names are declared there
    /// as 0; a name bound only in an enclosing frame is an error.
    FrameLocal,
}

impl EvalMode {
    /// Whether references can resolve to bindings in enclosing frames.
    #[inline]
    pub fn sees_enclosing_frames(self) -> bool {
        matches!(self, Self::Interpret)
    }
}
