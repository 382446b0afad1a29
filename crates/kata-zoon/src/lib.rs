//! Zoon elements for interactive code exercises.
//!
//! [`CodeBlock`] is the exercise block itself. It loads an
//! [`ExecutableCell`] lazily, shows the exercise source (or the solution once
//! revealed) in it, and wires the Run / Submit actions and the hint panel.

pub use kata;
pub use zoon;

mod button;
mod cell;
mod code_block;
mod hint;

pub use button::{ButtonVariant, action_button};
pub use cell::{
    CellActions, CellClassNames, CellContext, CellFuture, CellProps, CellProvider, ExecutableCell, RunHandler,
    TextAreaCell, Transform,
};
pub use code_block::CodeBlock;
pub use hint::{ContentFactory, Hint, HintAction};
