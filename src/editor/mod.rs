//! Document buffer the grading commands read from and write into.
//!
//! Provides a rope-backed text buffer, the [`TextBuffer`] line interface
//! the grade writer targets, and a scoped [`Edit`] that groups insertions.

mod buffer;
mod edit;

pub use buffer::{Cursor, EditorBuffer, TextBuffer};
pub use edit::{Edit, Insertion};
