//! # List Editor
//!
//! A singly linked list of integers with one interesting edit: deleting the
//! node just before the tail in a single forward pass.
//!
//! ## Key Concepts
//! - **List**: owning chain of nodes; see [`list::List`].
//! - **ListEditor**: applies the deletion under a [`editor::SingleNodePolicy`].
//! - **EditReport**: before/after snapshot used by the `list_editor` binary.
//!
//! ```rust
//! use list_editor::{build_from_sequence, delete_second_last, render};
//!
//! let list = delete_second_last(build_from_sequence(&[1, 2, 3, 4, 5]));
//! assert_eq!(render(&list), "[1, 2, 3, 5]");
//! ```

pub mod editor;
pub mod error;
pub mod input;
pub mod list;
pub mod report;

pub use editor::{ListEditor, SingleNodePolicy, build_from_sequence, delete_second_last, length, render};
pub use error::EditorError;
pub use list::List;
pub use report::{EditReport, run_edit};
