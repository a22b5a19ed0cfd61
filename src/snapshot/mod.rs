//! Task snapshot model and board extraction.

pub mod extract;
pub mod model;

pub use extract::extract;
pub use model::{TaskKind, TaskRecord, TaskSnapshot};
