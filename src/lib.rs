//! A customized ordered sequence with type-driven combination.
//!
//! [`CustomList`] combines with either another sequence (concatenation)
//! or a single scalar (append), selected by matching on the tagged
//! [`Operand`]. Removal deletes the first occurrence of a value and
//! fails loudly when the value is absent.

pub mod core;
pub mod error;
pub mod types;

pub use error::{Result, SequenceError};
pub use types::{CustomList, Operand};
