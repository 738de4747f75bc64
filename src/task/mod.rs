//! CI task types.
//!
//! A [`Task`] is one BazelCI job template. Expansion clones it once per
//! matrix combination and specializes the copy; base tasks are never
//! mutated.

mod definition;
mod field;

pub use definition::{Action, Task};
pub use field::TaskField;
