//! Criteria model: declarative field-match conditions combined into
//! boolean queries with per-child occurrence and exactness semantics.
//!
//! Trees are built with [`Criterion::leaf`], [`Criterion::leaf_with`] and
//! [`Criterion::compound`], rendered through the [`QueryBuilder`] seam,
//! and described deterministically via `Display`.

mod ast;
mod options;
mod render;

#[cfg(test)]
mod tests;

pub use ast::{CompoundCriterion, CriteriaError, Criterion, LeafCriterion};
pub use options::{MatchOptions, Occurrence};
pub use render::{QueryBuilder, SearchExpression};
