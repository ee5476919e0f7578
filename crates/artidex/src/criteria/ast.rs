use crate::{
    criteria::{MatchOptions, Occurrence},
    fields::Field,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Criterion AST
///
/// Pure, engine-agnostic representation of a boolean field-match query.
/// Criteria are immutable value trees built once per search and discarded
/// after the call; rendering and describing are pure functions of the tree.
///

///
/// Criterion
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Criterion {
    Leaf(LeafCriterion),
    Compound(CompoundCriterion),
}

impl Criterion {
    /// Leaf condition with default options (required, exact token match).
    pub fn leaf(field: Field, value: impl Into<String>) -> Self {
        Self::Leaf(LeafCriterion::new(field, value, MatchOptions::new()))
    }

    /// Leaf condition with caller-supplied match options.
    pub fn leaf_with(field: Field, value: impl Into<String>, options: MatchOptions) -> Self {
        Self::Leaf(LeafCriterion::new(field, value, options))
    }

    /// Combine one or more criteria into a compound.
    ///
    /// Child order is preserved and semantically meaningful; each child
    /// contributes to the combination with its own occurrence role.
    pub fn compound(
        children: impl IntoIterator<Item = Self>,
    ) -> Result<Self, CriteriaError> {
        CompoundCriterion::new(children).map(Self::Compound)
    }

    /// Occurrence role this criterion contributes to an enclosing compound.
    ///
    /// A nested compound contributes with default options, exactly like a
    /// leaf built without explicit options.
    #[must_use]
    pub const fn occurrence(&self) -> Occurrence {
        match self {
            Self::Leaf(leaf) => leaf.options.occurrence(),
            Self::Compound(_) => Occurrence::Must,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => leaf.fmt(f),
            Self::Compound(compound) => compound.fmt(f),
        }
    }
}

///
/// LeafCriterion
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeafCriterion {
    pub field: Field,
    pub value: String,
    pub options: MatchOptions,
}

impl LeafCriterion {
    fn new(field: Field, value: impl Into<String>, options: MatchOptions) -> Self {
        Self {
            field,
            value: value.into(),
            options,
        }
    }
}

impl fmt::Display for LeafCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {})",
            self.field,
            self.options.operator(),
            self.value
        )
    }
}

///
/// CompoundCriterion
///
/// Ordered, nonempty sequence of child criteria. The nonempty invariant is
/// enforced at construction, so a held value is always renderable.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompoundCriterion {
    children: Vec<Criterion>,
}

impl CompoundCriterion {
    fn new(children: impl IntoIterator<Item = Criterion>) -> Result<Self, CriteriaError> {
        let children: Vec<Criterion> = children.into_iter().collect();
        if children.is_empty() {
            return Err(CriteriaError::EmptyCompound);
        }

        Ok(Self { children })
    }

    #[must_use]
    pub fn children(&self) -> &[Criterion] {
        &self.children
    }
}

impl fmt::Display for CompoundCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, child) in self.children.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            child.fmt(f)?;
        }
        write!(f, "]")
    }
}

///
/// CriteriaError
/// Usage errors detected while building a criteria tree.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CriteriaError {
    #[error("compound criteria require at least one child")]
    EmptyCompound,
}
