use crate::{
    criteria::{Criterion, Occurrence},
    fields::Field,
};
use serde::{Deserialize, Serialize};

///
/// SearchExpression
///
/// How a leaf value should be matched against a field's indexed tokens.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SearchExpression {
    /// Pre-sourced, normalized token matched literally.
    Literal(String),

    /// Raw user input, subject to prefix/partial interpretation.
    UserInput(String),
}

impl SearchExpression {
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Literal(value) | Self::UserInput(value) => value,
        }
    }
}

///
/// QueryBuilder
///
/// Engine-facing construction seam. Rendering needs exactly two
/// capabilities from the underlying search engine: build a term query
/// from a field and a match expression, and combine already-built queries
/// into a boolean query with a per-clause occurrence role. Keeping the
/// seam this narrow makes the criteria model portable across engines.
///

pub trait QueryBuilder {
    type Query;

    /// Single field-match term.
    fn term(&self, field: Field, expression: SearchExpression) -> Self::Query;

    /// Boolean combination; clause order is preserved.
    fn boolean(&self, clauses: Vec<(Self::Query, Occurrence)>) -> Self::Query;
}

impl Criterion {
    /// Render the tree to the builder's concrete query representation.
    ///
    /// A single-child compound renders to its child's query directly; no
    /// redundant boolean wrapper is introduced.
    pub fn render<B: QueryBuilder>(&self, builder: &B) -> B::Query {
        match self {
            Self::Leaf(leaf) => {
                let expression = if leaf.options.is_exact() {
                    SearchExpression::Literal(leaf.value.clone())
                } else {
                    SearchExpression::UserInput(leaf.value.clone())
                };

                builder.term(leaf.field, expression)
            }

            Self::Compound(compound) => match compound.children() {
                [only] => only.render(builder),
                children => {
                    let clauses = children
                        .iter()
                        .map(|child| (child.render(builder), child.occurrence()))
                        .collect();

                    builder.boolean(clauses)
                }
            },
        }
    }
}
