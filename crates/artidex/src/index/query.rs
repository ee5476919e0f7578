use crate::{
    criteria::{Occurrence, QueryBuilder, SearchExpression},
    fields::Field,
    index::{ArtifactRecord, Grouping, RecordFilter},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Query
///
/// Concrete boolean query value produced by rendering a criteria tree.
/// This is the shape that crosses the engine boundary, so fields travel
/// by name and the whole value is serde-serializable.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Query {
    /// Single field-match term.
    Term {
        field: String,
        expression: SearchExpression,
    },

    /// Boolean combination; clause order matches the criteria tree.
    Boolean { clauses: Vec<BooleanClause> },
}

///
/// BooleanClause
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BooleanClause {
    pub query: Query,
    pub occurrence: Occurrence,
}

///
/// IndexQueryBuilder
///
/// The in-repo [`QueryBuilder`] targeting the artifact index's [`Query`]
/// representation.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IndexQueryBuilder;

impl QueryBuilder for IndexQueryBuilder {
    type Query = Query;

    fn term(&self, field: Field, expression: SearchExpression) -> Query {
        Query::Term {
            field: field.name().to_string(),
            expression,
        }
    }

    fn boolean(&self, clauses: Vec<(Query, Occurrence)>) -> Query {
        Query::Boolean {
            clauses: clauses
                .into_iter()
                .map(|(query, occurrence)| BooleanClause { query, occurrence })
                .collect(),
        }
    }
}

///
/// ArtifactIndex
///
/// Search seam toward the external index engine: evaluate a boolean query
/// and apply an optional per-candidate acceptance predicate. Grouped
/// search is derived from flat search plus a [`Grouping`].
///

pub trait ArtifactIndex {
    /// Matching records in index order, post-filtered by `filter`.
    fn search(&self, query: &Query, filter: Option<&dyn RecordFilter>) -> Vec<ArtifactRecord>;

    /// Flat search results bucketed under the grouping's key.
    fn search_grouped(
        &self,
        query: &Query,
        filter: Option<&dyn RecordFilter>,
        grouping: &dyn Grouping,
    ) -> BTreeMap<String, Vec<ArtifactRecord>> {
        let mut groups: BTreeMap<String, Vec<ArtifactRecord>> = BTreeMap::new();

        for record in self.search(query, filter) {
            groups.entry(grouping.key(&record)).or_default().push(record);
        }

        groups
    }
}
