//! In-memory reference index for tests.
//!
//! The real index is an external collaborator; this one exists to give the
//! rendered [`Query`] and the [`RecordFilter`] seam executable end-to-end
//! semantics. Evaluation follows standard boolean occurrence rules: every
//! `Must`/`Filter` clause matches, no `MustNot` clause matches, and when a
//! level has only `Should` clauses at least one of them matches.

use crate::{
    criteria::{Occurrence, SearchExpression},
    index::{ArtifactIndex, ArtifactRecord, Query, RecordFilter},
};

#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryIndex {
    records: Vec<ArtifactRecord>,
}

impl MemoryIndex {
    pub(crate) fn new(records: impl IntoIterator<Item = ArtifactRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl ArtifactIndex for MemoryIndex {
    fn search(&self, query: &Query, filter: Option<&dyn RecordFilter>) -> Vec<ArtifactRecord> {
        self.records
            .iter()
            .filter(|record| matches(query, record))
            .filter(|record| filter.is_none_or(|filter| filter.accepts(record)))
            .cloned()
            .collect()
    }
}

fn matches(query: &Query, record: &ArtifactRecord) -> bool {
    match query {
        Query::Term { field, expression } => match record.field(field) {
            Some(actual) => matches_expression(expression, actual),
            None => false,
        },

        Query::Boolean { clauses } => {
            let mut has_required = false;
            let mut has_should = false;
            let mut should_matched = false;

            for clause in clauses {
                let matched = matches(&clause.query, record);

                match clause.occurrence {
                    Occurrence::Must | Occurrence::Filter => {
                        has_required = true;
                        if !matched {
                            return false;
                        }
                    }
                    Occurrence::MustNot => {
                        if matched {
                            return false;
                        }
                    }
                    Occurrence::Should => {
                        has_should = true;
                        should_matched |= matched;
                    }
                }
            }

            // Should clauses only become load-bearing when nothing else is.
            !has_should || has_required || should_matched
        }
    }
}

fn matches_expression(expression: &SearchExpression, actual: &str) -> bool {
    match expression {
        // The `*` literal matches any present value, which is how callers
        // express "field present at all" (and, under MustNot, its absence).
        SearchExpression::Literal(value) => value == "*" || actual == value,
        SearchExpression::UserInput(value) => {
            actual.to_lowercase().starts_with(&value.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        criteria::{Criterion, MatchOptions, Occurrence},
        fields::artifact,
        index::{GroupArtifactGrouping, IndexQueryBuilder},
        version::VersionRangeFilter,
    };

    fn guava(version: &str) -> ArtifactRecord {
        ArtifactRecord::new("com.google.guava", "guava", version)
            .with_packaging("bundle")
            .with_sha1("89507701249388a85d5b00c9b6ba8e18ea45dd25")
    }

    fn repository() -> MemoryIndex {
        MemoryIndex::new([
            guava("14.0.1"),
            guava("19.0"),
            guava("20.0"),
            guava("27.0.1"),
            guava("20.0").with_classifier("sources"),
            ArtifactRecord::new("com.google.guava", "failureaccess", "1.0.1")
                .with_packaging("jar"),
            ArtifactRecord::new("commons-io", "commons-io", "2.6").with_packaging("jar"),
        ])
    }

    fn guava_query() -> Query {
        Criterion::compound([
            Criterion::leaf(artifact::GROUP, "com.google.guava"),
            Criterion::leaf(artifact::NAME, "guava"),
        ])
        .unwrap()
        .render(&IndexQueryBuilder)
    }

    fn versions(records: &[ArtifactRecord]) -> Vec<&str> {
        records.iter().map(ArtifactRecord::version).collect()
    }

    #[test]
    fn unclassified_bundle_search() {
        let query = Criterion::compound([
            Criterion::leaf(artifact::GROUP, "com.google.guava"),
            Criterion::leaf(artifact::NAME, "guava"),
            Criterion::leaf(artifact::PACKAGING, "bundle"),
            Criterion::leaf_with(
                artifact::CLASSIFIER,
                "*",
                MatchOptions::new().with_occurrence(Occurrence::MustNot),
            ),
        ])
        .unwrap()
        .render(&IndexQueryBuilder);

        let hits = repository().search(&query, None);

        // The classified sources artifact is excluded by the MustNot `*`.
        assert_eq!(versions(&hits), ["14.0.1", "19.0", "20.0", "27.0.1"]);
    }

    #[test]
    fn version_window_at_minimum() {
        let filter = VersionRangeFilter::at_minimum("20.0").unwrap();
        let hits = repository().search(&guava_query(), Some(&filter));

        assert_eq!(versions(&hits), ["20.0", "27.0.1", "20.0"]);
    }

    #[test]
    fn version_window_half_open() {
        let filter = VersionRangeFilter::at_minimum("14.0")
            .unwrap()
            .but_strictly_less_than("20.0")
            .unwrap();
        let hits = repository().search(&guava_query(), Some(&filter));

        assert_eq!(versions(&hits), ["14.0.1", "19.0"]);
    }

    #[test]
    fn version_window_strict_bottom() {
        let filter = VersionRangeFilter::at_maximum("20.0")
            .unwrap()
            .but_strictly_greater_than("14.0.1")
            .unwrap();
        let hits = repository().search(&guava_query(), Some(&filter));

        assert_eq!(versions(&hits), ["19.0", "20.0", "20.0"]);
    }

    #[test]
    fn partial_checksum_search() {
        let query = Criterion::leaf_with(
            artifact::SHA1,
            "89507701249388",
            MatchOptions::new().partial_input(),
        )
        .render(&IndexQueryBuilder);

        let hits = repository().search(&query, None);

        assert_eq!(hits.len(), 5);
        assert!(hits.iter().all(|record| record.name() == "guava"));
    }

    #[test]
    fn should_clauses_require_one_match_when_nothing_is_required() {
        let query = Criterion::compound([
            Criterion::leaf_with(
                artifact::NAME,
                "guava",
                MatchOptions::new().with_occurrence(Occurrence::Should),
            ),
            Criterion::leaf_with(
                artifact::NAME,
                "commons-io",
                MatchOptions::new().with_occurrence(Occurrence::Should),
            ),
        ])
        .unwrap()
        .render(&IndexQueryBuilder);

        let hits = repository().search(&query, None);

        assert_eq!(hits.len(), 6);
        assert!(hits.iter().all(|record| record.name() != "failureaccess"));
    }

    #[test]
    fn missing_fields_never_match() {
        let query = Criterion::leaf(artifact::CLASSIFIER, "sources").render(&IndexQueryBuilder);
        let hits = repository().search(&query, None);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].version(), "20.0");
    }

    #[test]
    fn grouped_search_buckets_by_coordinate() {
        let query = Criterion::leaf(artifact::GROUP, "com.google.guava").render(&IndexQueryBuilder);
        let groups = repository().search_grouped(&query, None, &GroupArtifactGrouping);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["com.google.guava:guava"].len(), 5);
        assert_eq!(groups["com.google.guava:failureaccess"].len(), 1);
    }

    #[test]
    fn query_serde_round_trip() {
        let query = guava_query();
        let json = serde_json::to_string(&query).unwrap();
        let back: Query = serde_json::from_str(&json).unwrap();

        assert_eq!(back, query);
    }
}
