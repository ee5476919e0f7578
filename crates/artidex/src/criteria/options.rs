use serde::{Deserialize, Serialize};

///
/// Occurrence
///
/// Boolean role a criterion plays among its siblings inside a compound.
/// Occurrence belongs to each child relative to its parent, not to the
/// compound as a whole, which is what allows mixed AND/OR/NOT semantics
/// within a single compound level.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Occurrence {
    /// Candidate records must satisfy the condition.
    #[default]
    Must,

    /// Optional condition; required only when no sibling is `Must`/`Filter`.
    Should,

    /// Candidate records must not satisfy the condition.
    MustNot,

    /// Required like `Must`, but contributes nothing to relevance scoring.
    Filter,
}

///
/// MatchOptions
///
/// Per-leaf match configuration: the occurrence role and whether the value
/// is an exact, pre-sourced token or raw user input matched as a prefix.
/// Immutable; the `with_*` setters consume and return a new value, so a
/// base configuration can safely seed several variants.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatchOptions {
    occurrence: Occurrence,
    exact: bool,
}

impl MatchOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            occurrence: Occurrence::Must,
            exact: true,
        }
    }

    /// Set the boolean role this condition plays among its siblings.
    #[must_use]
    pub const fn with_occurrence(self, occurrence: Occurrence) -> Self {
        Self { occurrence, ..self }
    }

    /// Treat the value as raw user input, matched as a prefix instead of
    /// as a normalized literal token.
    #[must_use]
    pub const fn partial_input(self) -> Self {
        Self {
            exact: false,
            ..self
        }
    }

    #[must_use]
    pub const fn occurrence(self) -> Occurrence {
        self.occurrence
    }

    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.exact
    }

    /// Human-readable operator for this occurrence × exactness combination.
    #[must_use]
    pub(crate) const fn operator(self) -> &'static str {
        match (self.exact, self.occurrence) {
            (true, Occurrence::Must | Occurrence::Filter) => "MUST MATCH",
            (true, Occurrence::Should) => "SHOULD MATCH",
            (true, Occurrence::MustNot) => "MUST NOT MATCH",
            (false, Occurrence::Must | Occurrence::Filter) => "MUST START WITH",
            (false, Occurrence::Should) => "SHOULD START WITH",
            (false, Occurrence::MustNot) => "MUST NOT START WITH",
        }
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_must_and_exact() {
        let options = MatchOptions::default();

        assert_eq!(options.occurrence(), Occurrence::Must);
        assert!(options.is_exact());
    }

    #[test]
    fn setters_return_new_values() {
        let base = MatchOptions::new();
        let should = base.with_occurrence(Occurrence::Should);
        let partial = base.partial_input();

        // The base is unchanged and both variants derived from it.
        assert_eq!(base, MatchOptions::new());
        assert_eq!(should.occurrence(), Occurrence::Should);
        assert!(should.is_exact());
        assert_eq!(partial.occurrence(), Occurrence::Must);
        assert!(!partial.is_exact());
    }

    #[test]
    fn operator_table_covers_all_roles() {
        let cases = [
            (Occurrence::Must, true, "MUST MATCH"),
            (Occurrence::Filter, true, "MUST MATCH"),
            (Occurrence::Should, true, "SHOULD MATCH"),
            (Occurrence::MustNot, true, "MUST NOT MATCH"),
            (Occurrence::Must, false, "MUST START WITH"),
            (Occurrence::Filter, false, "MUST START WITH"),
            (Occurrence::Should, false, "SHOULD START WITH"),
            (Occurrence::MustNot, false, "MUST NOT START WITH"),
        ];

        for (occurrence, exact, expected) in cases {
            let mut options = MatchOptions::new().with_occurrence(occurrence);
            if !exact {
                options = options.partial_input();
            }

            assert_eq!(options.operator(), expected);
        }
    }
}
