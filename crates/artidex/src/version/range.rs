use crate::{
    index::{ArtifactRecord, RecordFilter},
    version::{GenericVersion, VersionError},
};
use serde::Serialize;

///
/// UnparsedPolicy
/// Handling of candidate versions that fail to parse during filtering.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum UnparsedPolicy {
    /// Unparseable candidates pass the filter (fail-open). Matches the
    /// historical behavior of version-range filtering over artifact
    /// indexes, where nonstandard version strings are common and silently
    /// dropping them is worse than letting them through.
    #[default]
    Include,

    /// Unparseable candidates are filtered out (fail-closed).
    Exclude,
}

///
/// VersionRangeFilter
///
/// Acceptance predicate over an open/closed interval of versions. Bounds
/// are parsed eagerly at construction; an unset bound leaves that side
/// unbounded. The filter is immutable: every bound-tightening operation
/// returns a new value, so a base filter can seed several variants.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct VersionRangeFilter {
    min: Option<GenericVersion>,
    max: Option<GenericVersion>,
    exclusive_min: bool,
    exclusive_max: bool,
    unparsed: UnparsedPolicy,
}

impl VersionRangeFilter {
    /// Unbounded-above filter with an inclusive lower bound.
    pub fn at_minimum(version: &str) -> Result<Self, VersionError> {
        Ok(Self {
            min: Some(parse_bound(version)?),
            max: None,
            exclusive_min: false,
            exclusive_max: false,
            unparsed: UnparsedPolicy::Include,
        })
    }

    /// Unbounded-below filter with an inclusive upper bound.
    pub fn at_maximum(version: &str) -> Result<Self, VersionError> {
        Ok(Self {
            min: None,
            max: Some(parse_bound(version)?),
            exclusive_min: false,
            exclusive_max: false,
            unparsed: UnparsedPolicy::Include,
        })
    }

    /// Same lower bound, exclusive upper bound at `version`.
    pub fn but_strictly_less_than(&self, version: &str) -> Result<Self, VersionError> {
        Ok(Self {
            max: Some(parse_bound(version)?),
            exclusive_max: true,
            ..self.clone()
        })
    }

    /// Same upper bound, exclusive lower bound at `version`.
    pub fn but_strictly_greater_than(&self, version: &str) -> Result<Self, VersionError> {
        Ok(Self {
            min: Some(parse_bound(version)?),
            exclusive_min: true,
            ..self.clone()
        })
    }

    /// Choose how candidates with unparseable versions are handled.
    #[must_use]
    pub fn with_unparsed_policy(self, unparsed: UnparsedPolicy) -> Self {
        Self { unparsed, ..self }
    }

    #[must_use]
    pub const fn unparsed_policy(&self) -> UnparsedPolicy {
        self.unparsed
    }

    /// Range membership for a candidate version string.
    ///
    /// A candidate that fails to parse is resolved by the configured
    /// [`UnparsedPolicy`] instead of by the bounds.
    #[must_use]
    pub fn accepts_version(&self, candidate: &str) -> bool {
        let Ok(candidate) = candidate.parse::<GenericVersion>() else {
            return match self.unparsed {
                UnparsedPolicy::Include => true,
                UnparsedPolicy::Exclude => false,
            };
        };

        let matches_min = self.min.as_ref().is_none_or(|min| {
            if self.exclusive_min {
                candidate > *min
            } else {
                candidate >= *min
            }
        });

        let matches_max = self.max.as_ref().is_none_or(|max| {
            if self.exclusive_max {
                candidate < *max
            } else {
                candidate <= *max
            }
        });

        matches_min && matches_max
    }
}

impl RecordFilter for VersionRangeFilter {
    fn accepts(&self, record: &ArtifactRecord) -> bool {
        self.accepts_version(record.version())
    }
}

// Bound strings are rejected when empty before parsing is attempted.
fn parse_bound(version: &str) -> Result<GenericVersion, VersionError> {
    if version.is_empty() {
        return Err(VersionError::Empty);
    }

    version.parse()
}
