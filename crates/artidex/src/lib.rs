//! Query and filter model for artifact index searches: criteria trees that
//! render to boolean queries, and version-range acceptance predicates
//! applied per candidate record.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod criteria;
pub mod error;
pub mod fields;
pub mod index;
pub mod version;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, builders, or test helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        criteria::{Criterion, MatchOptions, Occurrence},
        fields::Field,
        index::{ArtifactRecord, RecordFilter},
        version::VersionRangeFilter,
    };
}
