//! Version scheme and range filtering.
//!
//! [`GenericVersion`] gives artifact versions a lenient grammar and a total
//! ordering; [`VersionRangeFilter`] uses that ordering to express
//! inclusive/exclusive version windows applied per candidate record.

mod generic;
mod range;

pub use generic::{GenericVersion, VersionError};
pub use range::{UnparsedPolicy, VersionRangeFilter};
