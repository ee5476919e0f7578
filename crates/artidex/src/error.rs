use crate::{criteria::CriteriaError, version::VersionError};
use thiserror::Error as ThisError;

///
/// Error
/// Unified construction-time error surface.
///
/// Every variant is a usage error detected synchronously while building a
/// criteria tree or a version-range filter. There is nothing to retry;
/// callers should treat these as programmer errors.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error(transparent)]
    Version(#[from] VersionError),
}
