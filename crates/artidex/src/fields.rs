//! Searchable attribute vocabulary.
//!
//! The query model consumes fields, it never interprets them: a `Field` is
//! an opaque name resolved by the index against its records. The constants
//! below enumerate the attributes the standard artifact ontology indexes;
//! callers with custom index creators can mint their own with
//! [`Field::new`].

use derive_more::Display;

///
/// Field
///
/// Named attribute of an indexed artifact record. Compared by name, so two
/// independently minted fields with the same name are the same field.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{name}")]
pub struct Field {
    name: &'static str,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

///
/// Core artifact coordinates and packaging attributes.
///

pub mod artifact {
    use super::Field;

    pub const GROUP: Field = Field::new("group");
    pub const NAME: Field = Field::new("name");
    pub const VERSION: Field = Field::new("version");
    pub const PACKAGING: Field = Field::new("packaging");
    pub const CLASSIFIER: Field = Field::new("classifier");
    pub const SHA1: Field = Field::new("sha1");
}

///
/// Module-hierarchy attributes contributed by the hierarchy index creator.
///

pub mod hierarchy {
    use super::Field;

    /// Coordinate reference of the declaring parent artifact.
    pub const PARENT: Field = Field::new("parent");

    /// Names of the modules an aggregator artifact declares.
    pub const MODULES: Field = Field::new("modules");
}
