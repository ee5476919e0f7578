use crate::fields::{self, Field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// ArtifactRecord
///
/// A single indexed item: the artifact coordinates plus the free-form
/// attributes contributed by custom index creators. Records are produced
/// by the external index; the model only reads them through field lookup.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ArtifactRecord {
    group: String,
    name: String,
    version: String,
    packaging: Option<String>,
    classifier: Option<String>,
    sha1: Option<String>,

    /// Attributes outside the core coordinates, keyed by field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl ArtifactRecord {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            packaging: None,
            classifier: None,
            sha1: None,
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = Some(packaging.into());
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    #[must_use]
    pub fn with_sha1(mut self, sha1: impl Into<String>) -> Self {
        self.sha1 = Some(sha1.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, field: Field, value: impl Into<String>) -> Self {
        self.attributes.insert(field.name().to_string(), value.into());
        self
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Resolve a field against this record. Core coordinates resolve to
    /// their dedicated slots; anything else falls back to the free-form
    /// attribute map. `None` means the field is not present on the record.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        if name == fields::artifact::GROUP.name() {
            Some(&self.group)
        } else if name == fields::artifact::NAME.name() {
            Some(&self.name)
        } else if name == fields::artifact::VERSION.name() {
            Some(&self.version)
        } else if name == fields::artifact::PACKAGING.name() {
            self.packaging.as_deref()
        } else if name == fields::artifact::CLASSIFIER.name() {
            self.classifier.as_deref()
        } else if name == fields::artifact::SHA1.name() {
            self.sha1.as_deref()
        } else {
            self.attributes.get(name).map(String::as_str)
        }
    }
}

///
/// RecordFilter
///
/// Per-candidate acceptance predicate applied by the index while the
/// boolean query selects records. Implementations must be pure: `accepts`
/// is invoked repeatedly and concurrently with identical results.
///

pub trait RecordFilter {
    fn accepts(&self, record: &ArtifactRecord) -> bool;
}
