use crate::index::ArtifactRecord;

///
/// Grouping
/// Group-key extraction for grouped search results.
///

pub trait Grouping {
    fn key(&self, record: &ArtifactRecord) -> String;
}

///
/// GroupArtifactGrouping
///
/// Buckets records by their `group:name` coordinate, collapsing the
/// versions of one artifact into a single group.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct GroupArtifactGrouping;

impl Grouping for GroupArtifactGrouping {
    fn key(&self, record: &ArtifactRecord) -> String {
        format!("{}:{}", record.group(), record.name())
    }
}
