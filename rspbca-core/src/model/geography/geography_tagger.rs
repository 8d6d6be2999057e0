use super::GeographyMembership;

/// answers which geographies a roadway link belongs to. implementations
/// wrap whatever upstream process selected project and corridor links.
pub trait GeographyTagger {
    /// membership of the directed link (i, j), or None when the tagger
    /// knows nothing about it. unknown links are treated as non-members.
    fn membership(&self, i_node: i64, j_node: i64) -> Option<GeographyMembership>;

    /// number of links with a membership entry
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// tags nothing. used when no project geography is configured.
pub struct NoGeography;

impl GeographyTagger for NoGeography {
    fn membership(&self, _i_node: i64, _j_node: i64) -> Option<GeographyMembership> {
        None
    }

    fn len(&self) -> usize {
        0
    }
}
