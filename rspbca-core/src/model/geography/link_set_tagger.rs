use super::{GeographyMembership, GeographyTagger};
use std::collections::HashMap;

/// in-memory membership lookup keyed by directed link endpoints.
#[derive(Clone, Debug, Default)]
pub struct LinkSetTagger {
    links: HashMap<(i64, i64), GeographyMembership>,
}

impl LinkSetTagger {
    pub fn new() -> LinkSetTagger {
        LinkSetTagger::default()
    }

    /// adds membership for (i, j), merging with any existing entry.
    pub fn insert(&mut self, i_node: i64, j_node: i64, membership: GeographyMembership) {
        self.links
            .entry((i_node, j_node))
            .and_modify(|m| m.merge(&membership))
            .or_insert(membership);
    }

    pub fn add_project_link(&mut self, i_node: i64, j_node: i64) {
        let membership = GeographyMembership {
            project: true,
            ..Default::default()
        };
        self.insert(i_node, j_node, membership);
    }

    pub fn add_corridor_link(&mut self, i_node: i64, j_node: i64) {
        let membership = GeographyMembership {
            corridor: true,
            ..Default::default()
        };
        self.insert(i_node, j_node, membership);
    }

    pub fn add_eda_volume(&mut self, i_node: i64, j_node: i64, eda_volume: f64) {
        let membership = GeographyMembership {
            eda: eda_volume > 0.0,
            eda_volume,
            ..Default::default()
        };
        self.insert(i_node, j_node, membership);
    }

    /// drops project and corridor membership, keeping only links that carry
    /// EDA volume.
    pub fn retain_eda(&mut self) {
        self.links.retain(|_, m| m.eda);
        for m in self.links.values_mut() {
            m.project = false;
            m.corridor = false;
        }
    }

    pub fn project_link_count(&self) -> usize {
        self.links.values().filter(|m| m.project).count()
    }

    pub fn corridor_link_count(&self) -> usize {
        self.links.values().filter(|m| m.corridor).count()
    }
}

impl GeographyTagger for LinkSetTagger {
    fn membership(&self, i_node: i64, j_node: i64) -> Option<GeographyMembership> {
        self.links.get(&(i_node, j_node)).copied()
    }

    fn len(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod test {
    use super::LinkSetTagger;
    use crate::model::geography::GeographyTagger;

    #[test]
    fn test_memberships_merge() {
        let mut tagger = LinkSetTagger::new();
        tagger.add_project_link(1, 2);
        tagger.add_corridor_link(1, 2);
        tagger.add_corridor_link(2, 3);
        tagger.add_eda_volume(1, 2, 40.0);

        let m = tagger.membership(1, 2).expect("link 1-2 was tagged");
        assert!(m.project && m.corridor && m.eda);
        assert_eq!(m.eda_volume, 40.0);

        let m = tagger.membership(2, 3).expect("link 2-3 was tagged");
        assert!(!m.project && m.corridor);
        assert_eq!(tagger.project_link_count(), 1);
        assert_eq!(tagger.corridor_link_count(), 2);
    }

    #[test]
    fn test_retain_eda() {
        let mut tagger = LinkSetTagger::new();
        tagger.add_project_link(1, 2);
        tagger.add_corridor_link(2, 3);
        tagger.add_eda_volume(1, 2, 15.0);
        tagger.retain_eda();

        assert_eq!(tagger.len(), 1);
        let m = tagger.membership(1, 2).expect("eda link kept");
        assert!(!m.project && !m.corridor && m.eda);
        assert_eq!(m.eda_volume, 15.0);
        assert!(tagger.membership(2, 3).is_none());
    }

    #[test]
    fn test_links_are_directed() {
        let mut tagger = LinkSetTagger::new();
        tagger.add_project_link(1, 2);
        assert!(tagger.membership(2, 1).is_none());
    }
}
