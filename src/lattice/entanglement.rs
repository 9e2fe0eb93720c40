// src/lattice/entanglement.rs

//! Entanglement bookkeeping between lattice sites.
//!
//! The relation is kept as a partition of sites into clusters. Two sites are
//! partners exactly when they share a cluster, which makes the relation
//! symmetric and transitively closed by construction: entangling two sites
//! merges their clusters instead of walking a graph. Sites are addressed by
//! their signed coordinate, which stays fixed while the lattice grows on
//! either side.

use std::collections::{BTreeMap, BTreeSet};

/// Stable coordinate of a lattice site.
pub type Site = i64;

/// Identifier of a cluster inside one [`Clusters`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct ClusterId(u64);

/// Partition of entangled sites into clusters.
///
/// Sites with no partners are absent from the table; a cluster always holds
/// at least two sites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clusters {
    membership: BTreeMap<Site, ClusterId>,
    members: BTreeMap<ClusterId, BTreeSet<Site>>,
    next_id: u64,
}

impl Clusters {
    /// An empty relation.
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> ClusterId {
        let id = ClusterId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Records that `a` and `b` are entangled.
    ///
    /// Each site joins the other's whole cluster, so every former partner of
    /// `a` becomes a partner of every former partner of `b`. Entangling a site
    /// with itself does nothing.
    pub fn entangle(&mut self, a: Site, b: Site) {
        if a == b {
            return;
        }
        match (self.membership.get(&a).copied(), self.membership.get(&b).copied()) {
            (None, None) => {
                let id = self.fresh_id();
                self.members.insert(id, BTreeSet::from([a, b]));
                self.membership.insert(a, id);
                self.membership.insert(b, id);
            }
            (Some(id), None) => self.join(b, id),
            (None, Some(id)) => self.join(a, id),
            (Some(ia), Some(ib)) if ia == ib => {}
            (Some(ia), Some(ib)) => self.merge(ia, ib),
        }
    }

    fn join(&mut self, site: Site, id: ClusterId) {
        if let Some(set) = self.members.get_mut(&id) {
            set.insert(site);
            self.membership.insert(site, id);
        }
    }

    /// Folds the smaller of two clusters into the larger one.
    fn merge(&mut self, a: ClusterId, b: ClusterId) {
        let len_of = |id: &ClusterId| self.members.get(id).map_or(0, BTreeSet::len);
        let (keep, absorb) = if len_of(&a) >= len_of(&b) { (a, b) } else { (b, a) };

        let Some(moved) = self.members.remove(&absorb) else {
            return;
        };
        for site in &moved {
            self.membership.insert(*site, keep);
        }
        self.members.entry(keep).or_default().extend(moved);
    }

    /// Removes `site` from its cluster, leaving it with no partners.
    ///
    /// A cluster reduced to a single site is dissolved, since that site has
    /// no partners left either.
    pub fn release(&mut self, site: Site) {
        let Some(id) = self.membership.remove(&site) else {
            return;
        };
        let remaining = match self.members.get_mut(&id) {
            Some(set) => {
                set.remove(&site);
                set.len()
            }
            None => return,
        };
        if remaining < 2 {
            if let Some(rest) = self.members.remove(&id) {
                for s in rest {
                    self.membership.remove(&s);
                }
            }
        }
    }

    /// `true` if `a` and `b` are distinct sites in the same cluster.
    pub fn are_entangled(&self, a: Site, b: Site) -> bool {
        a != b
            && matches!(
                (self.membership.get(&a), self.membership.get(&b)),
                (Some(x), Some(y)) if x == y
            )
    }

    /// Partners of `site`, in ascending coordinate order.
    pub fn partners(&self, site: Site) -> Vec<Site> {
        self.membership
            .get(&site)
            .and_then(|id| self.members.get(id))
            .map(|set| set.iter().copied().filter(|&s| s != site).collect())
            .unwrap_or_default()
    }

    /// Number of partners of `site`.
    pub fn partner_count(&self, site: Site) -> usize {
        self.membership
            .get(&site)
            .and_then(|id| self.members.get(id))
            .map_or(0, |set| set.len() - 1)
    }

    /// Largest partner count of any site; 0 when nothing is entangled.
    pub fn max_partner_count(&self) -> usize {
        self.members.values().map(|set| set.len() - 1).max().unwrap_or(0)
    }

    /// All clusters, each as an ascending list of sites, ordered by their
    /// leftmost site.
    pub fn clusters(&self) -> Vec<Vec<Site>> {
        let mut out: Vec<Vec<Site>> = self.members.values().map(|set| set.iter().copied().collect()).collect();
        out.sort();
        out
    }

    /// `true` if no two sites are entangled.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entangle_is_symmetric_and_transitive() {
        let mut c = Clusters::new();
        c.entangle(0, 1);
        c.entangle(2, 3);
        assert!(!c.are_entangled(1, 2));

        c.entangle(1, 2);
        for a in 0..4 {
            for b in 0..4 {
                assert_eq!(c.are_entangled(a, b), a != b, "sites {} and {}", a, b);
            }
        }
        assert_eq!(c.clusters(), vec![vec![0, 1, 2, 3]]);
        assert_eq!(c.max_partner_count(), 3);
    }

    #[test]
    fn test_self_entanglement_is_ignored() {
        let mut c = Clusters::new();
        c.entangle(5, 5);
        assert!(c.is_empty());
        assert_eq!(c.partner_count(5), 0);
    }

    #[test]
    fn test_release_dissolves_pairs() {
        let mut c = Clusters::new();
        c.entangle(-1, 4);
        c.release(4);
        assert!(c.is_empty());
        assert!(c.partners(-1).is_empty());
    }

    #[test]
    fn test_release_keeps_rest_of_cluster() {
        let mut c = Clusters::new();
        c.entangle(0, 1);
        c.entangle(0, 2);
        c.release(0);
        assert_eq!(c.partners(1), vec![2]);
        assert_eq!(c.partners(0), Vec::<Site>::new());

        // A released site can join a new cluster.
        c.entangle(0, 7);
        assert_eq!(c.clusters(), vec![vec![0, 7], vec![1, 2]]);
    }
}
