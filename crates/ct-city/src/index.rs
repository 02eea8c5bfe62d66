//! Nearest-segment lookup.
//!
//! An R-tree (via `rstar`) over segment midpoints.  Used to snap a depot or
//! any free-floating position to the segment a tour should start from.
//!
//! Both halves of a two-way street share a midpoint; which of the two a
//! query returns is unspecified.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use ct_core::{Point2, SegmentId};

use crate::City;

#[derive(Clone)]
struct SegmentEntry {
    point: [f64; 2],
    id:    SegmentId,
}

impl RTreeObject for SegmentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SegmentEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index over the midpoints of a city's segments.
pub struct SegmentIndex {
    tree: RTree<SegmentEntry>,
}

impl SegmentIndex {
    pub fn new(city: &City) -> Self {
        let entries: Vec<SegmentEntry> = city
            .iter()
            .map(|s| {
                let m = s.midpoint();
                SegmentEntry { point: [m.x, m.y], id: s.id }
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Segment whose midpoint is closest to `pos`.
    ///
    /// Returns `None` only if the city has no segments.
    pub fn nearest(&self, pos: Point2) -> Option<SegmentId> {
        self.tree.nearest_neighbor(&[pos.x, pos.y]).map(|e| e.id)
    }

    /// Up to `k` segments sorted by ascending midpoint distance.
    pub fn k_nearest(&self, pos: Point2, k: usize) -> Vec<SegmentId> {
        self.tree
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
