//! Segment-level summary of a city.

use rustc_hash::FxHashSet;

use ct_core::SegmentId;

use crate::City;

/// Counts describing the street mix of a city.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityStatistics {
    /// Total directed segments.
    pub segments: usize,
    /// Segments with no reverse partner.
    pub one_way:  usize,
    /// Two-way streets (counted once, via their `-k` half).
    pub two_way:  usize,
}

impl CityStatistics {
    pub fn of(city: &City) -> Self {
        let ids: FxHashSet<SegmentId> = city.iter().map(|s| s.id).collect();
        let two_way = ids.iter().filter(|id| id.is_reverse()).count();
        let one_way = ids.iter().filter(|id| !ids.contains(&id.reverse())).count();
        Self { segments: city.len(), one_way, two_way }
    }
}
