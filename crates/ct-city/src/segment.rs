//! Street segments and the city that owns them.
//!
//! A `Segment` is one directed unit of street between two adjacent lattice
//! points.  Two-way streets materialise as two segments (`k` and `-k`) whose
//! coordinate sequences are exact reverses of each other.

use rustc_hash::FxHashMap;

use ct_core::{GridPoint, GridVector, Point2, SegmentId, StreetId};

// ── Direction ─────────────────────────────────────────────────────────────────

/// Directionality category sampled for every grid street.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    NoWay,
    OneWayForward,
    OneWayBackward,
    TwoWay,
}

impl Direction {
    /// Category order used by the frequency weights.
    pub const CATEGORIES: [Direction; 4] = [
        Direction::NoWay,
        Direction::OneWayForward,
        Direction::OneWayBackward,
        Direction::TwoWay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::NoWay          => "no_way",
            Direction::OneWayForward  => "one_way_forward",
            Direction::OneWayBackward => "one_way_backward",
            Direction::TwoWay         => "two_way",
        }
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// One directed street segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub id:        SegmentId,
    /// Category of the street this segment was materialised from.
    pub direction: Direction,
    pub tail:      GridPoint,
    pub head:      GridPoint,
    /// Ordered line geometry from `tail` to `head`.
    pub geometry:  Vec<GridPoint>,
}

impl Segment {
    /// A straight segment whose geometry is just its two endpoints.
    pub fn straight(id: SegmentId, direction: Direction, tail: GridPoint, head: GridPoint) -> Self {
        Self { id, direction, tail, head, geometry: vec![tail, head] }
    }

    /// The same street travelled the other way, carrying id `-id`.
    pub fn reversed(&self) -> Segment {
        let mut geometry = self.geometry.clone();
        geometry.reverse();
        Segment {
            id:        self.id.reverse(),
            direction: self.direction,
            tail:      self.head,
            head:      self.tail,
            geometry,
        }
    }

    #[inline]
    pub fn street(&self) -> StreetId {
        self.id.street()
    }

    /// Direction vector `head - tail`.
    #[inline]
    pub fn vector(&self) -> GridVector {
        self.tail.vector_to(self.head)
    }

    #[inline]
    pub fn midpoint(&self) -> Point2 {
        self.tail.midpoint(self.head)
    }

    /// Polyline length in city units.
    pub fn length(&self) -> f64 {
        self.geometry
            .windows(2)
            .map(|w| w[0].vector_to(w[1]).norm())
            .sum()
    }

    /// `true` if `self` can be followed directly by `next`.
    #[inline]
    pub fn leads_into(&self, next: &Segment) -> bool {
        self.head == next.tail
    }
}

// ── City ──────────────────────────────────────────────────────────────────────

/// An ordered collection of segments over a `width × height` lattice.
///
/// Order is generation order and is significant: every later stage iterates
/// segments in this order, which keeps the whole pipeline deterministic.
#[derive(Clone, Debug)]
pub struct City {
    pub width:    u32,
    pub height:   u32,
    segments:     Vec<Segment>,
    by_id:        FxHashMap<SegmentId, usize>,
}

impl City {
    /// Wrap an already materialised segment list.
    ///
    /// Later duplicates of an id shadow earlier ones in [`City::segment`];
    /// the generator never produces duplicates.
    pub fn new(width: u32, height: u32, segments: Vec<Segment>) -> Self {
        let by_id = segments
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();
        Self { width, height, segments, by_id }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Resolve a segment id back to its geometry.
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.by_id.get(&id).map(|&i| &self.segments[i])
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a City {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
