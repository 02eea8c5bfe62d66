//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! # Sign convention
//!
//! A street is numbered once (`StreetId`, from 1).  Each travel direction of
//! that street materialises as a segment: the forward one carries `+k`, the
//! reverse one of a two-way street carries `-k`.  `SegmentId(0)` never names
//! a real segment and doubles as the `INVALID` sentinel.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) = $invalid:expr;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name($invalid);

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of one directed street segment.  Negative for the reverse
    /// half of a two-way street.
    pub struct SegmentId(i32) = 0;
}

typed_id! {
    /// Identifier of a grid street (one lattice edge), shared by both
    /// directions of a two-way street.
    pub struct StreetId(u32) = 0;
}

impl SegmentId {
    /// The segment travelling the same street in the opposite direction.
    ///
    /// Only meaningful for two-way streets; for one-way streets the reverse
    /// id simply does not exist in the city.
    #[inline]
    pub fn reverse(self) -> SegmentId {
        SegmentId(-self.0)
    }

    /// `true` for the `-k` half of a two-way street.
    #[inline]
    pub fn is_reverse(self) -> bool {
        self.0 < 0
    }

    /// The street this segment belongs to.
    #[inline]
    pub fn street(self) -> StreetId {
        StreetId(self.0.unsigned_abs())
    }
}
