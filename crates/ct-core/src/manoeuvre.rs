//! Manoeuvre kinds and their route-cost penalties.
//!
//! The four variants are closed: every pair of adjacent segments maps to
//! exactly one of them, and every manoeuvre has exactly one penalty.

/// The turning action needed to move from one segment onto the next.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Manoeuvre {
    GoStraight,
    TurnRight,
    TurnLeft,
    MakeUTurn,
}

impl Manoeuvre {
    /// All variants, in reporting order.
    pub const ALL: [Manoeuvre; 4] = [
        Manoeuvre::GoStraight,
        Manoeuvre::TurnRight,
        Manoeuvre::TurnLeft,
        Manoeuvre::MakeUTurn,
    ];

    /// Stable label, used for CSV column values and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Manoeuvre::GoStraight => "go_straight",
            Manoeuvre::TurnRight  => "turn_right",
            Manoeuvre::TurnLeft   => "turn_left",
            Manoeuvre::MakeUTurn  => "make_u_turn",
        }
    }

    /// Dense index into per-manoeuvre count arrays (`[usize; 4]`).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Manoeuvre::GoStraight => 0,
            Manoeuvre::TurnRight  => 1,
            Manoeuvre::TurnLeft   => 2,
            Manoeuvre::MakeUTurn  => 3,
        }
    }
}

impl std::fmt::Display for Manoeuvre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ManoeuvrePenalties ────────────────────────────────────────────────────────

/// Penalty weight attached to each manoeuvre edge.
///
/// Right turns are free so that optimisation favours them under right-hand
/// traffic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManoeuvrePenalties {
    pub go_straight: u32,
    pub turn_right:  u32,
    pub turn_left:   u32,
    pub make_u_turn: u32,
}

impl ManoeuvrePenalties {
    #[inline]
    pub fn penalty(&self, manoeuvre: Manoeuvre) -> u32 {
        match manoeuvre {
            Manoeuvre::GoStraight => self.go_straight,
            Manoeuvre::TurnRight  => self.turn_right,
            Manoeuvre::TurnLeft   => self.turn_left,
            Manoeuvre::MakeUTurn  => self.make_u_turn,
        }
    }
}

impl Default for ManoeuvrePenalties {
    fn default() -> Self {
        Self {
            go_straight: 0,
            turn_right:  0,
            turn_left:   3,
            make_u_turn: 10,
        }
    }
}
