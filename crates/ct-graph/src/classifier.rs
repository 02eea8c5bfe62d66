//! Manoeuvre classification from segment direction vectors.
//!
//! # Angle convention
//!
//! With `v_i` the direction of the incoming segment and `v_j` that of the
//! outgoing one, the unsigned angle `acos(v_i·v_j / |v_i||v_j|)` is mapped
//! onto `[0, 360)` by the sign of `det[v_i, v_j]`:
//!
//! ```text
//! det < 0   angle = raw             (clockwise: a right turn)
//! det ≥ 0   angle = 360 - raw
//! ```
//!
//! | Angle (degrees)      | Manoeuvre     |
//! |----------------------|---------------|
//! | `(30, 175]`          | `TurnRight`   |
//! | `(175, 185]`         | `MakeUTurn`   |
//! | `(185, 330]`         | `TurnLeft`    |
//! | `(330, 360] ∪ [0, 30]` | `GoStraight` |
//!
//! A straight continuation has `raw = 0` and `det = 0`, hence `angle = 360`,
//! which still lands in the straight bracket.

use ct_city::Segment;
use ct_core::{GridVector, Manoeuvre};

/// Signed turning angle in degrees from direction `from` to direction `to`.
///
/// Zero-length vectors have no direction; the result is then `NaN`.
pub fn turn_angle(from: GridVector, to: GridVector) -> f64 {
    let cosine = (from.dot(to) as f64 / (from.norm() * to.norm())).clamp(-1.0, 1.0);
    let raw = cosine.acos().to_degrees();
    if from.determinant(to) < 0 { raw } else { 360.0 - raw }
}

/// Classify the move between two direction vectors.
pub fn classify_vectors(from: GridVector, to: GridVector) -> Manoeuvre {
    let angle = turn_angle(from, to);
    if angle > 30.0 && angle <= 175.0 {
        Manoeuvre::TurnRight
    } else if angle > 175.0 && angle <= 185.0 {
        Manoeuvre::MakeUTurn
    } else if angle > 185.0 && angle <= 330.0 {
        Manoeuvre::TurnLeft
    } else {
        Manoeuvre::GoStraight
    }
}

/// Classify the move from `incoming` onto `outgoing`.
///
/// Only meaningful when `incoming.head == outgoing.tail`; the graph builder
/// never calls it otherwise.
#[inline]
pub fn classify_manoeuvre(incoming: &Segment, outgoing: &Segment) -> Manoeuvre {
    debug_assert!(incoming.leads_into(outgoing));
    classify_vectors(incoming.vector(), outgoing.vector())
}
