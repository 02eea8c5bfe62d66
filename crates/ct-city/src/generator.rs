//! Random grid-city generator.
//!
//! # Lattice walk
//!
//! Cells are visited column-major (`i` over width, then `j` over height).
//! Each cell owns two grid streets, numbered consecutively from 1:
//!
//! ```text
//! east:  (i, j) → (i+1, j)     id 2·(i·height + j) + 1
//! north: (i, j) → (i, j+1)     id 2·(i·height + j) + 2
//! ```
//!
//! A direction category is drawn for every street before anything else is
//! decided, so the RNG stream consumed depends only on the city size.
//! Streets whose forward head falls outside `[0, width) × [0, height)` are
//! then dropped; this keeps the boundary of the lattice closed.

use rand::distributions::WeightedIndex;
use tracing::{debug, info};

use ct_core::{CityConfig, CityRng, CoreError, GridPoint, SegmentId};

use crate::{City, CityResult, CityStatistics, Direction, Segment};

/// Upper bound on the segment buffer reserved before generation.
const INITIAL_CAPACITY: u64 = 4_096;

/// Generate a random grid city.
///
/// Fails with [`CityError::Core`](crate::CityError::Core) when the
/// configuration is invalid; no randomness is drawn in that case.
pub fn generate_city(config: &CityConfig, rng: &mut CityRng) -> CityResult<City> {
    config.validate()?;

    let sampler = WeightedIndex::new(config.frequencies.weights())
        .map_err(|e| CoreError::InvalidConfiguration(format!("direction frequencies: {e}")))?;

    let (width, height) = (config.width, config.height);
    let mut segments = Vec::with_capacity(config.street_slots().min(INITIAL_CAPACITY) as usize);
    let mut street: i32 = 1;

    for i in 0..width as i32 {
        for j in 0..height as i32 {
            let tail = GridPoint::new(i, j);
            for head in [GridPoint::new(i + 1, j), GridPoint::new(i, j + 1)] {
                let direction = Direction::CATEGORIES[rng.sample(&sampler)];
                if head.within(width, height) {
                    materialise(&mut segments, SegmentId(street), direction, tail, head);
                }
                street += 1;
            }
        }
    }

    let city = City::new(width, height, segments);
    let stats = CityStatistics::of(&city);
    info!(
        width,
        height,
        segments = stats.segments,
        one_way = stats.one_way,
        two_way = stats.two_way,
        "generated city"
    );
    Ok(city)
}

/// Push the segments a street of the given category produces.
fn materialise(
    out:       &mut Vec<Segment>,
    id:        SegmentId,
    direction: Direction,
    tail:      GridPoint,
    head:      GridPoint,
) {
    match direction {
        Direction::NoWay => {
            debug!(street = id.0, "street closed");
        }
        Direction::OneWayForward => {
            out.push(Segment::straight(id, direction, tail, head));
        }
        Direction::OneWayBackward => {
            out.push(Segment::straight(id, direction, head, tail));
        }
        Direction::TwoWay => {
            let forward = Segment::straight(id, direction, tail, head);
            let reverse = forward.reversed();
            out.push(forward);
            out.push(reverse);
        }
    }
}
