//! Random district windows.
//!
//! A district is an axis-aligned window of the lattice.  Selecting a district
//! keeps only the segments lying entirely inside it (borders inclusive), which
//! is how smaller routing problems are carved out of one generated city.

use tracing::info;

use ct_core::{CityRng, GridPoint};

use crate::{City, CityError, CityResult};

/// Inclusive lattice window `[west, east] × [south, north]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct District {
    pub west:  i32,
    pub south: i32,
    pub east:  i32,
    pub north: i32,
}

impl District {
    pub fn new(west: i32, south: i32, east: i32, north: i32) -> Self {
        Self { west, south, east, north }
    }

    #[inline]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= self.west && p.x <= self.east && p.y >= self.south && p.y <= self.north
    }
}

/// Place a `district_width × district_height` window uniformly at random
/// inside a `width × height` city.
pub fn random_district(
    width:           u32,
    height:          u32,
    district_width:  u32,
    district_height: u32,
    rng:             &mut CityRng,
) -> CityResult<District> {
    if district_width > width || district_height > height {
        return Err(CityError::DistrictTooLarge { width, height, district_width, district_height });
    }
    let west = rng.gen_range(0..=(width - district_width)) as i32;
    let south = rng.gen_range(0..=(height - district_height)) as i32;
    Ok(District::new(
        west,
        south,
        west + district_width as i32,
        south + district_height as i32,
    ))
}

/// Keep only the segments of `city` lying wholly inside `district`.
///
/// The lattice dimensions of the result are those of the parent city, so
/// segment coordinates remain directly comparable.
pub fn select_district(city: &City, district: &District) -> City {
    let kept: Vec<_> = city
        .iter()
        .filter(|s| s.geometry.iter().all(|&p| district.contains(p)))
        .cloned()
        .collect();
    info!(
        west = district.west,
        east = district.east,
        south = district.south,
        north = district.north,
        kept = kept.len(),
        of = city.len(),
        "selected district"
    );
    City::new(city.width, city.height, kept)
}
