//! Pipeline configuration.
//!
//! # Design
//!
//! Only three values are genuinely external: the city width, the city height
//! and the four direction-frequency weights.  Everything else (penalties,
//! the balancer's pass cap, pruning order) has a fixed default and may be
//! overridden, typically from a JSON file loaded by the application crate.
//!
//! Validation is explicit: call [`CityConfig::validate`] (the generator does)
//! before any randomness is drawn, so bad input fails fast.

use crate::{CoreError, CoreResult, ManoeuvrePenalties};

// ── DirectionFrequencies ──────────────────────────────────────────────────────

/// Categorical sampling weights for the directionality of each grid street.
///
/// The weights need not sum to 1; they are normalised at sampling time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionFrequencies {
    pub no_way:           f64,
    pub one_way_forward:  f64,
    pub one_way_backward: f64,
    pub two_way:          f64,
}

impl DirectionFrequencies {
    pub fn new(no_way: f64, one_way_forward: f64, one_way_backward: f64, two_way: f64) -> Self {
        Self { no_way, one_way_forward, one_way_backward, two_way }
    }

    /// Every street two-way: the fully regular grid used by most tests.
    pub fn all_two_way() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Weights in category order `[no_way, forward, backward, two_way]`.
    #[inline]
    pub fn weights(&self) -> [f64; 4] {
        [self.no_way, self.one_way_forward, self.one_way_backward, self.two_way]
    }

    /// Reject negative, non-finite, or all-zero weights.
    pub fn validate(&self) -> CoreResult<()> {
        let weights = self.weights();
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(CoreError::InvalidConfiguration(format!(
                "direction frequency weights must be finite and non-negative, got {w}"
            )));
        }
        if weights.iter().all(|w| *w == 0.0) {
            return Err(CoreError::InvalidConfiguration(
                "direction frequency weights are all zero; no segment can be generated".into(),
            ));
        }
        Ok(())
    }
}

impl Default for DirectionFrequencies {
    fn default() -> Self {
        Self::new(0.2, 0.5, 0.15, 0.15)
    }
}

// ── CityConfig ────────────────────────────────────────────────────────────────

/// Size and street-direction mix of a synthetic grid city.
/// Largest accepted `street_slots()`.  Keeps every street id well inside
/// the signed 32-bit segment id range.
pub const MAX_STREET_SLOTS: u64 = 1 << 24;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityConfig {
    /// Number of lattice columns (east-west extent).
    pub width: u32,
    /// Number of lattice rows (south-north extent).
    pub height: u32,
    pub frequencies: DirectionFrequencies,
}

impl CityConfig {
    pub fn new(width: u32, height: u32, frequencies: DirectionFrequencies) -> Self {
        Self { width, height, frequencies }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "city dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.street_slots() > MAX_STREET_SLOTS {
            return Err(CoreError::InvalidConfiguration(format!(
                "city dimensions {}x{} exceed the limit of {MAX_STREET_SLOTS} streets",
                self.width, self.height
            )));
        }
        self.frequencies.validate()
    }

    /// Number of grid streets the generator will number (`2 · width · height`);
    /// ids are assigned to every lattice edge even when it produces no segment.
    #[inline]
    pub fn street_slots(&self) -> u64 {
        2 * self.width as u64 * self.height as u64
    }
}

impl Default for CityConfig {
    fn default() -> Self {
        Self::new(12, 8, DirectionFrequencies::default())
    }
}

// ── UTurnOrder ────────────────────────────────────────────────────────────────

/// Order in which u-turn edges are offered to the pruner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UTurnOrder {
    /// Graph edge order, except that an edge `(a, b)` joining opposite-sign
    /// nodes is immediately followed by its mirror `(-a, -b)`.
    #[default]
    MirrorPairs,
    /// Plain graph edge order.
    Scan,
}

/// What the balancer does with a surplus-in node whose only reachable
/// partners it already has an edge to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AdjacentPartners {
    /// Never pair with an adjacent node; the rest of the pass is abandoned.
    #[default]
    Skip,
    /// Pair with the first reachable adjacent node, adding a parallel edge.
    Allow,
}

// ── PipelineConfig ────────────────────────────────────────────────────────────

/// Top-level configuration for one generate → route run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    pub city: CityConfig,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub penalties: ManoeuvrePenalties,

    /// Upper bound on balancing passes before the run is declared
    /// non-convergent.
    pub max_balance_passes: usize,

    pub u_turn_order: UTurnOrder,

    pub adjacent_partners: AdjacentPartners,

    /// Also prune right turns after u-turns and left turns.  Off by default:
    /// right turns cost nothing and removing them only lengthens the route.
    pub prune_right_turns: bool,
}

impl PipelineConfig {
    /// Default configuration for a `width × height` city.
    pub fn for_city(city: CityConfig) -> Self {
        Self { city, ..Self::default() }
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.city.validate()?;
        if self.max_balance_passes == 0 {
            return Err(CoreError::InvalidConfiguration(
                "max_balance_passes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            city:               CityConfig::default(),
            seed:               0,
            penalties:          ManoeuvrePenalties::default(),
            max_balance_passes: 1_000,
            u_turn_order:       UTurnOrder::default(),
            adjacent_partners:  AdjacentPartners::default(),
            prune_right_turns:  false,
        }
    }
}
