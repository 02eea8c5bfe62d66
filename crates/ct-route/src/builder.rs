//! Fluent builder running the whole generate → route pipeline.

use tracing::info;

use ct_city::{City, SegmentIndex, generate_city};
use ct_core::{CityRng, PipelineConfig, Point2};
use ct_graph::{GraphStatistics, ManoeuvreGraph, build_manoeuvre_graph, prune_turns};

use crate::{
    RandomWalk, RealCircuit, RouteResult, RouteStatistics, VirtualGraph, WalkStrategy, balance,
    extract_circuit, random_walk,
};

/// Random-walk step cap, per node of the pruned graph.
const WALK_STEPS_PER_NODE: usize = 1_000;

/// Seed offset for the random-walk stream, so it never replays the city's.
const WALK_STREAM: u64 = 1;

// ── Tour ──────────────────────────────────────────────────────────────────────

/// Every stage's result for one pipeline run.
#[derive(Debug)]
pub struct Tour {
    pub config:        PipelineConfig,
    pub city:          City,
    /// The manoeuvre graph after pruning; the base for balancing and path
    /// expansion.
    pub pruned:        ManoeuvreGraph,
    pub graph_stats:   GraphStatistics,
    pub virtual_graph: VirtualGraph,
    pub circuit:       RealCircuit,
    pub stats:         RouteStatistics,
}

impl Tour {
    /// A seeded random walk over the pruned graph, for comparison with the
    /// circuit.
    pub fn random_walk(&self, strategy: WalkStrategy) -> RouteResult<RandomWalk> {
        let mut rng = CityRng::new(self.config.seed).child(WALK_STREAM);
        let cap = self.pruned.node_count().saturating_mul(WALK_STEPS_PER_NODE);
        random_walk(&self.pruned, strategy, cap, &mut rng)
    }
}

// ── TourBuilder ───────────────────────────────────────────────────────────────

/// Fluent builder for [`Tour`].
///
/// # Optional inputs
///
/// | Method            | Default                                          |
/// |-------------------|--------------------------------------------------|
/// | `.with_city(c)`   | Generate from `config.city` seeded by `config.seed` |
/// | `.depot(p)`       | Circuit starts at the graph's first node         |
///
/// # Example
///
/// ```rust,ignore
/// let tour = TourBuilder::new(PipelineConfig::default())
///     .depot(Point2::new(0.0, 0.0))
///     .build()?;
/// println!("{} steps", tour.circuit.len());
/// ```
pub struct TourBuilder {
    config: PipelineConfig,
    city:   Option<City>,
    depot:  Option<Point2>,
}

impl TourBuilder {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config, city: None, depot: None }
    }

    /// Route over an existing city (a district, a hand-made layout) instead
    /// of generating one.
    pub fn with_city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    /// Start the circuit at the routable segment nearest to `pos`.
    pub fn depot(mut self, pos: Point2) -> Self {
        self.depot = Some(pos);
        self
    }

    /// Run every stage and return the collected results.
    pub fn build(self) -> RouteResult<Tour> {
        let config = self.config;
        config.validate()?;

        let city = match self.city {
            Some(city) => city,
            None => generate_city(&config.city, &mut CityRng::new(config.seed))?,
        };

        let graph = build_manoeuvre_graph(&city, &config.penalties)?;
        let pruned = prune_turns(graph, config.u_turn_order, config.prune_right_turns)?;
        let graph_stats = GraphStatistics::of(&pruned);
        let virtual_graph = balance(&pruned, config.max_balance_passes, config.adjacent_partners)?;
        let mut circuit = extract_circuit(&pruned, &virtual_graph)?;

        if let Some(pos) = self.depot {
            let index = SegmentIndex::new(&city);
            let start = index
                .k_nearest(pos, index.len())
                .into_iter()
                .find(|&id| pruned.contains_node(id));
            if let Some(start) = start {
                circuit = circuit.rotate_to(start)?;
                info!(depot = %pos, start = start.0, "rotated circuit to depot");
            }
        }

        let stats = RouteStatistics::of(&circuit, &pruned);
        info!(
            length = stats.length,
            nodes = stats.distinct_nodes,
            repeated = stats.repeated_steps,
            penalty = stats.total_penalty,
            "built tour"
        );

        Ok(Tour { config, city, pruned, graph_stats, virtual_graph, circuit, stats })
    }
}
