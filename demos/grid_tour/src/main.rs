//! grid_tour — route a closed tour over a synthetic street grid.
//!
//! ```text
//! grid_tour [config.json]
//! ```
//!
//! Without an argument the default 12 × 8 city is used.  The optional JSON
//! file holds a `PipelineConfig`; missing fields take their defaults.  Set
//! `RUST_LOG=debug` for per-stage detail.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ct_city::CityStatistics;
use ct_core::{Manoeuvre, PipelineConfig};
use ct_output::{CsvRouteWriter, export_tour};
use ct_route::{TourBuilder, WalkStrategy};

const OUTPUT_DIR: &str = "output/grid_tour";

fn load_config() -> Result<PipelineConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(PipelineConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config()?;
    println!("=== grid_tour ===");
    println!(
        "City: {} × {}  |  Seed: {}  |  U-turn order: {:?}",
        config.city.width, config.city.height, config.seed, config.u_turn_order
    );
    println!();

    // 1. Run the pipeline.
    let t0 = Instant::now();
    let tour = TourBuilder::new(config).build()?;
    let elapsed = t0.elapsed();

    // 2. City and graph.
    let city = CityStatistics::of(&tour.city);
    println!(
        "City: {} segments ({} one-way, {} two-way streets)",
        city.segments, city.one_way, city.two_way
    );
    let g = &tour.graph_stats;
    println!(
        "Pruned graph: {} nodes, {} edges, {} dead ends, strongly connected: {}",
        g.nodes, g.edges, g.dead_ends, g.strongly_connected
    );
    println!(
        "Balancing: {} virtual edges in {} passes",
        tour.virtual_graph.virtual_edge_count(),
        tour.virtual_graph.passes()
    );
    println!();

    // 3. Route.
    let s = &tour.stats;
    println!("Route built in {:.3} s", elapsed.as_secs_f64());
    println!("  length          : {}", s.length);
    println!("  repeated steps  : {}", s.repeated_steps);
    println!("  expansions      : {} ({} steps)", s.virtual_expansions, s.expanded_steps);
    println!("  total penalty   : {}", s.total_penalty);
    println!("  edge coverage   : {:.1} %", s.edge_coverage * 100.0);
    println!();
    println!("{:<14} {:>6}", "Manoeuvre", "Steps");
    println!("{}", "-".repeat(21));
    for m in Manoeuvre::ALL {
        println!("{:<14} {:>6}", m.as_str(), s.count(m));
    }
    println!();

    // 4. Random-walk comparison.
    for strategy in [WalkStrategy::Uniform, WalkStrategy::PreferUnvisited] {
        let walk = tour.random_walk(strategy)?;
        println!(
            "Random walk ({strategy:?}): {} steps{}",
            walk.len(),
            if walk.complete { "" } else { " (incomplete)" }
        );
    }
    println!();

    // 5. Export.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvRouteWriter::new(Path::new(OUTPUT_DIR))?;
    export_tour(&mut writer, &tour)?;
    info!(dir = OUTPUT_DIR, "wrote route CSVs");
    println!("Wrote {OUTPUT_DIR}/route_waypoints.csv and route_summary.csv");

    Ok(())
}
