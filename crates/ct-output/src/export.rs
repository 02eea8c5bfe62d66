//! Resolve a tour into rows and hand them to a [`RouteWriter`].

use tracing::info;

use ct_city::City;
use ct_route::{RealCircuit, Tour};

use crate::writer::RouteWriter;
use crate::{OutputError, OutputResult, SummaryRow, WaypointRow};

/// One row per circuit step, each node resolved back to its segment.
///
/// # Errors
///
/// [`OutputError::UnknownSegment`] if a step names a segment absent from
/// `city`.
pub fn waypoint_rows(city: &City, circuit: &RealCircuit) -> OutputResult<Vec<WaypointRow>> {
    circuit
        .steps()
        .iter()
        .enumerate()
        .map(|(step, s)| {
            let segment = city.segment(s.edge.from).ok_or(OutputError::UnknownSegment(s.edge.from))?;
            Ok(WaypointRow {
                step,
                segment_id: segment.id.0,
                tail_x:     segment.tail.x,
                tail_y:     segment.tail.y,
                head_x:     segment.head.x,
                head_y:     segment.head.y,
                manoeuvre:  s.edge.manoeuvre().map_or("", |m| m.as_str()),
                expanded:   s.is_expanded(),
            })
        })
        .collect()
}

pub fn summary_row(tour: &Tour) -> SummaryRow {
    let s = &tour.stats;
    SummaryRow {
        seed:               tour.config.seed,
        width:              tour.city.width,
        height:             tour.city.height,
        length:             s.length,
        distinct_nodes:     s.distinct_nodes,
        distinct_edges:     s.distinct_edges,
        node_coverage:      s.node_coverage,
        edge_coverage:      s.edge_coverage,
        repeated_steps:     s.repeated_steps,
        virtual_expansions: s.virtual_expansions,
        expanded_steps:     s.expanded_steps,
        total_penalty:      s.total_penalty,
        manoeuvres:         s.manoeuvres,
    }
}

/// Write every waypoint and the summary of `tour`, then finish `writer`.
pub fn export_tour<W: RouteWriter>(writer: &mut W, tour: &Tour) -> OutputResult<()> {
    let rows = waypoint_rows(&tour.city, &tour.circuit)?;
    writer.write_waypoints(&rows)?;
    writer.write_summary(&summary_row(tour))?;
    writer.finish()?;
    info!(waypoints = rows.len(), "exported tour");
    Ok(())
}
