//! CSV export backend.
//!
//! Creates two files in the configured output directory:
//! - `route_waypoints.csv`
//! - `route_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ct_core::Manoeuvre;

use crate::writer::RouteWriter;
use crate::{OutputResult, SummaryRow, WaypointRow};

pub const WAYPOINTS_FILE: &str = "route_waypoints.csv";
pub const SUMMARY_FILE: &str = "route_summary.csv";

/// Writes an exported route to two CSV files.
pub struct CsvRouteWriter {
    waypoints: Writer<File>,
    summary:   Writer<File>,
    finished:  bool,
}

impl CsvRouteWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut waypoints = Writer::from_path(dir.join(WAYPOINTS_FILE))?;
        waypoints.write_record([
            "step", "segment_id", "tail_x", "tail_y", "head_x", "head_y", "manoeuvre", "expanded",
        ])?;

        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        let mut header = vec![
            "seed",
            "width",
            "height",
            "length",
            "distinct_nodes",
            "distinct_edges",
            "node_coverage",
            "edge_coverage",
            "repeated_steps",
            "virtual_expansions",
            "expanded_steps",
            "total_penalty",
        ];
        header.extend(Manoeuvre::ALL.iter().map(|m| m.as_str()));
        summary.write_record(&header)?;

        Ok(Self { waypoints, summary, finished: false })
    }
}

impl RouteWriter for CsvRouteWriter {
    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()> {
        for row in rows {
            self.waypoints.write_record(&[
                row.step.to_string(),
                row.segment_id.to_string(),
                row.tail_x.to_string(),
                row.tail_y.to_string(),
                row.head_x.to_string(),
                row.head_y.to_string(),
                row.manoeuvre.to_owned(),
                (row.expanded as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        let mut record = vec![
            row.seed.to_string(),
            row.width.to_string(),
            row.height.to_string(),
            row.length.to_string(),
            row.distinct_nodes.to_string(),
            row.distinct_edges.to_string(),
            format!("{:.4}", row.node_coverage),
            format!("{:.4}", row.edge_coverage),
            row.repeated_steps.to_string(),
            row.virtual_expansions.to_string(),
            row.expanded_steps.to_string(),
            row.total_penalty.to_string(),
        ];
        record.extend(row.manoeuvres.iter().map(|n| n.to_string()));
        self.summary.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.waypoints.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
