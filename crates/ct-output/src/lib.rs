//! `ct-output` — ad-hoc export of a routed tour.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `route_waypoints.csv`, `route_summary.csv`   |
//!
//! Backends implement [`RouteWriter`]; [`export_tour`] resolves every step
//! of the real circuit back to its city segment and drives the writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ct_output::{CsvRouteWriter, export_tour};
//!
//! let mut writer = CsvRouteWriter::new(Path::new("./output"))?;
//! export_tour(&mut writer, &tour)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;


pub use csv::{CsvRouteWriter, SUMMARY_FILE, WAYPOINTS_FILE};
pub use error::{OutputError, OutputResult};
pub use export::{export_tour, summary_row, waypoint_rows};
pub use row::{SummaryRow, WaypointRow};
pub use writer::RouteWriter;
