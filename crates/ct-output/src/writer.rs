//! The `RouteWriter` trait implemented by export backends.

use crate::{OutputResult, SummaryRow, WaypointRow};

/// Sink for an exported route.
pub trait RouteWriter {
    /// Write a batch of waypoints, in circuit order.
    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()>;

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
