//! Plain data row types written by route writers.

/// One step of the real circuit, resolved to lattice coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaypointRow {
    pub step:       usize,
    pub segment_id: i32,
    pub tail_x:     i32,
    pub tail_y:     i32,
    pub head_x:     i32,
    pub head_y:     i32,
    /// Manoeuvre from this segment onto the next step's segment.
    pub manoeuvre:  &'static str,
    /// `true` if the step belongs to an expanded virtual edge.
    pub expanded:   bool,
}

/// Whole-route summary, one row per exported tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub seed:               u64,
    pub width:              u32,
    pub height:             u32,
    pub length:             usize,
    pub distinct_nodes:     usize,
    pub distinct_edges:     usize,
    pub node_coverage:      f64,
    pub edge_coverage:      f64,
    pub repeated_steps:     usize,
    pub virtual_expansions: usize,
    pub expanded_steps:     usize,
    pub total_penalty:      u64,
    /// Steps per manoeuvre, in `Manoeuvre::ALL` order.
    pub manoeuvres:         [usize; 4],
}
