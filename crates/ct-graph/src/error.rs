//! Graph-subsystem error type.

use thiserror::Error;

use ct_core::SegmentId;

/// Errors produced by `ct-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// No strongly connected component with at least two nodes exists, so no
    /// closed route can be formed.
    #[error(
        "graph has no usable strongly connected component \
         ({nodes} nodes, largest component {largest_component})"
    )]
    DisconnectedInput { nodes: usize, largest_component: usize },

    #[error("node {0} not found in graph")]
    NodeNotFound(SegmentId),

    #[error("no path from {from} to {to}")]
    NoPath { from: SegmentId, to: SegmentId },
}

pub type GraphResult<T> = Result<T, GraphError>;
