use thiserror::Error;

use ct_city::CityError;
use ct_core::CoreError;
use ct_graph::GraphError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error(
        "balancing did not converge after {passes} passes \
         ({excess_in} nodes with surplus in-degree, {excess_out} with surplus out-degree)"
    )]
    BalancingNonConvergence {
        passes:     usize,
        excess_in:  usize,
        excess_out: usize,
    },

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("city error: {0}")]
    City(#[from] CityError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;
