//! Ringroute Core: circle network model, graph builder, and route search

pub mod model;
pub mod error;
pub mod graph;
pub mod builder;
pub mod pathfinder;



pub use model::{Stop, Circle, Intersection, Network, Leg, LegKind, Route, RIDE_COST, TRANSFER_COST};
pub use error::{NetworkError, RouteError};
pub use graph::TransitGraph;
pub use builder::build_graph;
pub use pathfinder::{find_route, plan_route};
