//! Multi-objective route optimization.
//!
//! The optimizer works on one freshly built network at a time. A
//! bounded depth-first enumeration produces the candidate pool, a
//! label-setting search contributes the per-objective optimum, and a
//! diversity-enforcing selection pass picks one route per objective.

mod config;
mod enumerate;
mod label;
mod scoring;
mod select;

pub use config::SearchConfig;
pub use enumerate::enumerate_routes;
pub use label::search_best_route;
pub use scoring::{Objective, ScoringWeights, route_score, segment_score};
pub use select::{MultimodalOptimizer, RouteSet};
