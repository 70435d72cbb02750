//! Multimodal freight route planner.
//!
//! Recommends freight routes between two cities across road, rail, air
//! and sea, trading off cost, time, emissions and reliability. Each
//! query builds a small transportation network from scratch, searches
//! it for candidate routes, and ranks them under four objectives.

pub mod adjust;
pub mod cache;
pub mod directory;
pub mod distance;
pub mod domain;
pub mod factory;
pub mod network;
pub mod optimizer;
pub mod scenario;
pub mod web;
