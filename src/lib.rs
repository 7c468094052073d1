//! Prism - model routing pipeline for LLM request dispatch
//!
//! This library selects which backend language model should service a
//! request. Strategies are evaluated in priority order; each either produces
//! a final [`routing::RoutingDecision`] or declines and defers to the next.

pub mod client;
pub mod config;
pub mod logging;
pub mod models;
pub mod routing;
