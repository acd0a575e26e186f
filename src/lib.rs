//! Route Viz: animated playback of graph algorithm results over a directed
//! route map. The backend computes the paths; this crate owns the layout,
//! the mode-dependent edge labels, and the step-by-step highlight playback.

pub mod backend;
pub mod core;
pub mod graph;
pub mod platform;
