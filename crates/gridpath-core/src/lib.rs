//! **gridpath-core** — grid graph and heuristics for observable
//! pathfinding.
//!
//! This crate provides the data model searched by `gridpath-engine`:
//!
//! - [`Point`] — integer grid coordinates.
//! - [`Graph`] — an n×n grid of typed [`Vertex`] cells owning their
//!   weighted outgoing [`Edge`]s, plus the transient per-run search state.
//! - [`Heuristic`] — the remaining-cost estimate strategies used by A*.
//!
//! The graph is frozen for the duration of one search run: the editor
//! writes vertex types between runs, the engine mutates only the
//! transient search fields during a run, and bulk resets
//! ([`Graph::reset_to_size`], [`Graph::clear`], [`Graph::clear_states`])
//! are the only other mutation points.

pub mod geom;
pub mod graph;
pub mod heuristic;

pub use geom::Point;
pub use graph::{Edge, Graph, UNREACHABLE, Vertex, VertexType};
pub use heuristic::Heuristic;
