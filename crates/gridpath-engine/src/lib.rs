//! **gridpath-engine** — a cancellable, speed-throttled graph traversal
//! that runs concurrently with a live display.
//!
//! One [`Traversal`] executes one search — Dijkstra or A* — over a shared
//! [`Graph`](gridpath_core::Graph), mutating the graph's transient
//! per-vertex state as it explores so a concurrent presentation loop can
//! render intermediate frontier/visited state. The run is throttled by a
//! per-edge-relaxation delay and cancelled cooperatively through the
//! handle returned by [`Traversal::start`]:
//!
//! - [`Traversal`] — a configured, not-yet-started run (consumed by
//!   `start()`; one instance, one run).
//! - [`Handle`] — the live run: [`stop`](Handle::stop),
//!   [`is_finished`](Handle::is_finished), [`join`](Handle::join).
//! - [`Outcome`] — the terminal state: `Found` (goal→start path),
//!   `NoPath`, or `Cancelled`.
//! - [`PathSink`] — the presentation adapter boundary the final path is
//!   posted to.
//!
//! Both algorithms use a lazy-deletion frontier: a vertex may be pushed
//! several times and stale entries are skipped via its `visited` flag,
//! so intermediate frontier contents match what an observer of the
//! original visualization would see.
//!
//! A* deliberately relaxes only destinations typed `Empty` (Dijkstra
//! relaxes any non-`Block`), which means a goal vertex typed `Goal` is
//! never reached by A*. This asymmetry is part of the reproduced
//! behaviour; see [`TraversalType`].

mod astar;
mod dijkstra;
mod frontier;

pub mod config;
pub mod context;
pub mod engine;
pub mod pacer;
pub mod sink;

pub use config::{MAX_DELAY_MS, SearchConfig, display_sizes};
pub use context::Context;
pub use engine::{Handle, Outcome, Traversal, TraversalType};
pub use pacer::{FRAMES_PER_SECOND, FramePacer};
pub use sink::{LatestPath, PathSink};
