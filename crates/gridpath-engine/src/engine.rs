//! Engine lifecycle: [`Traversal`] → [`Handle`] → [`Outcome`].
//!
//! One engine instance runs exactly one search. [`Traversal::start`]
//! consumes the instance and moves the run onto its own thread, so the
//! `Idle → Running → terminal` state machine is carried by the types
//! themselves: an idle `Traversal` cannot be observed mid-run, a
//! [`Handle`] cannot be restarted, and the terminal state is the value
//! returned by [`Handle::join`].

use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use gridpath_core::{Graph, Heuristic, Point};
use log::debug;

use crate::config::SearchConfig;
use crate::context::Context;
use crate::sink::PathSink;
use crate::{astar, dijkstra};

/// Which search algorithm a run executes.
///
/// `Astar` relaxes only `Empty`-typed destinations, so a goal vertex
/// typed `Goal` is unreachable under it (see the crate docs); `Dijkstra`
/// relaxes any non-`Block` destination.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalType {
    #[default]
    Dijkstra,
    Astar,
}

/// Internal algorithm result, before path reconstruction.
pub(crate) enum RunStatus {
    Found,
    NoPath,
    Cancelled,
}

/// Terminal state of one run.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A shortest path was found; vertices in goal→start order, both
    /// endpoints included.
    Found(Vec<Point>),
    /// The frontier emptied before the goal was reached (or a start/goal
    /// endpoint was absent). A normal outcome, not an error.
    NoPath,
    /// A cooperative stop was honoured before completion. No path was
    /// reconstructed or posted.
    Cancelled,
}

impl Outcome {
    /// Whether the run succeeded.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Follow `parent` back-references from the goal, producing the path in
/// goal→start order. Only meaningful after a successful run.
pub(crate) fn reconstruct(g: &Graph, goal: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(i) = cur {
        let v = g.vertex(i);
        path.push(v.pos);
        cur = v.parent;
    }
    path
}

/// A configured, not-yet-started search run.
///
/// `start` and `goal` are resolved by the caller from the graph's current
/// markers; either being absent yields an immediate [`Outcome::NoPath`]
/// with no traversal performed. The graph must not be resized or edited
/// while the run is live — callers serialize run lifetimes (stop before
/// start).
pub struct Traversal {
    graph: Arc<RwLock<Graph>>,
    algorithm: TraversalType,
    start: Option<usize>,
    goal: Option<usize>,
    delay: Duration,
    heuristic: Heuristic,
    sink: Arc<dyn PathSink>,
}

impl Traversal {
    /// Configure a run over `graph`.
    pub fn new(
        graph: Arc<RwLock<Graph>>,
        config: &SearchConfig,
        start: Option<usize>,
        goal: Option<usize>,
        sink: Arc<dyn PathSink>,
    ) -> Self {
        Self {
            graph,
            algorithm: config.algorithm,
            start,
            goal,
            delay: config.delay(),
            heuristic: config.heuristic,
            sink,
        }
    }

    /// Begin the run on its own thread, returning the handle used to
    /// stop it and to collect the terminal [`Outcome`].
    ///
    /// On success the goal→start path is posted to the sink exactly once,
    /// unless a stop was requested after completion, in which case the
    /// post is skipped (nothing is drawn).
    pub fn start(self) -> Handle {
        let ctx = Context::new();
        let run_ctx = ctx.clone();
        let thread = thread::Builder::new()
            .name("gridpath-traversal".into())
            .spawn(move || self.run(&run_ctx))
            .expect("failed to spawn traversal thread");
        Handle { ctx, thread }
    }

    fn run(self, ctx: &Context) -> Outcome {
        debug!(
            "starting {:?} run (delay {:?}, heuristic {:?})",
            self.algorithm, self.delay, self.heuristic
        );
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            debug!("missing start or goal marker, no traversal");
            return Outcome::NoPath;
        };

        let status = match self.algorithm {
            TraversalType::Dijkstra => {
                dijkstra::run(&self.graph, ctx, self.delay, start, goal)
            }
            TraversalType::Astar => {
                let mut rng = rand::rng();
                astar::run(
                    &self.graph,
                    ctx,
                    self.delay,
                    start,
                    goal,
                    self.heuristic,
                    &mut rng,
                )
            }
        };

        match status {
            RunStatus::Found => {
                let path = {
                    let g = self.graph.read().expect("graph lock poisoned");
                    reconstruct(&g, goal)
                };
                if ctx.is_done() {
                    debug!("stop requested after completion, path not posted");
                } else {
                    self.sink.set_path(Some(path.clone()));
                }
                debug!("run succeeded, path of {} vertices", path.len());
                Outcome::Found(path)
            }
            RunStatus::NoPath => {
                debug!("frontier exhausted, goal unreachable");
                Outcome::NoPath
            }
            RunStatus::Cancelled => {
                debug!("run cancelled");
                Outcome::Cancelled
            }
        }
    }
}

/// A live run. Dropping the handle detaches the run (it finishes on its
/// own); call [`stop`](Handle::stop) first to abort it.
pub struct Handle {
    ctx: Context,
    thread: JoinHandle<Outcome>,
}

impl Handle {
    /// Request a cooperative stop. The run reaches a terminal state
    /// within at most one relaxation-delay interval.
    pub fn stop(&self) {
        self.ctx.cancel();
    }

    /// Whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.ctx.is_done()
    }

    /// Whether the run has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for and return the terminal state of the run.
    pub fn join(self) -> Outcome {
        self.thread.join().expect("traversal thread panicked")
    }
}
