//! Dijkstra's algorithm over the shared graph.

use std::collections::BinaryHeap;
use std::sync::RwLock;
use std::time::Duration;

use gridpath_core::graph::Edge;
use gridpath_core::{Graph, VertexType};

use crate::context::Context;
use crate::engine::RunStatus;
use crate::frontier::FrontierEntry;

/// Run Dijkstra from `start` to `goal`, throttled by `delay` after each
/// edge-relaxation attempt.
///
/// The frontier is ordered by accumulated cost; any non-`Block`
/// destination may be relaxed. The graph lock is held only for short
/// bookkeeping sections, never across a sleep, so a concurrent reader
/// observes the search frame-by-frame.
pub(crate) fn run(
    graph: &RwLock<Graph>,
    ctx: &Context,
    delay: Duration,
    start: usize,
    goal: usize,
) -> RunStatus {
    {
        let mut g = graph.write().expect("graph lock poisoned");
        g.clear_states();
        let s = g.vertex_mut(start);
        s.cost = 0.0;
        s.in_frontier = true;
    }

    let mut open = BinaryHeap::new();
    open.push(FrontierEntry {
        idx: start,
        key: 0.0,
    });

    // Scratch buffer so the lock is not held while sleeping between edges.
    let mut edges: Vec<Edge> = Vec::with_capacity(4);

    loop {
        if ctx.is_done() {
            return RunStatus::Cancelled;
        }
        let Some(entry) = open.pop() else {
            return RunStatus::NoPath;
        };

        let current_cost;
        {
            let mut g = graph.write().expect("graph lock poisoned");
            let v = g.vertex_mut(entry.idx);
            v.in_frontier = false;
            if entry.idx == goal {
                return RunStatus::Found;
            }
            if v.visited {
                // Stale frontier entry (lazy deletion).
                continue;
            }
            v.visited = true;
            current_cost = v.cost;
            edges.clear();
            edges.extend_from_slice(v.edges());
        }

        for e in &edges {
            if ctx.is_done() {
                return RunStatus::Cancelled;
            }
            {
                let mut g = graph.write().expect("graph lock poisoned");
                let newcost = current_cost + e.cost;
                let dest = g.vertex_mut(e.to);
                if dest.kind != VertexType::Block && newcost < dest.cost {
                    dest.cost = newcost;
                    dest.parent = Some(entry.idx);
                    dest.in_frontier = true;
                    open.push(FrontierEntry {
                        idx: e.to,
                        key: newcost,
                    });
                }
            }
            if ctx.sleep(delay) {
                return RunStatus::Cancelled;
            }
        }
    }
}
