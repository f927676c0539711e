//! A* over the shared graph.
//!
//! Identical in structure to the Dijkstra body, with two differences:
//! the frontier is ordered by the heuristic-augmented `estimate`
//! (`cost + h(dest, goal)`, computed fresh at relaxation time), and only
//! destinations typed exactly `Empty` are relaxed. The second rule means
//! a goal vertex typed `Goal` (rather than `Empty`) is never relaxed and
//! the search reports no path — a deliberate asymmetry with Dijkstra's
//! "any non-Block" rule, kept rather than fixed.

use std::collections::BinaryHeap;
use std::sync::RwLock;
use std::time::Duration;

use gridpath_core::graph::Edge;
use gridpath_core::{Graph, Heuristic, VertexType};
use rand::Rng;

use crate::context::Context;
use crate::engine::RunStatus;
use crate::frontier::FrontierEntry;

/// Run A* from `start` to `goal`, throttled by `delay` after each
/// edge-relaxation attempt.
pub(crate) fn run(
    graph: &RwLock<Graph>,
    ctx: &Context,
    delay: Duration,
    start: usize,
    goal: usize,
    heuristic: Heuristic,
    rng: &mut impl Rng,
) -> RunStatus {
    let goal_pos;
    {
        let mut g = graph.write().expect("graph lock poisoned");
        g.clear_states();
        goal_pos = g.vertex(goal).pos;
        let s = g.vertex_mut(start);
        s.cost = 0.0;
        s.estimate = heuristic.estimate(s.pos, goal_pos, rng);
        s.in_frontier = true;
    }

    let mut open = BinaryHeap::new();
    open.push(FrontierEntry {
        idx: start,
        key: 0.0,
    });

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
                let dest_pos = g.vertex(e.to).pos;
                let dest = g.vertex_mut(e.to);
                if dest.kind == VertexType::Empty && newcost < dest.cost {
                    let estimate = newcost + heuristic.estimate(dest_pos, goal_pos, rng);
                    dest.cost = newcost;
                    dest.estimate = estimate;
                    dest.parent = Some(entry.idx);
                    dest.in_frontier = true;
                    open.push(FrontierEntry {
                        idx: e.to,
                        key: estimate,
                    });
                }
            }
            if ctx.sleep(delay) {
                return RunStatus::Cancelled;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reconstruct;
    use crate::{dijkstra, engine::RunStatus};
    use gridpath_core::Point;

    fn run_now(
        graph: &RwLock<Graph>,
        start: usize,
        goal: usize,
        heuristic: Heuristic,
    ) -> RunStatus {
        let mut rng = rand::rng();
        run(
            graph,
            &Context::new(),
            Duration::ZERO,
            start,
            goal,
            heuristic,
            &mut rng,
        )
    }

    fn walled_graph() -> (Graph, usize, usize) {
        let mut g = Graph::new(6);
        for &(x, y) in &[(2, 0), (2, 1), (2, 2), (2, 3), (4, 5), (4, 4), (4, 3)] {
            let i = g.idx(Point::new(x, y)).unwrap();
            g.vertex_mut(i).kind = VertexType::Block;
        }
        // Endpoints stay Empty so A* can relax the goal.
        let start = g.idx(Point::new(0, 0)).unwrap();
        let goal = g.idx(Point::new(5, 5)).unwrap();
        (g, start, goal)
    }

    #[test]
    fn admissible_heuristics_match_dijkstra_cost() {
        let (g, start, goal) = walled_graph();
        let graph = RwLock::new(g);
        assert!(matches!(
            dijkstra::run(&graph, &Context::new(), Duration::ZERO, start, goal),
            RunStatus::Found
        ));
        let reference = graph.read().unwrap().vertex(goal).cost;

        for h in [Heuristic::Euclidean, Heuristic::HalfEuclidean, Heuristic::Zero] {
            graph.write().unwrap().clear_states();
            assert!(matches!(run_now(&graph, start, goal, h), RunStatus::Found));
            assert_eq!(graph.read().unwrap().vertex(goal).cost, reference, "{h:?}");
        }
    }

    #[test]
    fn inadmissible_heuristic_terminates_with_connected_path() {
        let (g, start, goal) = walled_graph();
        let graph = RwLock::new(g);
        for h in [Heuristic::JitteredEuclidean, Heuristic::Random] {
            graph.write().unwrap().clear_states();
            let status = run_now(&graph, start, goal, h);
            // Termination is the property; optimality is not promised.
            let RunStatus::Found = status else {
                panic!("{h:?}: expected a path on a connected layout");
            };
            let g = graph.read().unwrap();
            let path = reconstruct(&g, goal);
            assert_eq!(path[0], Point::new(5, 5));
            assert_eq!(*path.last().unwrap(), Point::new(0, 0));
            for pair in path.windows(2) {
                // Consecutive path vertices are cardinal neighbors.
                let d = pair[0] - pair[1];
                assert_eq!(d.x.abs() + d.y.abs(), 1);
            }
            for p in &path {
                assert_ne!(g.vertex(g.idx(*p).unwrap()).kind, VertexType::Block);
            }
        }
    }

    #[test]
    fn goal_typed_goal_is_never_relaxed() {
        // The Empty-only relaxation rule strands a goal vertex that is
        // typed Goal: Dijkstra reaches it, A* does not.
        let mut g = Graph::new(4);
        let start = g.idx(Point::new(0, 0)).unwrap();
        let goal = g.idx(Point::new(3, 3)).unwrap();
        g.vertex_mut(start).kind = VertexType::Start;
        g.vertex_mut(goal).kind = VertexType::Goal;
        let graph = RwLock::new(g);

        assert!(matches!(
            run_now(&graph, start, goal, Heuristic::Euclidean),
            RunStatus::NoPath
        ));

        graph.write().unwrap().clear_states();
        assert!(matches!(
            dijkstra::run(&graph, &Context::new(), Duration::ZERO, start, goal),
            RunStatus::Found
        ));
    }

    #[test]
    fn start_typed_start_still_expands() {
        // Start's own type is irrelevant: its Empty neighbors are relaxed.
        let mut g = Graph::new(3);
        let start = g.idx(Point::new(0, 0)).unwrap();
        let goal = g.idx(Point::new(2, 2)).unwrap();
        g.vertex_mut(start).kind = VertexType::Start;
        let graph = RwLock::new(g);
        assert!(matches!(
            run_now(&graph, start, goal, Heuristic::Euclidean),
            RunStatus::Found
        ));
        assert_eq!(graph.read().unwrap().vertex(goal).cost, 4.0);
    }
}
