//! The grid graph: [`Vertex`], [`Edge`], [`Graph`].
//!
//! Vertices are stored row-major in a flat `Vec` and own their outgoing
//! edges. Edges reference their destination by index, never by pointer, so
//! the graph has a single ownership root. The transient search fields on
//! each vertex (`cost`, `estimate`, `visited`, `in_frontier`, `parent`)
//! belong to the currently running search; everything else is the
//! obstacle layout edited between runs.

use crate::geom::Point;

/// Sentinel cost meaning "not yet reached by the current search".
pub const UNREACHABLE: f64 = f64::INFINITY;

/// What a grid cell holds. `Start` and `Goal` are markers over otherwise
/// traversable cells; only `Block` is impassable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexType {
    #[default]
    Empty,
    Block,
    Start,
    Goal,
}

/// A directed, weighted edge owned by its source vertex.
///
/// `to` is an index into the owning graph's vertex store. `cost` is
/// non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to: usize,
    pub cost: f64,
}

/// One grid cell plus its per-run search state.
///
/// The search fields are mutated only by the running engine and reset in
/// bulk by [`Graph::clear_states`]; readers (the presentation layer)
/// treat them as advisory.
#[derive(Clone, Debug)]
pub struct Vertex {
    /// Grid position (fixed for the lifetime of the topology).
    pub pos: Point,
    /// Cell type, written by the editor between runs.
    pub kind: VertexType,
    /// Best known accumulated cost from the start.
    pub cost: f64,
    /// Heuristic-augmented priority (A* only).
    pub estimate: f64,
    /// Finalized by the search (popped with minimum cost).
    pub visited: bool,
    /// Currently sitting in the search frontier.
    pub in_frontier: bool,
    /// Back-pointer for path reconstruction: index of the vertex this one
    /// was reached from, or `None` for the start (and unreached vertices).
    pub parent: Option<usize>,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            kind: VertexType::Empty,
            cost: UNREACHABLE,
            estimate: 0.0,
            visited: false,
            in_frontier: false,
            parent: None,
            edges: Vec::with_capacity(4),
        }
    }

    /// Outgoing edges of this vertex.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn reset_state(&mut self) {
        self.cost = UNREACHABLE;
        self.estimate = 0.0;
        self.visited = false;
        self.in_frontier = false;
        self.parent = None;
    }
}

/// An n×n grid graph with 4-neighbor (cardinal) connectivity.
///
/// Edge costs are the Euclidean distance between endpoints, which for
/// cardinal neighbors is always 1.0. Out-of-range vertex indices are a
/// contract violation and panic.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    side: i32,
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Create an n×n graph of `Empty` vertices.
    pub fn new(side: i32) -> Self {
        let mut g = Self::default();
        g.reset_to_size(side);
        g
    }

    /// Rebuild as an n×n grid: all vertices `Empty`, all search state
    /// cleared, the full cardinal edge set recomputed.
    ///
    /// Invalidates any in-flight search; callers must stop a running
    /// engine first.
    pub fn reset_to_size(&mut self, side: i32) {
        let side = side.max(0);
        self.side = side;
        let len = (side as usize) * (side as usize);
        self.vertices.clear();
        self.vertices.reserve(len);
        for i in 0..len {
            let pos = Point::new((i % side as usize) as i32, (i / side as usize) as i32);
            self.vertices.push(Vertex::new(pos));
        }
        for i in 0..len {
            let pos = self.vertices[i].pos;
            for npos in pos.neighbors_4() {
                if let Some(ni) = self.idx(npos) {
                    let cost = pos.distance_to(npos);
                    self.vertices[i].edges.push(Edge { to: ni, cost });
                }
            }
        }
    }

    /// Reset every vertex type to `Empty` (removing walls and markers)
    /// without touching the topology.
    pub fn clear(&mut self) {
        for v in &mut self.vertices {
            v.kind = VertexType::Empty;
        }
    }

    /// Reset only the transient search fields, preserving vertex types.
    /// Used to re-run a search on the same obstacle layout.
    pub fn clear_states(&mut self) {
        for v in &mut self.vertices {
            v.reset_state();
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Convert a point to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.side || p.y < 0 || p.y >= self.side {
            return None;
        }
        Some((p.y as usize) * (self.side as usize) + p.x as usize)
    }

    /// The vertex at `idx`.
    #[inline]
    pub fn vertex(&self, idx: usize) -> &Vertex {
        &self.vertices[idx]
    }

    /// Mutable access to the vertex at `idx`. Reserved for the editor
    /// (types, between runs) and the running engine (search state).
    #[inline]
    pub fn vertex_mut(&mut self, idx: usize) -> &mut Vertex {
        &mut self.vertices[idx]
    }

    /// All vertices in row-major order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Index of the vertex currently marked `Start`, if any.
    pub fn start_index(&self) -> Option<usize> {
        self.vertices.iter().position(|v| v.kind == VertexType::Start)
    }

    /// Index of the vertex currently marked `Goal`, if any.
    pub fn goal_index(&self) -> Option<usize> {
        self.vertices.iter().position(|v| v.kind == VertexType::Goal)
    }
}
