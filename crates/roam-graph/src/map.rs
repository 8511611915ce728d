//! Road map representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the index range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_len`) are sorted by source
//! node and indexed by `EdgeId`.  Iteration over a node's outgoing edges is
//! therefore a contiguous memory scan — ideal for the planner's inner loop.
//!
//! # Coordinates and units
//!
//! Node positions are [`MapPoint`]s in normalized map units (`[0, 1]` per
//! axis); edge lengths and every distance the map reports are in the same
//! units.  [`RoadMap::metric_scale`] converts map units to meters.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps an `(x, y)` map position to the nearest
//! `NodeId`.  Used by the planner to resolve raw start/end coordinates to
//! graph nodes.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use roam_core::{EdgeId, MapPoint, NodeId};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in map units.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RoadMap ───────────────────────────────────────────────────────────────────

/// Directed road graph in CSR format plus a spatial index for node lookup.
///
/// All graph arrays are `pub` for direct indexed access on hot paths.  The
/// map is immutable after [`RoadMapBuilder::build`]; searches keep their own
/// per-call state and never write into it, so one map can serve any number
/// of concurrent planners.  Do not construct directly; use
/// [`RoadMapBuilder`].
pub struct RoadMap {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Position of each node in map units.  Indexed by `NodeId`.
    pub node_pos: Vec<MapPoint>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.  Redundant with CSR but required for
    /// efficient path reconstruction (trace a parent edge back to source).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Length of each edge in map units.  Used as the search cost.
    ///
    /// For the A* heuristic to stay admissible a length must be at least
    /// the straight-line distance between the edge's endpoints; lengths
    /// derived from node positions ([`RoadMapBuilder::add_link`], the OSM
    /// loader) satisfy this by construction.
    pub edge_len: Vec<f32>,

    // ── Metric conversion ─────────────────────────────────────────────────
    /// Meters per map unit.
    metric_scale: f32,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl RoadMap {
    /// Construct an empty map with no nodes or edges.
    ///
    /// Any nearest-node query against an empty map returns `None`.
    pub fn empty() -> Self {
        RoadMapBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Meters per map unit — multiply a raw map-unit distance by this to
    /// get meters.
    pub fn metric_scale(&self) -> f32 {
        self.metric_scale
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Straight-line distance between two nodes in map units.
    #[inline]
    pub fn node_distance(&self, a: NodeId, b: NodeId) -> f32 {
        self.node_pos[a.index()].distance(self.node_pos[b.index()])
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the nearest road node to `pos`.
    ///
    /// Returns `None` only if the map has no nodes.
    pub fn nearest_node(&self, pos: MapPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// Return up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: MapPoint, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── RoadMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`RoadMap`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order.  `build()`
/// sorts edges by source node, constructs the CSR arrays, and bulk-loads the
/// R-tree.
///
/// # Example
///
/// ```
/// use roam_core::MapPoint;
/// use roam_graph::RoadMapBuilder;
///
/// let mut b = RoadMapBuilder::new();
/// let a = b.add_node(MapPoint::new(0.1, 0.1));
/// let c = b.add_node(MapPoint::new(0.4, 0.5));
/// b.add_link(a, c); // bidirectional, length from geometry
/// let map = b.build();
/// assert_eq!(map.node_count(), 2);
/// assert_eq!(map.edge_count(), 2); // bidirectional
/// ```
pub struct RoadMapBuilder {
    nodes: Vec<MapPoint>,
    raw_edges: Vec<RawEdge>,
    metric_scale: f32,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    len: f32,
}

impl RoadMapBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            raw_edges: Vec::new(),
            metric_scale: 1.0,
        }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading from OSM.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
            metric_scale: 1.0,
        }
    }

    /// Set the meters-per-map-unit conversion factor (default `1.0`).
    pub fn metric_scale(&mut self, scale: f32) -> &mut Self {
        self.metric_scale = scale;
        self
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: MapPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge from `from` to `to` with an explicit length
    /// in map units.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, len: f32) {
        self.raw_edges.push(RawEdge { from, to, len });
    }

    /// Add edges in **both directions** with an explicit length in map units
    /// (the common case for a two-way road segment).
    pub fn add_road(&mut self, a: NodeId, b: NodeId, len: f32) {
        self.add_directed_edge(a, b, len);
        self.add_directed_edge(b, a, len);
    }

    /// Add a two-way segment whose length is the straight-line distance
    /// between the endpoints' positions.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) {
        let len = self.nodes[a.index()].distance(self.nodes[b.index()]);
        self.add_road(a, b, len);
    }

    /// Look up the position of a node added earlier (used by the OSM loader
    /// to compute edge lengths between adjacent way nodes).
    pub fn node_pos(&self, id: NodeId) -> MapPoint {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadMap`].
    ///
    /// Time complexity: O(E log E) for edge sort + O(N log N) for R-tree bulk
    /// load, where N = nodes, E = edges.
    pub fn build(self) -> RoadMap {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_len: Vec<f32> = raw.iter().map(|e| e.len).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.x, pos.y],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        log::debug!("road map built: {node_count} nodes, {edge_count} edges");

        RoadMap {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_len,
            metric_scale: self.metric_scale,
            spatial_idx,
        }
    }
}

impl Default for RoadMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
