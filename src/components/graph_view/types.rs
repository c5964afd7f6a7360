use std::collections::HashMap;

use glam::DVec2;

/// Identifier of a film record as handed out by the catalog API.
pub type FilmId = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct Film {
	pub id: FilmId,
	pub title: String,
	pub rating: f64,
	pub genres: Vec<String>,
	pub directors: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Film,
	Genre,
	Director,
}

pub const FILM_BASE_RADIUS: f64 = 5.0;
pub const FILM_RATING_SCALE: f64 = 0.8;
pub const GENRE_RADIUS: f64 = 8.0;
pub const DIRECTOR_RADIUS: f64 = 7.0;

impl NodeKind {
	pub fn prefix(self) -> &'static str {
		match self {
			NodeKind::Film => "f",
			NodeKind::Genre => "g",
			NodeKind::Director => "d",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			NodeKind::Film => "#f5c518",
			NodeKind::Genre => "#4ea8de",
			NodeKind::Director => "#c77dff",
		}
	}

	/// Namespaced node id, so a genre and a director sharing a name never collide.
	pub fn node_id(self, key: &str) -> String {
		format!("{}-{}", self.prefix(), key)
	}
}

pub fn film_radius(rating: f64) -> f64 {
	FILM_BASE_RADIUS + rating * FILM_RATING_SCALE
}

#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub kind: NodeKind,
	pub label: String,
	pub position: DVec2,
	pub velocity: DVec2,
	pub radius: f64,
	pub color: &'static str,
	pub payload: Option<Film>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
}

/// Nodes in first-seen order, indexed by id, plus the ordered edge list.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	pub(crate) nodes: Vec<GraphNode>,
	pub(crate) edges: Vec<GraphEdge>,
	index: HashMap<String, usize>,
}

impl Graph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn nodes_mut(&mut self) -> &mut [GraphNode] {
		&mut self.nodes
	}

	pub fn edges(&self) -> &[GraphEdge] {
		&self.edges
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.node(id).is_some()
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.index_of(id).map(|idx| &self.nodes[idx])
	}

	pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
		self.index_of(id).map(|idx| &mut self.nodes[idx])
	}

	/// Inserts `node` unless a node with the same id is already present.
	/// Returns the index of the node that ends up holding that id.
	pub fn insert_node(&mut self, node: GraphNode) -> usize {
		if let Some(idx) = self.index_of(&node.id) {
			return idx;
		}
		let idx = self.nodes.len();
		self.index.insert(node.id.clone(), idx);
		self.nodes.push(node);
		idx
	}

	pub fn push_edge(&mut self, source: impl Into<String>, target: impl Into<String>) {
		self.edges.push(GraphEdge {
			source: source.into(),
			target: target.into(),
		});
	}

	/// Index pair for an edge, or `None` when either endpoint is missing.
	pub fn resolve_edge(&self, edge: &GraphEdge) -> Option<(usize, usize)> {
		Some((self.index_of(&edge.source)?, self.index_of(&edge.target)?))
	}

	/// Indices of every node sharing an edge with the node at `idx`.
	pub fn neighbors_of(&self, idx: usize) -> Vec<usize> {
		let mut out = Vec::new();
		for edge in &self.edges {
			let Some((src, tgt)) = self.resolve_edge(edge) else {
				continue;
			};
			if src == idx && !out.contains(&tgt) {
				out.push(tgt);
			} else if tgt == idx && !out.contains(&src) {
				out.push(src);
			}
		}
		out
	}
}
