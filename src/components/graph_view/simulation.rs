//! Per-frame force layout step.
//!
//! Constants are tuned for a ~60 Hz frame callback and are not scaled by
//! elapsed time, so the layout runs faster on high refresh displays.

use glam::DVec2;

use super::surface::Viewport;
use super::types::Graph;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
	pub center_force: f64,
	pub repulsion: f64,
	pub repulsion_cutoff: f64,
	pub spring_length: f64,
	pub spring_stiffness: f64,
	pub max_velocity: f64,
	pub damping: f64,
	pub hover_damping: f64,
	pub boundary_padding: f64,
}

impl Default for SimulationParams {
	fn default() -> Self {
		Self {
			center_force: 0.03,
			repulsion: 1500.0,
			repulsion_cutoff: 300.0,
			spring_length: 100.0,
			spring_stiffness: 0.08,
			max_velocity: 15.0,
			damping: 0.85,
			hover_damping: 0.1,
			boundary_padding: 5.0,
		}
	}
}

/// Node indices the step treats specially.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pinned {
	pub dragged: Option<usize>,
	pub hovered: Option<usize>,
}

impl Pinned {
	fn is_dragged(&self, idx: usize) -> bool {
		self.dragged == Some(idx)
	}
}

/// Advances every node by one step. The dragged node is left untouched.
pub fn step(graph: &mut Graph, pinned: Pinned, viewport: Viewport, params: &SimulationParams) {
	apply_centering(graph, pinned, viewport.center(), params);
	apply_repulsion(graph, pinned, params);
	apply_springs(graph, pinned, params);
	integrate(graph, pinned, params);
	resolve_boundaries(graph, pinned, viewport, params);
}

pub fn apply_centering(graph: &mut Graph, pinned: Pinned, center: DVec2, params: &SimulationParams) {
	for (idx, node) in graph.nodes.iter_mut().enumerate() {
		if pinned.is_dragged(idx) {
			continue;
		}
		node.velocity += (center - node.position) * params.center_force;
	}
}

pub fn apply_repulsion(graph: &mut Graph, pinned: Pinned, params: &SimulationParams) {
	let nodes = &mut graph.nodes;
	for i in 0..nodes.len() {
		for j in (i + 1)..nodes.len() {
			let delta = nodes[i].position - nodes[j].position;
			let distance = delta.length().max(1.0);
			if distance >= params.repulsion_cutoff {
				continue;
			}
			let impulse = delta / distance * (params.repulsion / (distance * distance));
			if !pinned.is_dragged(i) {
				nodes[i].velocity += impulse;
			}
			if !pinned.is_dragged(j) {
				nodes[j].velocity -= impulse;
			}
		}
	}
}

pub fn apply_springs(graph: &mut Graph, pinned: Pinned, params: &SimulationParams) {
	for e in 0..graph.edges.len() {
		let Some((src, tgt)) = graph.resolve_edge(&graph.edges[e]) else {
			continue;
		};
		if src == tgt {
			continue;
		}
		let delta = graph.nodes[tgt].position - graph.nodes[src].position;
		let distance = delta.length().max(1.0);
		let impulse = delta / distance * ((distance - params.spring_length) * params.spring_stiffness);
		if !pinned.is_dragged(src) {
			graph.nodes[src].velocity += impulse;
		}
		if !pinned.is_dragged(tgt) {
			graph.nodes[tgt].velocity -= impulse;
		}
	}
}

pub fn integrate(graph: &mut Graph, pinned: Pinned, params: &SimulationParams) {
	for (idx, node) in graph.nodes.iter_mut().enumerate() {
		if pinned.is_dragged(idx) {
			node.velocity = DVec2::ZERO;
			continue;
		}
		let speed = node.velocity.length();
		if speed > params.max_velocity {
			node.velocity *= params.max_velocity / speed;
		}
		node.velocity *= params.damping;
		// Near-freeze under the cursor so the node is easy to click.
		if pinned.hovered == Some(idx) {
			node.velocity *= params.hover_damping;
		}
		node.position += node.velocity;
	}
}

/// Clamps nodes into the viewport and reflects the offending velocity component.
pub fn resolve_boundaries(
	graph: &mut Graph,
	pinned: Pinned,
	viewport: Viewport,
	params: &SimulationParams,
) {
	for (idx, node) in graph.nodes.iter_mut().enumerate() {
		if pinned.is_dragged(idx) {
			continue;
		}
		let margin = node.radius + params.boundary_padding;
		let max = DVec2::new(viewport.width - margin, viewport.height - margin);
		if node.position.x < margin {
			node.position.x = margin;
			node.velocity.x = -node.velocity.x;
		} else if node.position.x > max.x {
			node.position.x = max.x;
			node.velocity.x = -node.velocity.x;
		}
		if node.position.y < margin {
			node.position.y = margin;
			node.velocity.y = -node.velocity.y;
		} else if node.position.y > max.y {
			node.position.y = max.y;
			node.velocity.y = -node.velocity.y;
		}
	}
}
