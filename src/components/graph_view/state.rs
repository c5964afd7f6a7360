use glam::DVec2;
use log::debug;

use super::interaction::{self, Interaction};
use super::simulation::{self, SimulationParams};
use super::surface::Viewport;
use super::types::{FilmId, Graph};

/// Everything one mounted graph view mutates between frames.
#[derive(Clone, Debug, Default)]
pub struct GraphViewState {
	pub graph: Graph,
	pub interaction: Interaction,
	pub viewport: Viewport,
	pub params: SimulationParams,
}

impl GraphViewState {
	pub fn new(params: SimulationParams) -> Self {
		Self {
			params,
			..Self::default()
		}
	}

	/// Viewport to place fresh nodes in, once layout has measured one.
	pub fn known_viewport(&self) -> Option<Viewport> {
		(!self.viewport.is_empty()).then_some(self.viewport)
	}

	/// One simulation step. No-op until the surface has a size.
	pub fn tick(&mut self) {
		if self.viewport.is_empty() {
			return;
		}
		let pinned = self.interaction.pinned(&self.graph);
		simulation::step(&mut self.graph, pinned, self.viewport, &self.params);
	}

	/// Swaps in a freshly built graph in a single assignment.
	pub fn replace_graph(&mut self, graph: Graph) {
		debug!(
			"replacing graph: {} -> {} nodes",
			self.graph.len(),
			graph.len()
		);
		self.graph = graph;
		self.interaction.retain_known(&self.graph);
	}

	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
	}

	pub fn pointer_down(&mut self, point: DVec2) {
		self.interaction.pointer_down(&mut self.graph, point);
	}

	pub fn pointer_move(&mut self, point: DVec2) {
		self.interaction.pointer_move(&mut self.graph, point);
	}

	pub fn pointer_up(&mut self) {
		self.interaction.pointer_up();
	}

	pub fn pointer_leave(&mut self) {
		self.interaction.pointer_leave();
	}

	pub fn double_click(&self, point: DVec2) -> Option<FilmId> {
		interaction::film_at(&self.graph, point)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::graph_view::builder::build_graph;
	use crate::components::graph_view::render::edge_segments;
	use crate::components::graph_view::types::Film;

	fn film(id: u64, genre: &str, director: &str) -> Film {
		Film {
			id,
			title: format!("Film {id}"),
			rating: 7.0,
			genres: vec![genre.into()],
			directors: vec![director.into()],
		}
	}

	#[test]
	fn tick_waits_for_a_viewport() {
		let mut rng = SmallRng::seed_from_u64(11);
		let mut state = GraphViewState::default();
		state.replace_graph(build_graph(&[film(1, "Drama", "X")], None, &mut rng));
		let before: Vec<_> = state.graph.nodes().iter().map(|n| n.position).collect();
		state.tick();
		let after: Vec<_> = state.graph.nodes().iter().map(|n| n.position).collect();
		assert_eq!(before, after);

		state.resize(Viewport::new(800.0, 600.0));
		state.tick();
		assert!(state.graph.nodes().iter().zip(&before).any(|(n, p)| n.position != *p));
	}

	#[test]
	fn resize_keeps_simulation_state() {
		let mut rng = SmallRng::seed_from_u64(11);
		let mut state = GraphViewState::default();
		state.resize(Viewport::new(800.0, 600.0));
		state.replace_graph(build_graph(&[film(1, "Drama", "X")], state.known_viewport(), &mut rng));
		state.tick();
		let snapshot: Vec<_> = state
			.graph
			.nodes()
			.iter()
			.map(|n| (n.position, n.velocity))
			.collect();
		state.resize(Viewport::new(1024.0, 768.0));
		let now: Vec<_> = state
			.graph
			.nodes()
			.iter()
			.map(|n| (n.position, n.velocity))
			.collect();
		assert_eq!(snapshot, now);
	}

	#[test]
	fn rebuild_mid_loop_never_leaves_dangling_edges() {
		let mut rng = SmallRng::seed_from_u64(5);
		let mut state = GraphViewState::default();
		state.resize(Viewport::new(640.0, 480.0));
		let catalogs = [
			vec![film(1, "Drama", "X"), film(2, "Crime", "Y")],
			vec![film(3, "Horror", "Z")],
			vec![],
			vec![film(1, "Drama", "X"), film(4, "Drama", "W"), film(5, "Noir", "X")],
		];
		for films in catalogs.iter().cycle().take(12) {
			state.tick();
			let graph = build_graph(films, state.known_viewport(), &mut rng);
			state.replace_graph(graph);
			for edge in state.graph.edges() {
				assert!(state.graph.contains(&edge.source));
				assert!(state.graph.contains(&edge.target));
			}
			assert_eq!(edge_segments(&state.graph).len(), state.graph.edges().len());
		}
	}

	#[test]
	fn rebuild_forgets_interaction_on_vanished_nodes() {
		let mut rng = SmallRng::seed_from_u64(2);
		let mut state = GraphViewState::default();
		state.resize(Viewport::new(640.0, 480.0));
		state.replace_graph(build_graph(&[film(1, "Drama", "X")], state.known_viewport(), &mut rng));
		for (i, node) in state.graph.nodes_mut().iter_mut().enumerate() {
			node.position = DVec2::new(100.0 + 150.0 * i as f64, 240.0);
		}
		let at = state.graph.node("d-X").map(|n| n.position).unwrap_or_default();
		state.pointer_down(at);
		state.pointer_move(at);
		assert_eq!(state.interaction.dragged.as_deref(), Some("d-X"));

		state.replace_graph(build_graph(&[film(2, "Drama", "Y")], state.known_viewport(), &mut rng));
		assert_eq!(state.interaction.dragged, None);
		state.tick();
	}
}
