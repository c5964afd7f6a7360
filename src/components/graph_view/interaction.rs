use glam::DVec2;

use super::simulation::Pinned;
use super::types::{FilmId, Graph, NodeKind};

/// Extra clickable margin around every node.
pub const HIT_PADDING: f64 = 10.0;

/// First node, in insertion order, whose padded disc contains `point`.
pub fn hit_test(graph: &Graph, point: DVec2, padding: f64) -> Option<usize> {
	graph.nodes().iter().position(|node| {
		let reach = node.radius + padding;
		node.position.distance_squared(point) < reach * reach
	})
}

/// Film to open for a double click at `point`, if it landed on a film node.
pub fn film_at(graph: &Graph, point: DVec2) -> Option<FilmId> {
	let node = &graph.nodes()[hit_test(graph, point, HIT_PADDING)?];
	if node.kind != NodeKind::Film {
		return None;
	}
	node.payload.as_ref().map(|film| film.id)
}

/// Pointer-driven drag and hover state, keyed by node id so it can outlive a rebuild.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
	pub dragged: Option<String>,
	pub hovered: Option<String>,
}

impl Interaction {
	pub fn pointer_down(&mut self, graph: &mut Graph, point: DVec2) {
		let Some(idx) = hit_test(graph, point, HIT_PADDING) else {
			return;
		};
		let node = &mut graph.nodes_mut()[idx];
		node.velocity = DVec2::ZERO;
		self.dragged = Some(node.id.clone());
	}

	pub fn pointer_move(&mut self, graph: &mut Graph, point: DVec2) {
		if let Some(node) = self.dragged.as_deref().and_then(|id| graph.node_mut(id)) {
			node.position = point;
			node.velocity = DVec2::ZERO;
		}
		self.hovered = hit_test(graph, point, HIT_PADDING).map(|idx| graph.nodes()[idx].id.clone());
	}

	pub fn pointer_up(&mut self) {
		self.dragged = None;
	}

	pub fn pointer_leave(&mut self) {
		self.dragged = None;
		self.hovered = None;
	}

	/// Forgets ids that no longer exist in `graph`.
	pub fn retain_known(&mut self, graph: &Graph) {
		if self.dragged.as_deref().is_some_and(|id| !graph.contains(id)) {
			self.dragged = None;
		}
		if self.hovered.as_deref().is_some_and(|id| !graph.contains(id)) {
			self.hovered = None;
		}
	}

	pub fn pinned(&self, graph: &Graph) -> Pinned {
		Pinned {
			dragged: self.dragged.as_deref().and_then(|id| graph.index_of(id)),
			hovered: self.hovered.as_deref().and_then(|id| graph.index_of(id)),
		}
	}

	pub fn cursor(&self) -> &'static str {
		if self.dragged.is_some() {
			"grabbing"
		} else if self.hovered.is_some() {
			"pointer"
		} else {
			"grab"
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::graph_view::builder::build_graph;
	use crate::components::graph_view::types::Film;

	fn films() -> Vec<Film> {
		vec![
			Film {
				id: 1,
				title: "A".into(),
				rating: 8.0,
				genres: vec!["Drama".into()],
				directors: vec!["X".into()],
			},
			Film {
				id: 2,
				title: "B".into(),
				rating: 5.0,
				genres: vec!["Drama".into()],
				directors: vec!["Y".into()],
			},
		]
	}

	/// Graph with nodes parked far apart at known spots.
	fn laid_out() -> Graph {
		let mut graph = build_graph(&films(), None, &mut SmallRng::seed_from_u64(1));
		for (i, node) in graph.nodes_mut().iter_mut().enumerate() {
			node.position = DVec2::new(100.0 + 200.0 * i as f64, 100.0);
		}
		graph
	}

	#[test]
	fn hit_test_edge_of_padded_radius() {
		let graph = laid_out();
		let node = &graph.nodes()[0];
		let reach = node.radius + HIT_PADDING;
		let eps = 1e-6;
		let inside = node.position + DVec2::new(reach - eps, 0.0);
		let outside = node.position + DVec2::new(reach + eps, 0.0);
		assert_eq!(hit_test(&graph, inside, HIT_PADDING), Some(0));
		assert_eq!(hit_test(&graph, outside, HIT_PADDING), None);
	}

	#[test]
	fn overlapping_nodes_resolve_to_first_inserted() {
		let mut graph = laid_out();
		let spot = DVec2::new(50.0, 50.0);
		for node in graph.nodes_mut() {
			node.position = spot;
		}
		assert_eq!(hit_test(&graph, spot, HIT_PADDING), Some(0));
	}

	#[test]
	fn drag_pins_node_to_pointer() {
		let mut graph = laid_out();
		let mut ui = Interaction::default();
		graph.nodes_mut()[1].velocity = DVec2::new(3.0, 3.0);

		ui.pointer_down(&mut graph, DVec2::new(302.0, 101.0));
		assert_eq!(ui.dragged.as_deref(), Some("g-Drama"));
		assert_eq!(graph.nodes()[1].velocity, DVec2::ZERO);
		assert_eq!(ui.cursor(), "grabbing");

		let target = DVec2::new(640.0, 480.0);
		ui.pointer_move(&mut graph, target);
		assert_eq!(graph.nodes()[1].position, target);
		assert_eq!(ui.hovered.as_deref(), Some("g-Drama"));
		assert_eq!(ui.pinned(&graph).dragged, Some(1));

		ui.pointer_up();
		assert_eq!(ui.dragged, None);
		assert_eq!(ui.hovered.as_deref(), Some("g-Drama"));
	}

	#[test]
	fn pointer_down_on_empty_space_starts_nothing() {
		let mut graph = laid_out();
		let mut ui = Interaction::default();
		ui.pointer_down(&mut graph, DVec2::new(5000.0, 5000.0));
		assert_eq!(ui, Interaction::default());
		assert_eq!(ui.cursor(), "grab");
	}

	#[test]
	fn hover_tracks_pointer_while_dragging() {
		let mut graph = laid_out();
		let mut ui = Interaction::default();
		ui.pointer_down(&mut graph, DVec2::new(100.0, 100.0));
		// film node is dragged under the pointer, so it stays hovered
		ui.pointer_move(&mut graph, DVec2::new(500.0, 100.0));
		assert_eq!(ui.hovered.as_deref(), Some("f-1"));

		ui.pointer_leave();
		assert_eq!(ui, Interaction::default());
	}

	#[test]
	fn double_click_opens_films_only() {
		let graph = laid_out();
		assert_eq!(film_at(&graph, DVec2::new(100.0, 100.0)), Some(1));
		assert_eq!(film_at(&graph, DVec2::new(300.0, 100.0)), None);
		assert_eq!(film_at(&graph, DVec2::new(0.0, 400.0)), None);
	}

	#[test]
	fn rebuild_drops_vanished_ids() {
		let graph = laid_out();
		let mut ui = Interaction {
			dragged: Some("d-Gone".into()),
			hovered: Some("g-Drama".into()),
		};
		ui.retain_known(&graph);
		assert_eq!(ui.dragged, None);
		assert_eq!(ui.hovered.as_deref(), Some("g-Drama"));
	}
}
