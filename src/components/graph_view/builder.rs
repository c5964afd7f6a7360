use std::collections::HashSet;

use glam::DVec2;
use log::debug;
use rand::Rng;

use super::surface::Viewport;
use super::types::{
	DIRECTOR_RADIUS, Film, GENRE_RADIUS, Graph, GraphNode, NodeKind, film_radius,
};

/// Half side of the square nodes are scattered in before any viewport is known.
pub const SCATTER_HALF_EXTENT: f64 = 250.0;
/// Half side of the jitter box around the viewport midpoint.
pub const CENTER_JITTER: f64 = 50.0;

fn new_node(id: String, kind: NodeKind, label: String, radius: f64) -> GraphNode {
	GraphNode {
		id,
		kind,
		label,
		position: DVec2::ZERO,
		velocity: DVec2::ZERO,
		radius,
		color: kind.color(),
		payload: None,
	}
}

/// Builds a fresh graph from `films`. Each film links to its genres and to its
/// first director only; genre and director nodes are shared across films.
pub fn build_graph(films: &[Film], viewport: Option<Viewport>, rng: &mut impl Rng) -> Graph {
	let mut graph = Graph::new();

	for film in films {
		let film_id = NodeKind::Film.node_id(&film.id.to_string());
		let label = if film.title.trim().is_empty() {
			format!("Film #{}", film.id)
		} else {
			film.title.clone()
		};
		let mut node = new_node(film_id.clone(), NodeKind::Film, label, film_radius(film.rating));
		node.payload = Some(film.clone());
		graph.insert_node(node);

		let mut linked = HashSet::new();
		for genre in film.genres.iter().filter(|g| !g.trim().is_empty()) {
			let genre_id = NodeKind::Genre.node_id(genre);
			if !linked.insert(genre_id.clone()) {
				continue;
			}
			graph.insert_node(new_node(
				genre_id.clone(),
				NodeKind::Genre,
				genre.clone(),
				GENRE_RADIUS,
			));
			graph.push_edge(film_id.clone(), genre_id);
		}

		if let Some(director) = film.directors.iter().find(|d| !d.trim().is_empty()) {
			let director_id = NodeKind::Director.node_id(director);
			graph.insert_node(new_node(
				director_id.clone(),
				NodeKind::Director,
				director.clone(),
				DIRECTOR_RADIUS,
			));
			graph.push_edge(film_id, director_id);
		}
	}

	scatter(&mut graph, viewport, rng);
	debug!(
		"built graph from {} films: {} nodes, {} edges",
		films.len(),
		graph.len(),
		graph.edges().len()
	);
	graph
}

fn scatter(graph: &mut Graph, viewport: Option<Viewport>, rng: &mut impl Rng) {
	let center = viewport.filter(|v| !v.is_empty()).map(|v| v.center());
	for node in graph.nodes_mut() {
		node.position = match center {
			Some(c) => {
				c + DVec2::new(
					rng.gen_range(-CENTER_JITTER..CENTER_JITTER),
					rng.gen_range(-CENTER_JITTER..CENTER_JITTER),
				)
			}
			None => DVec2::new(
				rng.gen_range(-SCATTER_HALF_EXTENT..SCATTER_HALF_EXTENT),
				rng.gen_range(-SCATTER_HALF_EXTENT..SCATTER_HALF_EXTENT),
			),
		};
		node.velocity = DVec2::ZERO;
	}
}
