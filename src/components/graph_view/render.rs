use std::f64::consts::PI;

use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

use super::state::GraphViewState;
use super::types::{Graph, NodeKind};

const EDGE_COLOR: &str = "rgba(255, 255, 255, 0.18)";
const OUTLINE_COLOR: &str = "rgba(255, 255, 255, 0.35)";
const HOVER_OUTLINE_COLOR: &str = "#ffffff";
const LABEL_COLOR: &str = "#e8e8e8";
const LABEL_HALO_COLOR: &str = "#141414";
const LABEL_FONT: &str = "11px sans-serif";

/// Line segments for every edge whose endpoints both exist.
pub fn edge_segments(graph: &Graph) -> Vec<(DVec2, DVec2)> {
	graph
		.edges()
		.iter()
		.filter_map(|edge| graph.resolve_edge(edge))
		.map(|(src, tgt)| (graph.nodes()[src].position, graph.nodes()[tgt].position))
		.collect()
}

/// Which nodes get a label: films always, plus the hovered node and its neighbours.
pub fn label_mask(graph: &Graph, hovered: Option<usize>) -> Vec<bool> {
	let mut mask: Vec<bool> = graph
		.nodes()
		.iter()
		.map(|n| n.kind == NodeKind::Film)
		.collect();
	if let Some(idx) = hovered.filter(|&i| i < mask.len()) {
		mask[idx] = true;
		for neighbor in graph.neighbors_of(idx) {
			mask[neighbor] = true;
		}
	}
	mask
}

pub fn render(state: &GraphViewState, ctx: &CanvasRenderingContext2d, pixel_ratio: f64) {
	let _ = ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0);
	ctx.clear_rect(0.0, 0.0, state.viewport.width, state.viewport.height);

	let hovered = state.interaction.pinned(&state.graph).hovered;
	draw_edges(&state.graph, ctx);
	draw_nodes(&state.graph, hovered, ctx);
	draw_labels(&state.graph, hovered, ctx);
}

fn draw_edges(graph: &Graph, ctx: &CanvasRenderingContext2d) {
	ctx.begin_path();
	for (from, to) in edge_segments(graph) {
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
	}
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_line_width(1.0);
	ctx.stroke();
}

fn draw_nodes(graph: &Graph, hovered: Option<usize>, ctx: &CanvasRenderingContext2d) {
	for (idx, node) in graph.nodes().iter().enumerate() {
		let (x, y) = (node.position.x, node.position.y);

		if node.kind == NodeKind::Film {
			ctx.set_shadow_color(node.color);
			ctx.set_shadow_blur(12.0);
		}
		ctx.begin_path();
		let _ = ctx.arc(x, y, node.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();
		ctx.set_shadow_blur(0.0);

		if hovered == Some(idx) {
			ctx.set_stroke_style_str(HOVER_OUTLINE_COLOR);
			ctx.set_line_width(3.0);
		} else {
			ctx.set_stroke_style_str(OUTLINE_COLOR);
			ctx.set_line_width(1.0);
		}
		ctx.stroke();
	}
}

fn draw_labels(graph: &Graph, hovered: Option<usize>, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(LABEL_FONT);
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	ctx.set_line_join("round");
	ctx.set_line_width(3.0);
	ctx.set_stroke_style_str(LABEL_HALO_COLOR);
	ctx.set_fill_style_str(LABEL_COLOR);

	let mask = label_mask(graph, hovered);
	for (node, _) in graph.nodes().iter().zip(mask).filter(|(_, show)| *show) {
		let (x, y) = (node.position.x, node.position.y + node.radius + 4.0);
		let _ = ctx.stroke_text(&node.label, x, y);
		let _ = ctx.fill_text(&node.label, x, y);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::graph_view::builder::build_graph;
	use crate::components::graph_view::types::Film;

	fn film(id: u64, genre: &str, director: &str) -> Film {
		Film {
			id,
			title: format!("Film {id}"),
			rating: 6.0,
			genres: vec![genre.into()],
			directors: vec![director.into()],
		}
	}

	#[test]
	fn labels_without_hover_are_films_only() {
		let graph = build_graph(
			&[film(1, "Drama", "X"), film(2, "Crime", "Y")],
			None,
			&mut SmallRng::seed_from_u64(3),
		);
		let mask = label_mask(&graph, None);
		for (node, shown) in graph.nodes().iter().zip(mask) {
			assert_eq!(shown, node.kind == NodeKind::Film, "{}", node.id);
		}
	}

	#[test]
	fn hovering_a_genre_labels_its_neighbourhood() {
		let graph = build_graph(
			&[film(1, "Drama", "X"), film(2, "Crime", "Y"), film(3, "Drama", "Z")],
			None,
			&mut SmallRng::seed_from_u64(3),
		);
		let drama = graph.index_of("g-Drama");
		let mask = label_mask(&graph, drama);
		let shown: Vec<&str> = graph
			.nodes()
			.iter()
			.zip(&mask)
			.filter(|(_, s)| **s)
			.map(|(n, _)| n.id.as_str())
			.collect();
		assert_eq!(shown, ["f-1", "g-Drama", "f-2", "f-3"]);

		let mask = label_mask(&graph, graph.index_of("d-Y"));
		assert_eq!(graph.index_of("d-Y").map(|i| mask[i]), Some(true));
		assert_eq!(graph.index_of("d-X").map(|i| mask[i]), Some(false));
	}

	#[test]
	fn segments_skip_edges_missing_an_endpoint() {
		let mut graph = build_graph(&[film(1, "Drama", "X")], None, &mut SmallRng::seed_from_u64(3));
		graph.push_edge("f-1", "g-Vanished");
		assert_eq!(graph.edges().len(), 3);
		let segments = edge_segments(&graph);
		assert_eq!(segments.len(), 2);
		let film = graph.node("f-1").map(|n| n.position);
		assert!(segments.iter().all(|(from, _)| Some(*from) == film));
	}
}
