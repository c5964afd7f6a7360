use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::catalog;
use crate::components::graph_view::{FilmId, GraphView};

const TOP_RATED: f64 = 7.5;

/// Catalog explorer: the graph plus paging and a rating filter.
#[component]
pub fn Home() -> impl IntoView {
	let (pages, set_pages) = signal(1usize);
	let (top_rated, set_top_rated) = signal(false);

	// Handed to the graph wholesale on every change.
	let films = Signal::derive(move || {
		catalog::page(pages.get(), top_rated.get().then_some(TOP_RATED))
	});
	let exhausted = move || {
		films.with(|f| f.len()) < pages.get() * catalog::PAGE_SIZE
	};

	let navigate = use_navigate();
	let open_film = move |id: FilmId| navigate(&format!("/films/{id}"), Default::default());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<GraphView films=films on_select=open_film />
				<div class="graph-overlay">
					<h1>"CineGraph"</h1>
					<p class="subtitle">
						"Drag nodes to rearrange. Hover to see connections. Double-click a film for details."
					</p>
					<div class="graph-controls">
						<button
							on:click=move |_| set_pages.update(|p| *p += 1)
							disabled=exhausted
						>
							"Load more"
						</button>
						<label>
							<input
								type="checkbox"
								prop:checked=top_rated
								on:change=move |ev| set_top_rated.set(event_target_checked(&ev))
							/>
							" Top rated only"
						</label>
						<span class="film-count">{move || format!("{} films", films.with(|f| f.len()))}</span>
					</div>
				</div>
			</div>
		</ErrorBoundary>
	}
}
