use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::catalog;
use crate::components::graph_view::FilmId;

/// Detail view a film node navigates to.
#[component]
pub fn FilmDetail() -> impl IntoView {
	let params = use_params_map();
	let film = move || {
		params
			.read()
			.get("id")
			.and_then(|id| id.parse::<FilmId>().ok())
			.and_then(catalog::find)
	};

	view! {
		<div class="film-detail">
			<A href="/">"Back to graph"</A>
			{move || match film() {
				Some(film) => view! {
					<h1>{film.title.clone()}</h1>
					<p class="rating">{format!("Rating {:.1}", film.rating)}</p>
					<p>"Genres: " {film.genres.join(", ")}</p>
					<p>"Directed by " {film.directors.join(", ")}</p>
				}
				.into_any(),
				None => view! { <h1>"Film not found"</h1> }.into_any(),
			}}
		</div>
	}
}
