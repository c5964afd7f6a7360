//! Demo film records standing in for the catalog API.

use crate::components::graph_view::{Film, FilmId};

/// Films served per "page" by [`page`].
pub const PAGE_SIZE: usize = 6;

const SAMPLE: &[(FilmId, &str, f64, &[&str], &[&str])] = &[
	(1, "The Long Night", 8.1, &["Drama", "Crime"], &["Ines Varga"]),
	(2, "Paper Harbor", 7.2, &["Drama", "Romance"], &["Tomas Reyes"]),
	(3, "Static Bloom", 6.4, &["Sci-Fi", "Thriller"], &["Ines Varga", "Omar Haddad"]),
	(4, "Low Tide", 5.9, &["Thriller"], &["Mira Kowal"]),
	(5, "Glass Orchard", 8.7, &["Drama", "Fantasy"], &["Tomas Reyes"]),
	(6, "Northbound", 6.8, &["Adventure", "Drama"], &["Kenji Arata"]),
	(7, "Second Sun", 7.9, &["Sci-Fi", "Adventure"], &["Kenji Arata", "Lea Brandt"]),
	(8, "Quiet Engines", 4.6, &["Sci-Fi"], &["Omar Haddad"]),
	(9, "Velvet Alibi", 7.4, &["Crime", "Comedy"], &["Mira Kowal"]),
	(10, "Saltwater Kings", 6.1, &["Adventure", "Comedy"], &["Lea Brandt"]),
	(11, "The Cartographer", 8.3, &["Drama"], &["Ines Varga"]),
	(12, "Hollow Choir", 5.2, &["Horror", "Thriller"], &["Dario Fenn"]),
	(13, "Midnight Ferry", 6.9, &["Romance", "Drama"], &["Tomas Reyes"]),
	(14, "Red Meridian", 7.7, &["Crime", "Thriller"], &["Dario Fenn", "Mira Kowal"]),
	(15, "Ember Road", 3.8, &["Horror"], &[]),
	(16, "Lanterns", 9.0, &["Fantasy", "Adventure"], &["Kenji Arata"]),
	(17, "Untitled Reel", 5.0, &[], &["Lea Brandt"]),
	(18, "Cold Open", 6.6, &["Comedy", "Drama"], &["Omar Haddad"]),
];

pub fn sample_films() -> Vec<Film> {
	SAMPLE
		.iter()
		.map(|&(id, title, rating, genres, directors)| Film {
			id,
			title: title.to_string(),
			rating,
			genres: genres.iter().map(|g| g.to_string()).collect(),
			directors: directors.iter().map(|d| d.to_string()).collect(),
		})
		.collect()
}

/// First `pages` pages of the catalog, optionally only films rated at least `min_rating`.
pub fn page(pages: usize, min_rating: Option<f64>) -> Vec<Film> {
	sample_films()
		.into_iter()
		.filter(|f| min_rating.is_none_or(|min| f.rating >= min))
		.take(pages.saturating_mul(PAGE_SIZE))
		.collect()
}

pub fn find(id: FilmId) -> Option<Film> {
	sample_films().into_iter().find(|f| f.id == id)
}
