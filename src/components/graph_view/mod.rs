//! Force-directed film/genre/director graph drawn on a canvas.

mod builder;
mod component;
mod interaction;
mod render;
mod scheduler;
mod simulation;
mod state;
mod surface;
mod types;

pub use component::GraphView;
pub use types::{Film, FilmId};
