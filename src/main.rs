//! Browser entry point: mounts the CineGraph app.

// Everything besides leptos is used by the library half only.
#![allow(unused_crate_dependencies)]

use cinegraph::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(App);
}
