use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::DVec2;
use leptos::html::Canvas;
use leptos::prelude::*;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, ResizeObserver};

use super::builder::build_graph;
use super::render;
use super::scheduler::AnimationLoop;
use super::simulation::SimulationParams;
use super::state::GraphViewState;
use super::surface::{SurfaceMetrics, Viewport, device_pixel_ratio};
use super::types::{Film, FilmId};

const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn measure(canvas: &HtmlCanvasElement, height: Option<f64>) -> Viewport {
	let parent = canvas.parent_element();
	let w = parent
		.as_ref()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(FALLBACK_SIZE.0);
	let h = height
		.or_else(|| {
			parent
				.map(|p| p.client_height() as f64)
				.filter(|h| *h > 0.0)
		})
		.unwrap_or(FALLBACK_SIZE.1);
	Viewport::new(w, h)
}

fn local_point(canvas_ref: NodeRef<Canvas>, ev: &MouseEvent) -> Option<DVec2> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?;
	let rect = canvas.get_bounding_client_rect();
	Some(DVec2::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn seeded_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Interactive film/genre/director graph. Double-clicking a film calls `on_select`.
#[component]
pub fn GraphView(
	#[prop(into)] films: Signal<Vec<Film>>,
	#[prop(into)] on_select: Callback<FilmId>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<Canvas>::new();
	let state = Rc::new(RefCell::new(GraphViewState::new(SimulationParams::default())));
	let pixel_ratio = Rc::new(Cell::new(1.0));
	let (cursor, set_cursor) = signal("grab");
	let sync_cursor = move |c: &'static str| {
		if cursor.get_untracked() != c {
			set_cursor.set(c);
		}
	};

	// Rebuild wholesale whenever the film list changes.
	let (state_build, rng) = (state.clone(), Rc::new(RefCell::new(seeded_rng())));
	Effect::new(move |_| {
		let films = films.get();
		let mut s = state_build.borrow_mut();
		let graph = build_graph(&films, s.known_viewport(), &mut *rng.borrow_mut());
		s.replace_graph(graph);
		sync_cursor(s.interaction.cursor());
	});

	let (state_setup, ratio_setup) = (state.clone(), pixel_ratio.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("graph view: canvas has no 2d context, not animating");
			return;
		};

		let resize = {
			let (state, ratio, canvas) = (state_setup.clone(), ratio_setup.clone(), canvas.clone());
			move || {
				let metrics = SurfaceMetrics::new(measure(&canvas, height), device_pixel_ratio());
				metrics.apply(&canvas);
				ratio.set(metrics.pixel_ratio);
				state.borrow_mut().resize(metrics.viewport);
			}
		};
		resize();

		let observer_cb = Closure::<dyn FnMut(js_sys::Array)>::new(move |_: js_sys::Array| resize());
		let observer = ResizeObserver::new(observer_cb.as_ref().unchecked_ref()).ok();
		if let (Some(observer), Some(parent)) = (observer.as_ref(), canvas.parent_element()) {
			observer.observe(&parent);
		}

		let (state_frame, ratio_frame) = (state_setup.clone(), ratio_setup.clone());
		let animation = AnimationLoop::start(move || {
			// Unmounted between frames: skip quietly, cleanup stops the loop.
			if canvas_ref.try_get_untracked().flatten().is_none() {
				return;
			}
			let mut s = state_frame.borrow_mut();
			s.tick();
			render::render(&s, &ctx, ratio_frame.get());
		});

		let teardown = SendWrapper::new((animation, observer, observer_cb));
		on_cleanup(move || {
			let (animation, observer, _observer_cb) = teardown.take();
			animation.stop();
			if let Some(observer) = observer {
				observer.disconnect();
			}
		});
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(point) = local_point(canvas_ref, &ev) else {
			return;
		};
		let mut s = state_md.borrow_mut();
		s.pointer_down(point);
		sync_cursor(s.interaction.cursor());
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(point) = local_point(canvas_ref, &ev) else {
			return;
		};
		let mut s = state_mm.borrow_mut();
		s.pointer_move(point);
		sync_cursor(s.interaction.cursor());
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let mut s = state_mu.borrow_mut();
		s.pointer_up();
		sync_cursor(s.interaction.cursor());
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let mut s = state_ml.borrow_mut();
		s.pointer_leave();
		sync_cursor(s.interaction.cursor());
	};

	let state_dc = state.clone();
	let on_dblclick = move |ev: MouseEvent| {
		let Some(point) = local_point(canvas_ref, &ev) else {
			return;
		};
		let selected = state_dc.borrow().double_click(point);
		if let Some(id) = selected {
			debug!("graph view: opening film {id}");
			on_select.run(id);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-view-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:dblclick=on_dblclick
			style:display="block"
			style:cursor=move || cursor.get()
		/>
	}
}
