use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;

/// Shared flag telling a running loop to stop requesting frames.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Rc<Cell<bool>>);

impl StopToken {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn stop(&self) {
		self.0.set(true);
	}

	pub fn is_stopped(&self) -> bool {
		self.0.get()
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs `frame` once per `requestAnimationFrame` until stopped or dropped.
pub struct AnimationLoop {
	token: StopToken,
	pending: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

impl AnimationLoop {
	pub fn start(mut frame: impl FnMut() + 'static) -> Self {
		let token = StopToken::new();
		let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let (token_cb, pending_cb, callback_cb) = (token.clone(), pending.clone(), callback.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_cb.set(None);
			if token_cb.is_stopped() {
				return;
			}
			frame();
			if token_cb.is_stopped() {
				return;
			}
			if let Some(ref cb) = *callback_cb.borrow() {
				pending_cb.set(request_frame(cb));
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			pending.set(request_frame(cb));
		}
		info!("animation loop started");

		Self {
			token,
			pending,
			callback,
		}
	}

	/// Cancels the pending frame and frees the callback. Must not be called from
	/// inside `frame`; flip the token there instead.
	pub fn stop(&self) {
		if self.token.is_stopped() && self.callback.borrow().is_none() {
			return;
		}
		self.token.stop();
		if let (Some(handle), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(handle);
		}
		self.callback.borrow_mut().take();
		info!("animation loop stopped");
	}
}

impl Drop for AnimationLoop {
	fn drop(&mut self) {
		self.stop();
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}
