use glam::DVec2;
use web_sys::HtmlCanvasElement;

/// Drawing area in CSS pixels. Simulation coordinates live in this space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(&self) -> DVec2 {
		DVec2::new(self.width / 2.0, self.height / 2.0)
	}

	pub fn is_empty(&self) -> bool {
		!(self.width > 0.0 && self.height > 0.0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
	pub viewport: Viewport,
	pub pixel_ratio: f64,
}

impl SurfaceMetrics {
	pub fn new(viewport: Viewport, pixel_ratio: f64) -> Self {
		let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
			pixel_ratio
		} else {
			1.0
		};
		Self {
			viewport,
			pixel_ratio,
		}
	}

	/// Backing store size in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		let w = (self.viewport.width * self.pixel_ratio).round().max(1.0);
		let h = (self.viewport.height * self.pixel_ratio).round().max(1.0);
		(w as u32, h as u32)
	}

	pub fn apply(&self, canvas: &HtmlCanvasElement) {
		let (w, h) = self.backing_size();
		canvas.set_width(w);
		canvas.set_height(h);
		let style = canvas.style();
		let _ = style.set_property("width", &format!("{}px", self.viewport.width));
		let _ = style.set_property("height", &format!("{}px", self.viewport.height));
	}
}

pub fn device_pixel_ratio() -> f64 {
	web_sys::window()
		.map(|w| w.device_pixel_ratio())
		.unwrap_or(1.0)
}
