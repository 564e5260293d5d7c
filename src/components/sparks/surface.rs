//! Drawing-surface boundary.
//!
//! The animation only ever consumes a handful of Canvas2D primitives, so the
//! rendering target is expressed as the [`DrawSurface`] trait. The production
//! implementation is `web_sys::CanvasRenderingContext2d`; unit tests use a
//! recording implementation to observe draw sequences without a browser.

use web_sys::CanvasRenderingContext2d;

/// The 2D drawing primitives the animation consumes.
pub trait DrawSurface {
	/// Clear a rectangular region.
	fn clear(&self, x: f64, y: f64, width: f64, height: f64);
	/// Begin a new path.
	fn begin_path(&self);
	/// Append a circular arc to the current path.
	fn arc(&self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
	/// Set the fill style from a CSS color string.
	fn set_fill_style(&self, style: &str);
	/// Fill the current path.
	fn fill(&self);
	/// Close the current path.
	fn close_path(&self);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear(&self, x: f64, y: f64, width: f64, height: f64) {
		self.clear_rect(x, y, width, height);
	}

	fn begin_path(&self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn arc(&self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
		// Only fails for non-finite radius, which the simulation never produces.
		let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start_angle, end_angle);
	}

	fn set_fill_style(&self, style: &str) {
		self.set_fill_style_str(style);
	}

	fn fill(&self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn close_path(&self) {
		CanvasRenderingContext2d::close_path(self);
	}
}
