//! Particle colors: real-valued RGB channels with CSS formatting.

use rand::Rng;

/// RGB color with real-valued channels.
///
/// Channels are sampled from [0, 255) and deliberately kept as floats rather
/// than rounded to integers; the CSS color parser accepts fractional channel
/// magnitudes, and rounding would quantize the palette for no benefit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: f64,
	pub g: f64,
	pub b: f64,
}

impl Color {
	/// Construct a fixed color. Animation particles use [`Color::sample`];
	/// this exists for callers (and tests) that need a known color.
	pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
		Self { r, g, b }
	}

	/// Sample each channel independently and uniformly from [0, 255).
	pub fn sample<R: Rng>(rng: &mut R) -> Self {
		Self {
			r: rng.r#gen::<f64>() * 255.0,
			g: rng.r#gen::<f64>() * 255.0,
			b: rng.r#gen::<f64>() * 255.0,
		}
	}

	/// Format as a CSS `rgba(...)` string with the given alpha.
	///
	/// Alpha is passed through unclamped; values outside [0, 1] are left for
	/// the CSS parser to clamp.
	pub fn to_css_rgba(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}
