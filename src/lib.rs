//! click-sparks: click-to-spawn fading particle animation.
//!
//! This crate provides a WASM-based canvas component where every click spawns
//! a randomly-colored circle that drifts at a constant velocity and fades
//! until it disappears, plus the application shell that mounts it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::sparks::{Color, DrawSurface, Particle, ParticleSystem, SparkCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("click-sparks: logging initialized");
}

/// Main application component.
/// Renders the spark canvas at its default 800x600 size.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Click Sparks" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="spark-stage">
			<SparkCanvas />
			<div class="spark-overlay">
				<h1>"Click Sparks"</h1>
				<p class="subtitle">"Click the canvas to spawn a fading spark."</p>
			</div>
		</div>
	}
}
