//! Leptos component wrapping the spark canvas.
//!
//! The component creates an HTML canvas element, wires up a click handler
//! that spawns particles, and runs an animation loop via
//! `requestAnimationFrame`: each frame clears the canvas, advances and prunes
//! the particle system, and repaints it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::surface::DrawSurface;
use super::system::ParticleSystem;

/// Holds all mutable animation state, shared between the frame loop and the
/// click handler. There are no module-level globals.
struct SparkContext {
	system: ParticleSystem,
}

/// Renders a click-to-spawn particle animation on a canvas element.
///
/// Clicking anywhere on the canvas spawns one particle at the canvas center;
/// the click position itself is never inspected. The animation loop starts as
/// soon as the canvas mounts and runs until the page is torn down — there is
/// no stop control.
#[component]
pub fn SparkCanvas(
	#[prop(default = 800.0)] width: f64,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SparkContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().expect("window unavailable");

		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into().ok())
			.expect("canvas 2d context unavailable");

		*context_init.borrow_mut() = Some(SparkContext {
			system: ParticleSystem::new(width, height),
		});

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				DrawSurface::clear(&ctx, 0.0, 0.0, width, height);
				c.system.update_particles(&ctx);
				c.system.draw_particles(&ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_click = context.clone();
	let on_click = move |_: MouseEvent| {
		// The click position is ignored; particles always spawn at the center.
		if let Some(ref mut c) = *context_click.borrow_mut() {
			c.system.create_particle();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="spark-canvas"
			on:click=on_click
			style="display: block; cursor: pointer;"
		/>
	}
}
