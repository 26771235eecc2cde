use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::config::{SLIDERS, SimulationConfig};
use super::interaction::{InteractionHandler, Pointer, Tooltip};
use super::legend::{Legend, legend_entries};
use super::render;
use super::scale::ColorScale;
use super::state::GraphState;
use super::tooltip::TooltipPanel;
use super::types::GraphData;

type SharedState = Rc<RefCell<Option<GraphState>>>;

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn page_pointer(ev: &MouseEvent) -> Pointer {
	Pointer {
		page_x: ev.page_x() as f64,
		page_y: ev.page_y() as f64,
	}
}

fn sync_tooltip(state: &GraphState, tooltip: RwSignal<Tooltip>) {
	if tooltip.with_untracked(|t| *t != state.tooltip) {
		tooltip.set(state.tooltip.clone());
	}
}

/// Canvas, force sliders, legend and tooltip for one loaded network.
#[component]
pub fn AuthorNetwork(
	data: GraphData,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let tooltip = RwSignal::new(Tooltip::default());
	let legend = legend_entries(&ColorScale::from_countries(
		data.nodes.iter().map(|n| n.country.as_str()),
	));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let mounted = Arc::new(AtomicBool::new(true));
	let (state_init, animate_init, resize_cb_init, mounted_init) =
		(state.clone(), animate.clone(), resize_cb.clone(), mounted.clone());

	// the frame loop notices this on its next tick and tears itself down
	on_cleanup(move || mounted.store(false, Ordering::Relaxed));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("no window available, graph not rendered");
			return;
		};

		let (w, h) = if fullscreen {
			viewport_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			error!("canvas 2d context unavailable, graph not rendered");
			return;
		};
		*state_init.borrow_mut() = Some(GraphState::new(&data, w, h));

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner, resize_anim, mounted_anim) = (
			state_init.clone(),
			animate_init.clone(),
			resize_cb_init.clone(),
			mounted_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			if !mounted_anim.load(Ordering::Relaxed) {
				if let Some(cb) = resize_anim.borrow_mut().take() {
					let _ =
						win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				state_anim.borrow_mut().take();
				debug!("graph unmounted, frame loop stopped");
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			match s.node_at_position(x, y) {
				Some(idx) => {
					let (gx, gy) = s.screen_to_graph(x, y);
					s.on_drag_start(idx, gx, gy);
				}
				None => s.begin_pan(x, y),
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		let pointer = page_pointer(&ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.node.is_some() {
				let (gx, gy) = s.screen_to_graph(x, y);
				s.on_drag_move(gx, gy);
			} else if s.pan.active {
				s.pan_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.update_hover(hovered, pointer);
			}
			s.on_pointer_move(pointer);
			sync_tooltip(s, tooltip);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.release(page_pointer(&ev));
			sync_tooltip(s, tooltip);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.on_drag_end();
			s.end_pan();
			s.update_hover(None, Pointer::default());
			sync_tooltip(s, tooltip);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	let defaults = SimulationConfig::default();
	let sliders = SLIDERS
		.into_iter()
		.map(|spec| {
			let state_sl = state.clone();
			let slider = spec.slider;
			let on_input = move |ev: web_sys::Event| {
				let raw = event_target_value(&ev);
				match raw.parse::<f64>() {
					Ok(value) => {
						if let Some(ref mut s) = *state_sl.borrow_mut() {
							s.on_slider_change(slider, value);
						}
					}
					Err(_) => warn!("ignoring non-numeric value {raw:?} from #{}", spec.id),
				}
			};
			view! {
				<label class="control" for=spec.id>
					<span>{spec.label}</span>
					<input
						type="range"
						id=spec.id
						min=spec.min
						max=spec.max
						step=spec.step
						value=spec.initial(&defaults)
						on:input=on_input
					/>
				</label>
			}
		})
		.collect_view();

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
		<div class="controls">{sliders}</div>
		<Legend entries=legend />
		<TooltipPanel tooltip=tooltip />
	}
}
