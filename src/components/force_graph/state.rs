use std::collections::HashMap;

use log::{debug, warn};

use super::config::{self, CENTER, CHARGE, COLLIDE, LINK, SimulationConfig, Slider};
use super::degree::{compute_degrees, degree_of};
use super::interaction::{DIMMED_OPACITY, InteractionHandler, Pointer, Tooltip, TooltipContent};
use super::scale::{ColorScale, SizeScale};
use super::simulation::{Force, Simulation};
use super::types::{Author, GraphData};

/// Alpha target held while a node is being dragged.
pub const DRAG_ALPHA_TARGET: f64 = 0.3;
/// Smallest pick radius, so tiny nodes stay grabbable.
pub const MIN_HIT_RADIUS: f64 = 4.0;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node: Option<usize>,
	pub moved: bool,
	/// Node position minus pointer position at the press.
	pub offset_x: f64,
	pub offset_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub country: Option<String>,
}

/// Everything one rendering session owns: the loaded graph, its scales,
/// the running simulation and the pointer state.
pub struct GraphState {
	pub authors: Vec<Author>,
	pub size: SizeScale,
	pub colors: ColorScale,
	pub config: SimulationConfig,
	pub simulation: Simulation,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub tooltip: Tooltip,
	pub width: f64,
	pub height: f64,
}

impl GraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		Self::with_config(data, SimulationConfig::default(), width, height)
	}

	pub fn with_config(
		data: &GraphData,
		settings: SimulationConfig,
		width: f64,
		height: f64,
	) -> Self {
		let degrees = compute_degrees(&data.links);
		let authors: Vec<Author> = data
			.nodes
			.iter()
			.map(|node| Author {
				name: node.name.clone(),
				country: node.country.clone(),
				affiliation: node.affiliation.clone(),
				degree: degree_of(&degrees, &node.name),
			})
			.collect();

		// later duplicates win, matching a plain id -> node map
		let id_to_idx: HashMap<&str, usize> = authors
			.iter()
			.enumerate()
			.map(|(i, a)| (a.name.as_str(), i))
			.collect();
		let links: Vec<(usize, usize)> = data
			.links
			.iter()
			.filter_map(|link| {
				Some((
					*id_to_idx.get(link.source.as_str())?,
					*id_to_idx.get(link.target.as_str())?,
				))
			})
			.collect();
		let dropped = data.links.len() - links.len();
		if dropped > 0 {
			warn!("{dropped} links reference unknown authors and were skipped");
		}

		let size = SizeScale::from_degrees(authors.iter().map(|a| a.degree));
		let colors = ColorScale::from_countries(authors.iter().map(|a| a.country.as_str()));
		let simulation = config::configure(&authors, links, &size, &settings, width, height);

		Self {
			authors,
			size,
			colors,
			config: settings,
			simulation,
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			tooltip: Tooltip::default(),
			width,
			height,
		}
	}

	/// Resolved links as author index pairs.
	pub fn links(&self) -> &[(usize, usize)] {
		match self.simulation.force(LINK) {
			Some(Force::Link(link)) => link.links(),
			_ => &[],
		}
	}

	pub fn radius(&self, idx: usize) -> f64 {
		self.authors
			.get(idx)
			.map_or(0.0, |a| self.size.radius(a.degree))
	}

	pub fn fill(&self, idx: usize) -> &'static str {
		self.authors
			.get(idx)
			.map_or(super::scale::CATEGORY10[0], |a| self.colors.color(&a.country))
	}

	/// Full opacity unless a hovered node of another country is active.
	pub fn opacity(&self, idx: usize) -> f64 {
		match (&self.hover.country, self.authors.get(idx)) {
			(Some(country), Some(author)) if author.country != *country => DIMMED_OPACITY,
			_ => 1.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a canvas-space point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.simulation
			.nodes()
			.iter()
			.enumerate()
			.rev()
			.find(|(i, node)| {
				let (dx, dy) = (node.x - gx, node.y - gy);
				(dx * dx + dy * dy).sqrt() < self.radius(*i).max(MIN_HIT_RADIUS)
			})
			.map(|(i, _)| i)
	}

	/// Move hover to `node`, emitting end/start transitions as needed.
	pub fn update_hover(&mut self, node: Option<usize>, pointer: Pointer) {
		if self.hover.node == node {
			return;
		}
		if self.hover.node.is_some() {
			self.on_hover_end();
		}
		if let Some(idx) = node {
			self.on_hover(idx, pointer);
		}
	}

	pub fn begin_pan(&mut self, x: f64, y: f64) {
		self.pan = PanState {
			active: true,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, x: f64, y: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Zoom by one wheel notch around a canvas-space point.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Advance the layout by one frame; false once it has cooled.
	pub fn tick(&mut self) -> bool {
		self.simulation.step()
	}

	/// Pointer released: ends a drag or pan, and a press that never moved
	/// counts as a click on the pressed node.
	pub fn release(&mut self, pointer: Pointer) {
		if let Some(idx) = self.drag.node {
			let moved = self.drag.moved;
			self.on_drag_end();
			if !moved {
				self.on_click(idx, pointer);
			}
		}
		self.end_pan();
	}

	/// New viewport size; the layout re-centres on the new midpoint.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		if let Some(Force::Center(center)) = self.simulation.force_mut(CENTER) {
			center.x = width / 2.0;
			center.y = height / 2.0;
		}
		self.simulation.restart();
	}

	fn reheat(&mut self) {
		self.simulation.set_alpha(1.0);
		self.simulation.restart();
	}
}

impl InteractionHandler for GraphState {
	fn on_hover(&mut self, node: usize, pointer: Pointer) {
		let Some(author) = self.authors.get(node) else {
			return;
		};
		self.tooltip.show(TooltipContent::summary(author));
		self.tooltip.follow(pointer);
		self.hover = HoverState {
			node: Some(node),
			country: Some(author.country.clone()),
		};
	}

	fn on_pointer_move(&mut self, pointer: Pointer) {
		if self.tooltip.is_visible() {
			self.tooltip.follow(pointer);
		}
	}

	fn on_hover_end(&mut self) {
		self.tooltip.hide();
		self.hover = HoverState::default();
	}

	fn on_click(&mut self, node: usize, pointer: Pointer) {
		let Some(author) = self.authors.get(node) else {
			return;
		};
		self.tooltip.show(TooltipContent::detail(author));
		self.tooltip.follow(pointer);
	}

	fn on_drag_start(&mut self, node: usize, x: f64, y: f64) {
		let Some(&current) = self.simulation.node(node) else {
			return;
		};
		if self.drag.node.is_none() {
			self.simulation.set_alpha_target(DRAG_ALPHA_TARGET);
			self.simulation.restart();
		}
		if let Some(sim_node) = self.simulation.node_mut(node) {
			sim_node.fx = Some(current.x);
			sim_node.fy = Some(current.y);
		}
		self.drag = DragState {
			node: Some(node),
			moved: false,
			offset_x: current.x - x,
			offset_y: current.y - y,
		};
	}

	fn on_drag_move(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node else {
			return;
		};
		self.drag.moved = true;
		let (fx, fy) = (x + self.drag.offset_x, y + self.drag.offset_y);
		if let Some(sim_node) = self.simulation.node_mut(idx) {
			sim_node.fx = Some(fx);
			sim_node.fy = Some(fy);
		}
	}

	fn on_drag_end(&mut self) {
		let Some(idx) = self.drag.node.take() else {
			return;
		};
		self.drag = DragState::default();
		self.simulation.set_alpha_target(0.0);
		if let Some(sim_node) = self.simulation.node_mut(idx) {
			sim_node.fx = None;
			sim_node.fy = None;
		}
	}

	fn on_slider_change(&mut self, slider: Slider, value: f64) {
		debug!("slider {slider:?} -> {value}");
		match slider {
			Slider::ForceStrength => {
				self.config.charge_strength = value;
				if let Some(Force::Charge(charge)) = self.simulation.force_mut(CHARGE) {
					charge.strength = value;
				}
			}
			Slider::CollisionRadius => {
				self.config.collision_padding = value;
				let radii = config::collision_radii(&self.authors, &self.size, value);
				if let Some(Force::Collide(collide)) = self.simulation.force_mut(COLLIDE) {
					collide.radii = radii;
				}
			}
			Slider::LinkStrength => {
				self.config.link_strength = value;
				if let Some(Force::Link(link)) = self.simulation.force_mut(LINK) {
					link.strength = value;
				}
			}
		}
		self.reheat();
	}
}
