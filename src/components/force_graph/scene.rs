use super::state::GraphState;

pub const LINK_STROKE: &str = "#999";
pub const LINK_OPACITY: f64 = 0.6;
pub const LINK_WIDTH: f64 = 1.5;

#[derive(Clone, Debug, PartialEq)]
pub struct LinkLine {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeCircle {
	pub x: f64,
	pub y: f64,
	pub r: f64,
	pub fill: &'static str,
	pub opacity: f64,
}

/// Positions and styles for one animation frame, in graph coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneFrame {
	pub links: Vec<LinkLine>,
	pub nodes: Vec<NodeCircle>,
}

impl SceneFrame {
	pub fn capture(state: &GraphState) -> Self {
		let sim = state.simulation.nodes();
		let links = state
			.links()
			.iter()
			.filter_map(|&(s, t)| {
				let (src, tgt) = (sim.get(s)?, sim.get(t)?);
				Some(LinkLine {
					x1: src.x,
					y1: src.y,
					x2: tgt.x,
					y2: tgt.y,
				})
			})
			.collect();
		let nodes = sim
			.iter()
			.enumerate()
			.map(|(i, node)| NodeCircle {
				x: node.x,
				y: node.y,
				r: state.radius(i),
				fill: state.fill(i),
				opacity: state.opacity(i),
			})
			.collect();
		Self { links, nodes }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::interaction::{InteractionHandler, Pointer};
	use crate::components::force_graph::scale::CATEGORY10;
	use crate::components::force_graph::types::{GraphData, GraphLink, GraphNode};

	fn state() -> GraphState {
		let data = GraphData {
			nodes: ["A", "B", "C"]
				.iter()
				.zip(["FR", "DE", "Other"])
				.map(|(name, country)| GraphNode {
					name: name.to_string(),
					country: country.to_string(),
					affiliation: None,
				})
				.collect(),
			links: vec![GraphLink {
				source: "A".into(),
				target: "C".into(),
			}],
		};
		GraphState::new(&data, 640.0, 480.0)
	}

	#[test]
	fn frame_tracks_simulation_positions() {
		let mut state = state();
		for _ in 0..10 {
			state.tick();
		}
		let frame = SceneFrame::capture(&state);
		let sim = state.simulation.nodes();
		assert_eq!(frame.nodes.len(), 3);
		assert_eq!(frame.links.len(), 1);
		assert_eq!((frame.nodes[1].x, frame.nodes[1].y), (sim[1].x, sim[1].y));
		assert_eq!(
			frame.links[0],
			LinkLine {
				x1: sim[0].x,
				y1: sim[0].y,
				x2: sim[2].x,
				y2: sim[2].y,
			}
		);
	}

	#[test]
	fn node_fill_uses_ordinal_color_even_for_other() {
		let frame = SceneFrame::capture(&state());
		let fills: Vec<&str> = frame.nodes.iter().map(|n| n.fill).collect();
		assert_eq!(fills, CATEGORY10[..3].to_vec());
	}

	#[test]
	fn hover_opacity_reaches_the_frame() {
		let mut state = state();
		state.on_hover(1, Pointer::default());
		let frame = SceneFrame::capture(&state);
		let opacity: Vec<f64> = frame.nodes.iter().map(|n| n.opacity).collect();
		assert_eq!(opacity, vec![0.2, 1.0, 0.2]);
	}
}
