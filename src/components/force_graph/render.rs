use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::{LINK_OPACITY, LINK_STROKE, LINK_WIDTH, SceneFrame};
use super::state::GraphState;

const BACKGROUND: &str = "#ffffff";

pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	let frame = SceneFrame::capture(state);
	ctx.set_global_alpha(1.0);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(&frame, ctx);
	draw_nodes(&frame, ctx);
	ctx.restore();
}

fn draw_links(frame: &SceneFrame, ctx: &CanvasRenderingContext2d) {
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_global_alpha(LINK_OPACITY);
	ctx.set_stroke_style_str(LINK_STROKE);
	ctx.set_line_width(LINK_WIDTH);
	ctx.begin_path();
	for line in &frame.links {
		ctx.move_to(line.x1, line.y1);
		ctx.line_to(line.x2, line.y2);
	}
	ctx.stroke();
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(frame: &SceneFrame, ctx: &CanvasRenderingContext2d) {
	for node in &frame.nodes {
		ctx.set_global_alpha(node.opacity);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.r, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.fill);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}
