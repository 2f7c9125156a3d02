use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, ConnectorLabel, Scene};

const BACKGROUND: &str = "#ffffff";
const CONNECTOR_STROKE: &str = "#94a3b8";
const CONNECTOR_LABEL_FILL: &str = "#64748b";
const NODE_BORDER: &str = "#d1d5db";
const NODE_BORDER_HOVERED: &str = "#3b82f6";
const NODE_LABEL_FILL: &str = "#334155";
const ICON_FILL: &str = "#4b5563";
const CORNER_RADIUS: f64 = 8.0;

/// Paint the scene. Connectors draw first, nodes second, so nodes occlude
/// connector endpoints. Idempotent: repainting with the same inputs
/// produces the same pixels.
pub fn render(scene: &Scene, hovered: Option<&str>, dpr: f64, ctx: &CanvasRenderingContext2d) {
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
	draw_connectors(scene, ctx);
	draw_nodes(scene, hovered, ctx);
}

fn draw_connectors(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(CONNECTOR_STROKE);
	ctx.set_line_width(2.0);
	for connector in &scene.connectors {
		if connector.dashed {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(5.0),
				&JsValue::from_f64(5.0),
			));
		}
		ctx.begin_path();
		ctx.move_to(connector.from.x, connector.from.y);
		ctx.line_to(connector.to.x, connector.to.y);
		ctx.stroke();
		if connector.dashed {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
	}

	// Labels after all lines so they stay legible at crossings
	for connector in &scene.connectors {
		if let Some(label) = &connector.label {
			draw_connector_label(label, ctx);
		}
	}
}

fn draw_connector_label(label: &ConnectorLabel, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("10px sans-serif");
	ctx.set_text_align("center");
	let width = ctx
		.measure_text(&label.text)
		.map(|metrics| metrics.width())
		.unwrap_or(0.0);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(
		label.anchor.x - width / 2.0 - 2.0,
		label.anchor.y - 9.0,
		width + 4.0,
		12.0,
	);
	ctx.set_fill_style_str(CONNECTOR_LABEL_FILL);
	let _ = ctx.fill_text(&label.text, label.anchor.x, label.anchor.y);
	ctx.set_text_align("start");
}

fn draw_nodes(scene: &Scene, hovered: Option<&str>, ctx: &CanvasRenderingContext2d) {
	for node in &scene.nodes {
		let (x, y) = (node.origin.x, node.origin.y);
		rounded_rect(ctx, x, y, node.size.width, node.size.height, CORNER_RADIUS);
		ctx.set_fill_style_str(node.tint.fill());
		ctx.fill();
		if hovered == Some(node.id.as_str()) {
			ctx.set_stroke_style_str(NODE_BORDER_HOVERED);
			ctx.set_line_width(2.0);
		} else {
			ctx.set_stroke_style_str(NODE_BORDER);
			ctx.set_line_width(1.0);
		}
		ctx.stroke();

		ctx.set_font("18px sans-serif");
		ctx.set_fill_style_str(ICON_FILL);
		let _ = ctx.fill_text(node.icon.glyph(), x + 10.0, y + 36.0);

		ctx.set_font("500 12px sans-serif");
		ctx.set_fill_style_str(NODE_LABEL_FILL);
		let _ = ctx.fill_text(&node.label, x + 42.0, y + 35.0);
	}
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	ctx.line_to(x + w - r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + r, r);
	ctx.line_to(x + w, y + h - r);
	let _ = ctx.arc_to(x + w, y + h, x + w - r, y + h, r);
	ctx.line_to(x + r, y + h);
	let _ = ctx.arc_to(x, y + h, x, y + h - r, r);
	ctx.line_to(x, y + r);
	let _ = ctx.arc_to(x, y, x + r, y, r);
	ctx.close_path();
}
