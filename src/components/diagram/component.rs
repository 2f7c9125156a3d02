use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::catalog::Catalog;
use super::layout::{self, CANVAS_HEIGHT, CANVAS_WIDTH, Scene};
use super::render;
use super::scale::CanvasScale;
use super::state::{DiagramEvent, SelectionState};
use super::types::DiagramData;

struct ViewState {
	scene: Scene,
	selection: SelectionState,
	ctx: CanvasRenderingContext2d,
	dpr: f64,
}

fn redraw(view: &ViewState) {
	render::render(&view.scene, view.selection.hovered(), view.dpr, &view.ctx);
}

fn forward_hover(event: Option<DiagramEvent>, on_hover: Option<Callback<Option<String>>>) {
	if let (Some(DiagramEvent::HoverChanged(id)), Some(callback)) = (event, on_hover) {
		callback.run(id);
	}
}

/// Interactive architecture diagram drawn on a 2d canvas.
///
/// Every node click is reported through `on_select`; hover transitions go
/// to `on_hover` when provided. Selection and hover state reset whenever
/// the component remounts or `data` changes.
#[component]
pub fn ArchitectureDiagram(
	#[prop(into)] data: Signal<DiagramData>,
	#[prop(into)] on_select: Callback<Option<String>>,
	#[prop(optional, into)] on_hover: Option<Callback<Option<String>>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ViewState>>> = Rc::new(RefCell::new(None));
	let state_init = state.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window = web_sys::window().unwrap();
		let scale = CanvasScale::probe(&window);
		scale.prepare(&canvas, CANVAS_WIDTH, CANVAS_HEIGHT);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let catalog = Catalog::new(data.get());
		let scene = layout::build_scene(&catalog);
		debug!(
			"architecture scene: {} nodes, {} connectors",
			scene.nodes.len(),
			scene.connectors.len()
		);
		let view = ViewState {
			scene,
			selection: SelectionState::default(),
			ctx,
			dpr: scale.dpr(),
		};
		redraw(&view);
		*state_init.borrow_mut() = Some(view);
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut view) = *state_mm.borrow_mut() {
			let hit = view.scene.node_at(x, y).map(|node| node.id.clone());
			if view.selection.hovered() == hit.as_deref() {
				return;
			}
			if let Some(previous) = view.selection.hovered().map(str::to_string) {
				forward_hover(view.selection.pointer_leave(&previous), on_hover);
			}
			if let Some(id) = &hit {
				forward_hover(view.selection.pointer_enter(id), on_hover);
			}
			let cursor = if hit.is_some() { "pointer" } else { "default" };
			let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
			redraw(view);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut view) = *state_ml.borrow_mut() {
			if let Some(current) = view.selection.hovered().map(str::to_string) {
				forward_hover(view.selection.pointer_leave(&current), on_hover);
				redraw(view);
			}
		}
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut view) = *state_click.borrow_mut() {
			let Some(id) = view.scene.node_at(x, y).map(|node| node.id.clone()) else {
				return;
			};
			let DiagramEvent::SelectionChanged(selected) = view.selection.click(&id) else {
				return;
			};
			on_select.run(selected);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="architecture-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:click=on_click
		/>
	}
}
