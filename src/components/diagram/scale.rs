//! Device-pixel-ratio aware canvas sizing.

use web_sys::{HtmlCanvasElement, Window};

/// Maps the fixed logical canvas onto a device-resolution backing store.
pub struct CanvasScale {
	dpr: f64,
}

impl CanvasScale {
	/// Read the device pixel ratio from the window, clamped to at least 1.
	pub fn probe(window: &Window) -> Self {
		Self {
			dpr: window.device_pixel_ratio().max(1.0),
		}
	}

	pub fn dpr(&self) -> f64 {
		self.dpr
	}

	/// Size the backing store at device resolution while the CSS size
	/// stays in logical units, so pointer coordinates equal layout
	/// coordinates.
	pub fn prepare(&self, canvas: &HtmlCanvasElement, width: f64, height: f64) {
		canvas.set_width((width * self.dpr) as u32);
		canvas.set_height((height * self.dpr) as u32);
		let style = canvas.style();
		let _ = style.set_property("width", &format!("{width}px"));
		let _ = style.set_property("height", &format!("{height}px"));
	}
}
