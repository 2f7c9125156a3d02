//! Data types for the architecture diagram.

/// A point in the diagram's logical coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Width and height of a node box, in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

/// Box size used when a node does not declare its own.
pub const DEFAULT_NODE_SIZE: Size = Size {
	width: 120.0,
	height: 60.0,
};

/// Fixed icon set for diagram nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
	Globe,
	Shield,
	Layers,
	Network,
	Server,
	Database,
	Lock,
	BarChart,
	Cloud,
}

impl Icon {
	/// Glyph drawn inset near the node's top-left corner.
	pub fn glyph(self) -> &'static str {
		match self {
			Icon::Globe => "\u{1F310}",
			Icon::Shield => "\u{1F6E1}",
			Icon::Layers => "\u{1F5C2}",
			Icon::Network => "\u{1F500}",
			Icon::Server => "\u{1F5A5}",
			Icon::Database => "\u{1F5C4}",
			Icon::Lock => "\u{1F512}",
			Icon::BarChart => "\u{1F4CA}",
			Icon::Cloud => "\u{2601}",
		}
	}
}

/// Symbolic fill style for a node box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
	Blue,
	Red,
	Green,
	Purple,
	Yellow,
	Indigo,
	Gray,
	Teal,
	Orange,
}

impl Tint {
	/// Fill color for the node rectangle.
	pub fn fill(self) -> &'static str {
		match self {
			Tint::Blue => "#dbeafe",
			Tint::Red => "#fee2e2",
			Tint::Green => "#dcfce7",
			Tint::Purple => "#f3e8ff",
			Tint::Yellow => "#fef9c3",
			Tint::Indigo => "#e0e7ff",
			Tint::Gray => "#f3f4f6",
			Tint::Teal => "#ccfbf1",
			Tint::Orange => "#ffedd5",
		}
	}
}

/// One architectural building block in the diagram.
#[derive(Clone, Debug)]
pub struct ComponentNode {
	pub id: String,
	/// Top-left anchor in the logical canvas.
	pub position: Point,
	/// Declared box size; `None` falls back to [`DEFAULT_NODE_SIZE`].
	pub size: Option<Size>,
	pub label: String,
	pub icon: Icon,
	pub tint: Tint,
}

impl ComponentNode {
	/// Declared size, or the default when unspecified.
	pub fn dimensions(&self) -> Size {
		self.size.unwrap_or(DEFAULT_NODE_SIZE)
	}

	/// Visual center of the node box, where connectors attach.
	pub fn center(&self) -> Point {
		let size = self.dimensions();
		Point {
			x: self.position.x + size.width / 2.0,
			y: self.position.y + size.height / 2.0,
		}
	}
}

/// A directed visual edge between two nodes.
#[derive(Clone, Debug)]
pub struct Connection {
	pub from: String,
	pub to: String,
	/// Rendered near the connector midpoint when present.
	pub label: Option<String>,
	pub dashed: bool,
}

/// Node and connection lists consumed by the diagram component.
#[derive(Clone, Debug, Default)]
pub struct DiagramData {
	pub nodes: Vec<ComponentNode>,
	pub connections: Vec<Connection>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn center_uses_default_size_when_unspecified() {
		let node = ComponentNode {
			id: "a".into(),
			position: Point { x: 200.0, y: 50.0 },
			size: None,
			label: "A".into(),
			icon: Icon::Globe,
			tint: Tint::Blue,
		};
		assert_eq!(node.center(), Point { x: 260.0, y: 80.0 });
	}

	#[test]
	fn center_uses_declared_size() {
		let node = ComponentNode {
			id: "a".into(),
			position: Point { x: 10.0, y: 20.0 },
			size: Some(Size {
				width: 40.0,
				height: 10.0,
			}),
			label: "A".into(),
			icon: Icon::Cloud,
			tint: Tint::Gray,
		};
		assert_eq!(node.center(), Point { x: 30.0, y: 25.0 });
	}
}
