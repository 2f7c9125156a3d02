//! Pure layout stage: resolves the catalog into drawable primitives.

use super::catalog::Catalog;
use super::types::{Icon, Point, Size, Tint};

/// Logical canvas width, in layout units.
pub const CANVAS_WIDTH: f64 = 440.0;
/// Logical canvas height, in layout units.
pub const CANVAS_HEIGHT: f64 = 520.0;

/// Distance between a connector's midpoint and its label anchor, so the
/// text clears the line.
const LABEL_OFFSET: f64 = 8.0;

/// A connector label anchored near the line's midpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorLabel {
	pub text: String,
	pub anchor: Point,
}

/// A straight-line connector between two node centers.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
	pub from: Point,
	pub to: Point,
	pub dashed: bool,
	pub label: Option<ConnectorLabel>,
}

/// A node box ready to paint.
#[derive(Clone, Debug)]
pub struct NodeBox {
	pub id: String,
	pub origin: Point,
	pub size: Size,
	pub label: String,
	pub icon: Icon,
	pub tint: Tint,
}

impl NodeBox {
	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.origin.x
			&& x <= self.origin.x + self.size.width
			&& y >= self.origin.y
			&& y <= self.origin.y + self.size.height
	}
}

/// Everything the paint stage needs, in draw order: connectors first,
/// then nodes, so nodes occlude connector endpoints.
pub struct Scene {
	pub connectors: Vec<Connector>,
	pub nodes: Vec<NodeBox>,
}

impl Scene {
	/// Topmost node whose box contains the point. Later nodes paint over
	/// earlier ones, so the search runs back to front.
	pub fn node_at(&self, x: f64, y: f64) -> Option<&NodeBox> {
		self.nodes.iter().rev().find(|node| node.contains(x, y))
	}
}

/// Resolve every connection and node in the catalog into primitives.
/// Connections with an endpoint missing from the catalog are dropped
/// silently.
pub fn build_scene(catalog: &Catalog) -> Scene {
	let connectors = catalog
		.connections()
		.iter()
		.filter_map(|connection| {
			let from = catalog.get(&connection.from)?.center();
			let to = catalog.get(&connection.to)?.center();
			let label = connection.label.as_ref().map(|text| ConnectorLabel {
				text: text.clone(),
				anchor: label_anchor(from, to),
			});
			Some(Connector {
				from,
				to,
				dashed: connection.dashed,
				label,
			})
		})
		.collect();

	let nodes = catalog
		.nodes()
		.iter()
		.map(|node| NodeBox {
			id: node.id.clone(),
			origin: node.position,
			size: node.dimensions(),
			label: node.label.clone(),
			icon: node.icon,
			tint: node.tint,
		})
		.collect();

	Scene { connectors, nodes }
}

/// Midpoint of the connector, offset perpendicular to the line.
fn label_anchor(from: Point, to: Point) -> Point {
	let mid = Point {
		x: (from.x + to.x) / 2.0,
		y: (from.y + to.y) / 2.0,
	};
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < f64::EPSILON {
		return mid;
	}
	Point {
		x: mid.x + dy / dist * LABEL_OFFSET,
		y: mid.y - dx / dist * LABEL_OFFSET,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::diagram::types::{
		ComponentNode, Connection, DiagramData,
	};

	fn node(id: &str, x: f64, y: f64) -> ComponentNode {
		ComponentNode {
			id: id.into(),
			position: Point { x, y },
			size: None,
			label: id.into(),
			icon: Icon::Server,
			tint: Tint::Blue,
		}
	}

	fn link(from: &str, to: &str) -> Connection {
		Connection {
			from: from.into(),
			to: to.into(),
			label: None,
			dashed: false,
		}
	}

	fn catalog(nodes: Vec<ComponentNode>, connections: Vec<Connection>) -> Catalog {
		Catalog::new(DiagramData { nodes, connections })
	}

	#[test]
	fn resolved_connection_yields_one_connector_between_centers() {
		let scene = build_scene(&catalog(
			vec![node("a", 0.0, 0.0), node("b", 200.0, 100.0)],
			vec![link("a", "b")],
		));
		assert_eq!(scene.connectors.len(), 1);
		assert_eq!(scene.nodes.len(), 2);
		assert_eq!(scene.connectors[0].from, Point { x: 60.0, y: 30.0 });
		assert_eq!(scene.connectors[0].to, Point { x: 260.0, y: 130.0 });
	}

	#[test]
	fn dangling_endpoint_drops_the_connection_silently() {
		let scene = build_scene(&catalog(
			vec![node("a", 0.0, 0.0)],
			vec![link("a", "ghost"), link("ghost", "a")],
		));
		assert!(scene.connectors.is_empty());
		assert_eq!(scene.nodes.len(), 1);
	}

	#[test]
	fn declared_size_moves_the_center() {
		let mut wide = node("a", 0.0, 0.0);
		wide.size = Some(Size {
			width: 200.0,
			height: 40.0,
		});
		let scene = build_scene(&catalog(
			vec![wide, node("b", 0.0, 100.0)],
			vec![link("a", "b")],
		));
		assert_eq!(scene.connectors[0].from, Point { x: 100.0, y: 20.0 });
	}

	#[test]
	fn parallel_connections_render_independently() {
		let scene = build_scene(&catalog(
			vec![node("a", 0.0, 0.0), node("b", 200.0, 0.0)],
			vec![link("a", "b"), link("a", "b")],
		));
		assert_eq!(scene.connectors.len(), 2);
	}

	#[test]
	fn dashed_flag_carries_through() {
		let mut dashed = link("a", "b");
		dashed.dashed = true;
		let scene = build_scene(&catalog(
			vec![node("a", 0.0, 0.0), node("b", 200.0, 0.0)],
			vec![dashed],
		));
		assert!(scene.connectors[0].dashed);
	}

	#[test]
	fn label_anchor_sits_above_a_horizontal_connector() {
		let mut labeled = link("a", "b");
		labeled.label = Some("Replication".into());
		let scene = build_scene(&catalog(
			vec![node("a", 0.0, 0.0), node("b", 200.0, 0.0)],
			vec![labeled],
		));
		let label = scene.connectors[0].label.as_ref().unwrap();
		assert_eq!(label.text, "Replication");
		// Midpoint x, offset perpendicular (upward for left-to-right)
		assert_eq!(label.anchor, Point { x: 160.0, y: 22.0 });
	}

	#[test]
	fn hit_test_finds_the_node_under_the_point() {
		let scene = build_scene(&catalog(
			vec![node("a", 0.0, 0.0), node("b", 200.0, 0.0)],
			vec![],
		));
		assert_eq!(scene.node_at(60.0, 30.0).map(|n| n.id.as_str()), Some("a"));
		assert_eq!(scene.node_at(210.0, 5.0).map(|n| n.id.as_str()), Some("b"));
		assert!(scene.node_at(500.0, 500.0).is_none());
	}

	#[test]
	fn hit_test_prefers_the_topmost_node_when_boxes_overlap() {
		let scene = build_scene(&catalog(
			vec![node("under", 0.0, 0.0), node("over", 60.0, 30.0)],
			vec![],
		));
		// Point inside both boxes; "over" paints later and wins
		assert_eq!(
			scene.node_at(70.0, 40.0).map(|n| n.id.as_str()),
			Some("over")
		);
	}
}
