use std::collections::HashMap;

use super::types::{ComponentNode, Connection, DiagramData};

/// Immutable id -> node lookup table, built once per diagram.
///
/// The catalog never mutates after construction; it is passed explicitly
/// into the layout stage rather than consulted through shared state.
pub struct Catalog {
	nodes: Vec<ComponentNode>,
	connections: Vec<Connection>,
	index: HashMap<String, usize>,
}

impl Catalog {
	pub fn new(data: DiagramData) -> Self {
		let mut index = HashMap::with_capacity(data.nodes.len());
		for (i, node) in data.nodes.iter().enumerate() {
			// First declaration wins on duplicate ids
			index.entry(node.id.clone()).or_insert(i);
		}
		Self {
			nodes: data.nodes,
			connections: data.connections,
			index,
		}
	}

	/// O(1) lookup; absence means "not found", never an error.
	pub fn get(&self, id: &str) -> Option<&ComponentNode> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}

	pub fn nodes(&self) -> &[ComponentNode] {
		&self.nodes
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::diagram::types::{Icon, Point, Tint};

	fn node(id: &str) -> ComponentNode {
		ComponentNode {
			id: id.into(),
			position: Point::default(),
			size: None,
			label: id.to_uppercase(),
			icon: Icon::Server,
			tint: Tint::Blue,
		}
	}

	#[test]
	fn get_resolves_every_declared_id() {
		let catalog = Catalog::new(DiagramData {
			nodes: vec![node("a"), node("b")],
			connections: vec![],
		});
		assert_eq!(catalog.get("a").map(|n| n.label.as_str()), Some("A"));
		assert_eq!(catalog.get("b").map(|n| n.label.as_str()), Some("B"));
	}

	#[test]
	fn get_returns_none_for_unknown_id() {
		let catalog = Catalog::new(DiagramData {
			nodes: vec![node("a")],
			connections: vec![],
		});
		assert!(catalog.get("ghost").is_none());
	}

	#[test]
	fn first_declaration_wins_on_duplicate_ids() {
		let mut first = node("a");
		first.label = "First".into();
		let mut second = node("a");
		second.label = "Second".into();
		let catalog = Catalog::new(DiagramData {
			nodes: vec![first, second],
			connections: vec![],
		});
		assert_eq!(catalog.get("a").map(|n| n.label.as_str()), Some("First"));
	}
}
