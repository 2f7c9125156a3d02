//! The fixed Azure reference architecture shown on the home page.

use crate::components::diagram::{
	ComponentNode, Connection, DiagramData, Icon, Point, Tint,
};

fn node(id: &str, x: f64, y: f64, label: &str, icon: Icon, tint: Tint) -> ComponentNode {
	ComponentNode {
		id: id.into(),
		position: Point { x, y },
		size: None,
		label: label.into(),
		icon,
		tint,
	}
}

/// Solid request-path edge.
fn flow(from: &str, to: &str) -> Connection {
	Connection {
		from: from.into(),
		to: to.into(),
		label: None,
		dashed: false,
	}
}

/// Dashed supporting edge (secrets, telemetry).
fn support(from: &str, to: &str) -> Connection {
	Connection {
		dashed: true,
		..flow(from, to)
	}
}

fn labeled(from: &str, to: &str, label: &str) -> Connection {
	Connection {
		label: Some(label.into()),
		..flow(from, to)
	}
}

/// Ten components and twelve connections, laid out on the 440x520
/// logical canvas.
pub fn azure_reference_architecture() -> DiagramData {
	DiagramData {
		nodes: vec![
			node("trafficManager", 200.0, 50.0, "Azure Traffic Manager", Icon::Globe, Tint::Blue),
			node("waf", 200.0, 130.0, "Web Application Firewall", Icon::Shield, Tint::Red),
			node("frontendScaleSet", 200.0, 210.0, "App Service Scale Set", Icon::Layers, Tint::Green),
			node("apiManagement", 200.0, 290.0, "API Management", Icon::Network, Tint::Purple),
			node("backendScaleSet", 200.0, 370.0, "Backend Service Scale Set", Icon::Server, Tint::Yellow),
			node("sqlDbPrimary", 120.0, 450.0, "Azure SQL Primary", Icon::Database, Tint::Indigo),
			node("sqlDbSecondary", 280.0, 450.0, "Azure SQL Secondary", Icon::Database, Tint::Indigo),
			node("keyvault", 40.0, 290.0, "Azure Key Vault", Icon::Lock, Tint::Gray),
			node("monitor", 360.0, 290.0, "Azure Monitor", Icon::BarChart, Tint::Teal),
			node("externalServices", 360.0, 370.0, "External Services", Icon::Cloud, Tint::Orange),
		],
		connections: vec![
			flow("trafficManager", "waf"),
			flow("waf", "frontendScaleSet"),
			flow("frontendScaleSet", "apiManagement"),
			flow("apiManagement", "backendScaleSet"),
			flow("backendScaleSet", "sqlDbPrimary"),
			flow("backendScaleSet", "sqlDbSecondary"),
			flow("backendScaleSet", "externalServices"),
			support("keyvault", "backendScaleSet"),
			support("monitor", "backendScaleSet"),
			support("monitor", "frontendScaleSet"),
			support("monitor", "sqlDbPrimary"),
			labeled("sqlDbPrimary", "sqlDbSecondary", "Replication"),
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn catalog_has_ten_nodes_and_twelve_connections() {
		let data = azure_reference_architecture();
		assert_eq!(data.nodes.len(), 10);
		assert_eq!(data.connections.len(), 12);
	}

	#[test]
	fn every_connection_endpoint_is_declared() {
		let data = azure_reference_architecture();
		let ids: HashSet<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		for connection in &data.connections {
			assert!(ids.contains(connection.from.as_str()), "{}", connection.from);
			assert!(ids.contains(connection.to.as_str()), "{}", connection.to);
		}
	}

	#[test]
	fn node_ids_are_unique() {
		let data = azure_reference_architecture();
		let ids: HashSet<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), data.nodes.len());
	}

	#[test]
	fn replication_edge_is_the_only_labeled_one() {
		let data = azure_reference_architecture();
		let labeled: Vec<_> = data
			.connections
			.iter()
			.filter(|c| c.label.is_some())
			.collect();
		assert_eq!(labeled.len(), 1);
		assert_eq!(labeled[0].label.as_deref(), Some("Replication"));
	}
}
