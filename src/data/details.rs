//! Descriptive text for each architecture component.

use std::collections::HashMap;

/// Detail record shown in the sidebar for one component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailEntry {
	pub title: String,
	pub description: String,
	/// Insertion order is display order.
	pub features: Vec<String>,
	pub benefits: Vec<String>,
}

/// Static component-id -> detail mapping with a total `lookup`.
#[derive(Clone, Debug)]
pub struct DetailsTable {
	entries: HashMap<String, DetailEntry>,
	fallback: DetailEntry,
}

fn entry(title: &str, description: &str, features: &[&str], benefits: &[&str]) -> DetailEntry {
	DetailEntry {
		title: title.into(),
		description: description.into(),
		features: features.iter().map(|s| s.to_string()).collect(),
		benefits: benefits.iter().map(|s| s.to_string()).collect(),
	}
}

impl DetailsTable {
	/// Lookups never fail: ids missing from the table resolve to the
	/// fallback entry.
	pub fn lookup(&self, id: &str) -> &DetailEntry {
		self.entries.get(id).unwrap_or(&self.fallback)
	}

	/// Detail entries for the Azure reference architecture.
	pub fn azure_reference() -> Self {
		let mut entries = HashMap::new();
		entries.insert(
			"trafficManager".to_string(),
			entry(
				"Azure Traffic Manager",
				"Global DNS-based traffic load balancer that distributes traffic across Azure regions.",
				&[
					"Priority routing for active-passive failover",
					"Weighted round-robin distribution",
					"Performance-based routing to nearest endpoint",
					"Geographic routing to specific endpoints by location",
				],
				&[
					"Ensures high availability across multiple regions",
					"Improves application responsiveness",
					"Enables disaster recovery scenarios",
					"No downtime during region failover",
				],
			),
		);
		entries.insert(
			"waf".to_string(),
			entry(
				"Web Application Firewall",
				"Protects web applications from common exploits and vulnerabilities.",
				&[
					"OWASP top 10 protection rules",
					"Custom rule configuration",
					"Bot protection capabilities",
					"DDoS protection",
				],
				&[
					"Prevents SQL injection and cross-site scripting attacks",
					"Blocks malicious traffic before reaching application",
					"Centrally managed security policy",
					"Real-time security monitoring",
				],
			),
		);
		entries.insert(
			"frontendScaleSet".to_string(),
			entry(
				"App Service Scale Set",
				"Scalable platform for hosting frontend web applications with auto-scaling capabilities.",
				&[
					"Automatic horizontal scaling",
					"Deployment slots for zero-downtime updates",
					"Built-in load balancing",
					"Zone redundancy for high availability",
				],
				&[
					"Handles 1000 RPS with dynamic scaling",
					"Minimizes infrastructure management overhead",
					"Supports CI/CD integration",
					"Optimized cost with scale-to-zero capability",
				],
			),
		);
		entries.insert(
			"apiManagement".to_string(),
			entry(
				"API Management",
				"Fully managed service for publishing, securing, transforming, and analyzing APIs.",
				&[
					"API versioning and lifecycle management",
					"Request/response transformation",
					"Rate limiting and quotas",
					"OAuth 2.0 and JWT validation",
				],
				&[
					"Centralizes API governance",
					"Provides developer portal for API documentation",
					"Enables detailed API analytics",
					"Secures access to backend services",
				],
			),
		);
		entries.insert(
			"backendScaleSet".to_string(),
			entry(
				"Backend Service Scale Set",
				"Scalable compute resources for hosting backend microservices and application logic.",
				&[
					"Container orchestration with AKS",
					"Pod auto-scaling based on metrics",
					"Service mesh integration",
					"Multi-zone deployment",
				],
				&[
					"Efficiently processes 1000 RPS workloads",
					"Ensures fault tolerance through pod distribution",
					"Enables blue/green and canary deployments",
					"Optimizes resource utilization",
				],
			),
		);
		entries.insert(
			"sqlDbPrimary".to_string(),
			entry(
				"Azure SQL Primary",
				"Primary SQL Database instance with high performance and security capabilities.",
				&[
					"Automated backups and point-in-time restore",
					"Advanced threat protection",
					"Transparent data encryption",
					"Geo-replication to secondary region",
				],
				&[
					"Handles high transaction workloads",
					"Built-in high availability",
					"Automated patching and updates",
					"Comprehensive security features",
				],
			),
		);
		entries.insert(
			"sqlDbSecondary".to_string(),
			entry(
				"Azure SQL Secondary",
				"Geo-replicated secondary database for disaster recovery and read workloads.",
				&[
					"Asynchronous replication from primary",
					"Automatic failover groups",
					"Read-only access for reporting workloads",
					"Geo-redundant backups",
				],
				&[
					"Improves application resiliency",
					"Distributes read workloads",
					"Enables business continuity",
					"Minimal data loss during region failure",
				],
			),
		);
		entries.insert(
			"keyvault".to_string(),
			entry(
				"Azure Key Vault",
				"Secure storage for application secrets, keys, and certificates.",
				&[
					"Hardware Security Module (HSM) backed keys",
					"Certificate management and auto-renewal",
					"Role-based access control",
					"Integration with Azure AD",
				],
				&[
					"Centralizes secret management",
					"Prevents hard-coded credentials",
					"Provides audit logging of secret access",
					"Simplifies key rotation",
				],
			),
		);
		entries.insert(
			"monitor".to_string(),
			entry(
				"Azure Monitor",
				"Comprehensive solution for collecting, analyzing, and acting on telemetry from applications and infrastructure.",
				&[
					"Application Insights integration",
					"Log Analytics capabilities",
					"Metric-based alerting",
					"Customizable dashboards",
				],
				&[
					"Real-time visibility into system health",
					"Advanced analytics for troubleshooting",
					"Proactive alerting for potential issues",
					"End-to-end transaction monitoring",
				],
			),
		);
		entries.insert(
			"externalServices".to_string(),
			entry(
				"External Services",
				"Integration with third-party services and APIs required by the application.",
				&[
					"Secure service-to-service communication",
					"Circuit breaker patterns",
					"Retry policies with exponential backoff",
					"API throttling and rate limiting",
				],
				&[
					"Extends application capabilities",
					"Handles external service failures gracefully",
					"Manages third-party rate limits",
					"Provides consistent integration patterns",
				],
			),
		);

		Self {
			entries,
			fallback: entry(
				"Unknown Component",
				"No details available for this component.",
				&[],
				&[],
			),
		}
	}
}
