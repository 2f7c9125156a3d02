use leptos::prelude::*;

/// The three headline requirements the architecture was sized for.
#[component]
pub fn RequirementsDisplay() -> impl IntoView {
	view! {
		<div class="requirements-grid">
			<RequirementCard
				icon="\u{1F5C4}"
				title="SQL Database"
				detail="Managed database service"
			/>
			<RequirementCard
				icon="\u{26A1}"
				title="High Performance"
				detail="1000 requests per second"
			/>
			<RequirementCard
				icon="\u{1F517}"
				title="External Integration"
				detail="3rd party service connections"
			/>
		</div>
	}
}

#[component]
fn RequirementCard(
	icon: &'static str,
	title: &'static str,
	detail: &'static str,
) -> impl IntoView {
	view! {
		<div class="requirement-card">
			<span class="requirement-icon">{icon}</span>
			<div>
				<h3>{title}</h3>
				<p>{detail}</p>
			</div>
		</div>
	}
}
