use leptos::prelude::*;

use crate::components::details_panel::DetailsPanel;
use crate::components::diagram::ArchitectureDiagram;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::requirements::RequirementsDisplay;
use crate::data::architecture::azure_reference_architecture;
use crate::data::details::DetailsTable;

/// Landing page: the interactive architecture diagram with a details
/// sidebar.
#[component]
pub fn Home() -> impl IntoView {
	let data = Signal::derive(azure_reference_architecture);
	let (selected, set_selected) = signal(None::<String>);
	let (show_plan, set_show_plan) = signal(false);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="app-shell">
				<Header />
				<main class="content">
					<div class="content-grid">
						<section class="card diagram-card">
							<h2 class="card-title">"Azure Cloud Architecture"</h2>
							<RequirementsDisplay />
							<div class="diagram-frame">
								<ArchitectureDiagram
									data=data
									on_select=Callback::new(move |id: Option<String>| set_selected.set(id))
								/>
							</div>
							<div class="plan-actions">
								<button
									class="button"
									on:click=move |_| set_show_plan.update(|shown| *shown = !*shown)
								>
									{move || {
										if show_plan.get() {
											"Hide Deployment Plan"
										} else {
											"Show Deployment Plan"
										}
									}}
								</button>
							</div>
							<Show when=move || show_plan.get()>
								<DeploymentPlan />
							</Show>
						</section>
						<DetailsPanel selected=selected details=DetailsTable::azure_reference() />
					</div>
				</main>
				<Footer />
			</div>
		</ErrorBoundary>
	}
}

#[component]
fn DeploymentPlan() -> impl IntoView {
	view! {
		<div class="deployment-plan">
			<h3>"Deployment & Release Plan"</h3>
			<div class="deployment-step">
				<h4>"1. Infrastructure as Code Setup"</h4>
				<p>
					"Use Azure Resource Manager (ARM) templates or Terraform to define all infrastructure components."
				</p>
			</div>
			<div class="deployment-step">
				<h4>"2. CI/CD Pipeline Implementation"</h4>
				<p>
					"Configure Azure DevOps pipelines for automated build, test, and deployment processes."
				</p>
			</div>
			<div class="deployment-step">
				<h4>"3. Deployment Stages"</h4>
				<ul>
					<li>"Development environment deployment for continuous integration"</li>
					<li>"QA/Test environment for integration and load testing"</li>
					<li>"Staging environment that mirrors production"</li>
					<li>"Production deployment with blue/green strategy"</li>
				</ul>
			</div>
			<div class="deployment-step">
				<h4>"4. Database Migration Strategy"</h4>
				<p>"Implement automated SQL database schema migrations and data seeding."</p>
			</div>
			<div class="deployment-step">
				<h4>"5. Monitoring & Rollback Strategy"</h4>
				<p>
					"Configure Azure Monitor alerts and application insights for real-time monitoring. Implement automated rollback procedures."
				</p>
			</div>
		</div>
	}
}
