use leptos::prelude::*;

use crate::data::details::DetailsTable;

/// Sidebar bound to the current selection.
///
/// With nothing selected it shows the fixed architecture highlights;
/// otherwise the looked-up entry, with the feature and benefit sections
/// hidden when empty.
#[component]
pub fn DetailsPanel(
	#[prop(into)] selected: Signal<Option<String>>,
	details: DetailsTable,
) -> impl IntoView {
	view! {
		<aside class="card details-panel">
			{move || match selected.get() {
				None => highlights().into_any(),
				Some(id) => {
					let entry = details.lookup(&id).clone();
					view! {
						<h2 class="details-title">{entry.title.clone()}</h2>
						<p class="details-description">{entry.description.clone()}</p>
						{(!entry.features.is_empty())
							.then(|| {
								view! {
									<div class="details-section">
										<h3>"Key Features"</h3>
										<ul>
											{entry
												.features
												.iter()
												.map(|feature| view! { <li>{feature.clone()}</li> })
												.collect_view()}
										</ul>
									</div>
								}
							})}
						{(!entry.benefits.is_empty())
							.then(|| {
								view! {
									<div class="details-section">
										<h3>"Benefits"</h3>
										<ul>
											{entry
												.benefits
												.iter()
												.map(|benefit| view! { <li>{benefit.clone()}</li> })
												.collect_view()}
										</ul>
									</div>
								}
							})}
					}
						.into_any()
				}
			}}
		</aside>
	}
}

fn highlights() -> impl IntoView {
	view! {
		<h2 class="details-title">"Component Details"</h2>
		<p class="details-description">
			"Click on any component in the architecture diagram to view its details."
		</p>
		<div class="details-section">
			<h3>"Architecture Highlights"</h3>
			<ul class="highlights-list">
				<li>"High Availability across multiple zones"</li>
				<li>"Security at all tiers with defense in depth"</li>
				<li>"Auto-scaling to handle 1000 RPS"</li>
				<li>"Geo-replicated database for fault tolerance"</li>
				<li>"Comprehensive monitoring and alerting"</li>
			</ul>
		</div>
	}
}
