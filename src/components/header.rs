use leptos::prelude::*;

/// Branded page header.
#[component]
pub fn Header() -> impl IntoView {
	view! {
		<header class="site-header">
			<div class="site-header-inner">
				<span class="brand-icon">"\u{2601}"</span>
				<div>
					<h1 class="brand">"CloudStream Architect"</h1>
					<p class="tagline">"Azure DevOps Architecture Solution"</p>
				</div>
			</div>
		</header>
	}
}
