use leptos::prelude::*;

/// Page footer.
#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="site-footer">
			<p>"\u{a9} 2025 CloudStream Architecture Solution"</p>
			<p class="site-footer-note">"Designed for cloud-scale workloads"</p>
		</footer>
	}
}
