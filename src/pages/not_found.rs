use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found-page">
			<h1>"404 - Page Not Found"</h1>
			<a href="/">"Back to the network"</a>
		</div>
	}
}
