use leptos::prelude::*;

use super::interaction::Tooltip;

/// Floating author card positioned in page coordinates.
#[component]
pub fn TooltipPanel(#[prop(into)] tooltip: Signal<Tooltip>) -> impl IntoView {
	view! {
		<div
			class="tooltip"
			style:display=move || if tooltip.get().is_visible() { "block" } else { "none" }
			style:left=move || format!("{}px", tooltip.get().left)
			style:top=move || format!("{}px", tooltip.get().top)
		>
			{move || {
				tooltip
					.get()
					.content
					.map(|content| {
						let title = content.title().to_string();
						view! {
							<strong>{title}</strong>
							{content
								.lines()
								.into_iter()
								.map(|line| view! { <br /> {line} })
								.collect_view()}
						}
					})
			}}
		</div>
	}
}
