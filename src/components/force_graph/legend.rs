use leptos::prelude::*;

use super::scale::ColorScale;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	pub country: String,
	pub color: &'static str,
}

/// One row per distinct country, in color assignment order.
pub fn legend_entries(colors: &ColorScale) -> Vec<LegendEntry> {
	colors
		.domain()
		.iter()
		.map(|country| LegendEntry {
			country: country.clone(),
			color: colors.legend_color(country),
		})
		.collect()
}

#[component]
pub fn Legend(entries: Vec<LegendEntry>) -> impl IntoView {
	view! {
		<div class="legend">
			{entries
				.into_iter()
				.map(|entry| {
					view! {
						<div class="legend-item">
							<div class="legend-swatch" style:background-color=entry.color></div>
							<span>{entry.country}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::scale::{CATEGORY10, OTHER_LEGEND_COLOR};

	#[test]
	fn one_entry_per_country_with_other_in_gray() {
		let colors = ColorScale::from_countries(["India", "Other", "India", "Japan"]);
		let entries = legend_entries(&colors);
		assert_eq!(
			entries,
			vec![
				LegendEntry {
					country: "India".into(),
					color: CATEGORY10[0],
				},
				LegendEntry {
					country: "Other".into(),
					color: OTHER_LEGEND_COLOR,
				},
				LegendEntry {
					country: "Japan".into(),
					color: CATEGORY10[2],
				},
			]
		);
	}
}
