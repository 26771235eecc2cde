use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::components::force_graph::{AuthorNetwork, GraphData};
use crate::data::{DEFAULT_DATA_URL, fetch_graph};

/// Loads the dataset once, then shows the network. A failed load is only
/// logged; the page stays empty.
#[component]
pub fn Home(#[prop(into, default = DEFAULT_DATA_URL.to_string())] data_url: String) -> impl IntoView {
	let graph_data = RwSignal::new(None::<GraphData>);

	spawn_local(async move {
		match fetch_graph(&data_url).await {
			Ok(data) => {
				info!(
					"Loaded {} authors and {} links from {data_url}",
					data.nodes.len(),
					data.links.len()
				);
				graph_data.set(Some(data));
			}
			Err(e) => error!("Error loading the JSON data: {e}"),
		}
	});

	view! {
		<div class="fullscreen-graph">
			{move || {
				graph_data.get().map(|data| view! { <AuthorNetwork data=data fullscreen=true /> })
			}}
			<div class="graph-overlay">
				<h1>"Author Collaboration Network"</h1>
				<p class="subtitle">
					"Hover for details, click for affiliation. Drag nodes, scroll to zoom, drag background to pan."
				</p>
			</div>
		</div>
	}
}
