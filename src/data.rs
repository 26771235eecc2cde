//! Dataset loading.

use gloo_net::http::Request;

use crate::components::force_graph::GraphData;
use crate::error::LoadError;

/// Default location of the co-authorship dataset, relative to the page.
pub const DEFAULT_DATA_URL: &str = "author_network_data_with_links.json";

/// Fetch and decode the dataset at `url`.
pub async fn fetch_graph(url: &str) -> Result<GraphData, LoadError> {
	let response = Request::get(url)
		.send()
		.await
		.map_err(|e| LoadError::Network(e.to_string()))?;
	if !response.ok() {
		return Err(LoadError::Status {
			status: response.status(),
			url: url.to_string(),
		});
	}
	let body = response
		.text()
		.await
		.map_err(|e| LoadError::Network(e.to_string()))?;
	GraphData::from_json(&body)
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = include_str!("../data/author_network_data_with_links.json");

	#[test]
	fn bundled_sample_parses() {
		let data = GraphData::from_json(SAMPLE).unwrap();
		assert_eq!(data.nodes.len(), 22);
		assert_eq!(data.links.len(), 33);
		assert!(data.nodes.iter().any(|n| n.country == "Other"));
		assert!(data.nodes.iter().any(|n| n.affiliation.is_none()));
	}

	#[test]
	fn bundled_links_only_name_known_authors() {
		let data = GraphData::from_json(SAMPLE).unwrap();
		let known = |name: &str| data.nodes.iter().any(|n| n.name == name);
		assert!(data.links.iter().all(|l| known(&l.source) && known(&l.target)));
	}
}
