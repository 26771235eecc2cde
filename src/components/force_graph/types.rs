use serde::Deserialize;

use crate::error::LoadError;

/// An author as it appears in the dataset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	pub name: String,
	pub country: String,
	#[serde(default)]
	pub affiliation: Option<String>,
}

/// A co-authorship edge between two author names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

/// The whole dataset: authors plus co-authorship links.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Parse a dataset document.
	pub fn from_json(raw: &str) -> Result<Self, LoadError> {
		serde_json::from_str(raw).map_err(|e| LoadError::Parse(e.to_string()))
	}
}

/// An author with its derived connection count.
#[derive(Clone, Debug, PartialEq)]
pub struct Author {
	pub name: String,
	pub country: String,
	pub affiliation: Option<String>,
	pub degree: u32,
}
