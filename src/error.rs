//! Errors raised while loading the author network.

use thiserror::Error;

/// Failure to fetch or decode the dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
	/// The request never produced a response.
	#[error("network error: {0}")]
	Network(String),
	/// The server answered with a non-success status.
	#[error("failed to fetch {url}: HTTP {status}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Requested URL.
		url: String,
	},
	/// The body was not a valid dataset document.
	#[error("invalid dataset: {0}")]
	Parse(String),
}
