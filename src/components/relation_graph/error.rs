use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
	/// The embedded document does not match the graph schema.
	#[error("failed to parse graph document: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("link {link} refers to node {index}, but the graph has {node_count} nodes")]
	LinkOutOfRange {
		link: usize,
		index: usize,
		node_count: usize,
	},

	#[error("container element #{0} not found")]
	MissingContainer(String),

	#[error("DOM operation failed: {0}")]
	Dom(String),
}

impl From<JsValue> for GraphError {
	fn from(value: JsValue) -> Self {
		GraphError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
