use serde::Deserialize;

use super::error::{GraphError, Result};

const EMBEDDED_DOCUMENT: &str = include_str!("../../data/philosophers.json");

/// A person, positioned against the reference authoring width.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub name: String,
	pub url: String,
	pub img: String,
}

/// A relation between two people, by index into [`GraphDocument::nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Link {
	pub source: usize,
	pub target: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphDocument {
	pub nodes: Vec<Node>,
	pub links: Vec<Link>,
}

impl GraphDocument {
	/// Parses and validates the document baked into the binary.
	pub fn embedded() -> Result<Self> {
		Self::from_json(EMBEDDED_DOCUMENT)
	}

	pub fn from_json(json: &str) -> Result<Self> {
		let document: GraphDocument = serde_json::from_str(json)?;
		document.validate()?;
		Ok(document)
	}

	/// Checks that every link endpoint names an existing node.
	pub fn validate(&self) -> Result<()> {
		let node_count = self.nodes.len();
		for (link, l) in self.links.iter().enumerate() {
			for index in [l.source, l.target] {
				if index >= node_count {
					return Err(GraphError::LinkOutOfRange {
						link,
						index,
						node_count,
					});
				}
			}
		}
		Ok(())
	}
}
