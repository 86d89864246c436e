//! Viewport measurement and the per-cycle scaled copy of the graph.

use super::types::{GraphDocument, Link, Node};

/// Square drawing area derived from the container width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	/// `width / reference_width`, applied to every coordinate and radius.
	pub scale: f64,
}

impl Viewport {
	pub fn from_container_width(width: f64, reference_width: f64) -> Self {
		Self {
			width,
			height: width,
			scale: width / reference_width,
		}
	}

	/// Converts a length in reference units to viewport units.
	pub fn scaled(&self, length: f64) -> f64 {
		length * self.scale
	}
}

/// A deep copy of the reference document with coordinates already in viewport
/// units. Only constructible from an unscaled document, so scaling can't stack.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedGraph {
	nodes: Vec<Node>,
	links: Vec<Link>,
	node_radius: f64,
}

impl NormalizedGraph {
	pub fn from_reference(reference: &GraphDocument, viewport: &Viewport, node_radius: f64) -> Self {
		let mut nodes = reference.nodes.clone();
		for node in &mut nodes {
			node.x *= viewport.scale;
			node.y *= viewport.scale;
		}
		Self {
			nodes,
			links: reference.links.clone(),
			node_radius: viewport.scaled(node_radius),
		}
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}

	pub fn node_radius(&self) -> f64 {
		self.node_radius
	}
}
