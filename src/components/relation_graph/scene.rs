//! Geometry of one draw cycle, independent of the DOM.

use super::config::RendererConfig;
use super::error::{GraphError, Result};
use super::scale::{NormalizedGraph, Viewport};
use super::types::Node;

#[derive(Clone, Debug, PartialEq)]
pub struct LinkLine {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	pub cx: f64,
	pub cy: f64,
	pub r: f64,
}

/// Everything drawn for a single person, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGlyph {
	pub circle: Circle,
	pub label: String,
	pub label_x: f64,
	pub label_y: f64,
	pub clip_id: String,
	pub clip: Circle,
	/// Top-left corner of the square portrait.
	pub image_x: f64,
	pub image_y: f64,
	pub image_size: f64,
	pub image_href: String,
	pub url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	pub width: f64,
	pub height: f64,
	pub links: Vec<LinkLine>,
	pub nodes: Vec<NodeGlyph>,
}

pub fn clip_id(index: usize) -> String {
	format!("clipCircle{index}")
}

fn resolve(nodes: &[Node], link: usize, index: usize) -> Result<&Node> {
	nodes.get(index).ok_or(GraphError::LinkOutOfRange {
		link,
		index,
		node_count: nodes.len(),
	})
}

impl Scene {
	pub fn compose(graph: &NormalizedGraph, viewport: &Viewport, config: &RendererConfig) -> Result<Self> {
		let nodes = graph.nodes();
		let links = graph
			.links()
			.iter()
			.enumerate()
			.map(|(i, l)| {
				let (src, tgt) = (resolve(nodes, i, l.source)?, resolve(nodes, i, l.target)?);
				Ok(LinkLine {
					x1: src.x,
					y1: src.y,
					x2: tgt.x,
					y2: tgt.y,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		let radius = graph.node_radius();
		let (label_gap, clip_inset) = (viewport.scaled(config.label_gap), viewport.scaled(config.clip_inset));
		let nodes = nodes
			.iter()
			.enumerate()
			.map(|(i, node)| NodeGlyph {
				circle: Circle {
					cx: node.x,
					cy: node.y,
					r: radius,
				},
				label: node.name.clone(),
				label_x: node.x,
				label_y: node.y - radius - label_gap,
				clip_id: clip_id(i),
				clip: Circle {
					cx: node.x,
					cy: node.y,
					r: radius - clip_inset,
				},
				image_x: node.x - radius,
				image_y: node.y - radius,
				image_size: radius * 2.0,
				image_href: node.img.clone(),
				url: node.url.clone(),
			})
			.collect();

		Ok(Self {
			width: viewport.width,
			height: viewport.height,
			links,
			nodes,
		})
	}
}
