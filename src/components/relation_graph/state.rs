use log::debug;

use super::config::RendererConfig;
use super::error::Result;
use super::scale::{NormalizedGraph, Viewport};
use super::scene::Scene;
use super::types::GraphDocument;

/// Owns the reference document and the layout derived from the current
/// container width. Every cycle starts again from the reference.
pub struct ViewportRenderer {
	config: RendererConfig,
	reference: GraphDocument,
	viewport: Viewport,
	graph: NormalizedGraph,
}

impl ViewportRenderer {
	pub fn new(reference: GraphDocument, config: RendererConfig, container_width: f64) -> Self {
		let viewport = Viewport::from_container_width(container_width, config.reference_width);
		let graph = NormalizedGraph::from_reference(&reference, &viewport, config.node_radius);
		Self {
			config,
			reference,
			viewport,
			graph,
		}
	}

	/// Measures a fresh viewport and rebuilds the scaled copy from the reference.
	pub fn reinitialize(&mut self, container_width: f64) {
		self.viewport = Viewport::from_container_width(container_width, self.config.reference_width);
		self.normalize();
	}

	fn normalize(&mut self) {
		self.graph = NormalizedGraph::from_reference(&self.reference, &self.viewport, self.config.node_radius);
		debug!(
			"normalized {} nodes at scale {:.3} (radius {:.1})",
			self.graph.nodes().len(),
			self.viewport.scale,
			self.graph.node_radius()
		);
	}

	pub fn scene(&self) -> Result<Scene> {
		Scene::compose(&self.graph, &self.viewport, &self.config)
	}

	#[cfg(test)]
	pub fn viewport(&self) -> &Viewport {
		&self.viewport
	}

	#[cfg(test)]
	pub fn graph(&self) -> &NormalizedGraph {
		&self.graph
	}

	#[cfg(test)]
	pub fn reference(&self) -> &GraphDocument {
		&self.reference
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn renderer(width: f64) -> ViewportRenderer {
		ViewportRenderer::new(GraphDocument::embedded().unwrap(), RendererConfig::default(), width)
	}

	#[test]
	fn repeated_cycles_at_same_width_are_identical() {
		let mut r = renderer(733.0);
		let first = r.graph().clone();
		for _ in 0..5 {
			r.reinitialize(733.0);
			assert_eq!(r.graph(), &first);
		}
		let bits = |g: &NormalizedGraph| -> Vec<(u64, u64)> {
			g.nodes().iter().map(|n| (n.x.to_bits(), n.y.to_bits())).collect()
		};
		assert_eq!(bits(r.graph()), bits(&first));
	}

	#[test]
	fn resize_rescales_from_reference() {
		let mut r = renderer(1000.0);
		r.reinitialize(500.0);
		r.reinitialize(250.0);
		assert_eq!(r.viewport().scale, 0.25);
		assert_eq!(r.viewport().height, 250.0);
		for (scaled, original) in r.graph().nodes().iter().zip(&r.reference().nodes) {
			assert_eq!(scaled.x, original.x * 0.25);
			assert_eq!(scaled.y, original.y * 0.25);
		}
		assert_eq!(r.graph().node_radius(), 15.0);
	}

	#[test]
	fn reference_survives_many_cycles() {
		let original = GraphDocument::embedded().unwrap();
		let mut r = renderer(300.0);
		for width in [300.0, 1200.0, 480.0] {
			r.reinitialize(width);
			r.scene().unwrap();
		}
		assert_eq!(r.reference(), &original);
	}

	#[test]
	fn scene_matches_viewport() {
		let r = renderer(640.0);
		let scene = r.scene().unwrap();
		assert_eq!((scene.width, scene.height), (640.0, 640.0));
		assert_eq!(scene.nodes.len(), r.reference().nodes.len());
		assert_eq!(scene.links.len(), r.reference().links.len());
	}
}
