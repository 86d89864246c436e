/// Width the embedded coordinates were authored against.
pub const REFERENCE_WIDTH: f64 = 1000.0;
pub const NODE_RADIUS: f64 = 60.0;
/// Gap between the top of a node circle and its label baseline, in reference units.
pub const LABEL_GAP: f64 = 10.0;
/// How far the portrait clip circle sits inside the node circle, in reference units.
pub const CLIP_INSET: f64 = 10.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 300;
pub const CONTAINER_ID: &str = "visualization";

#[derive(Clone, Debug, PartialEq)]
pub struct RendererConfig {
	pub container_id: String,
	pub reference_width: f64,
	pub node_radius: f64,
	pub label_gap: f64,
	pub clip_inset: f64,
	pub resize_debounce_ms: u32,
}

impl Default for RendererConfig {
	fn default() -> Self {
		Self {
			container_id: CONTAINER_ID.into(),
			reference_width: REFERENCE_WIDTH,
			node_radius: NODE_RADIUS,
			label_gap: LABEL_GAP,
			clip_inset: CLIP_INSET,
			resize_debounce_ms: RESIZE_DEBOUNCE_MS,
		}
	}
}
