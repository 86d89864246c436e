use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use super::config::RendererConfig;
use super::debounce::ResizeDebounce;
use super::error::Result;
use super::render::SvgSurface;
use super::state::ViewportRenderer;
use super::types::GraphDocument;

struct Mounted {
	renderer: ViewportRenderer,
	surface: SvgSurface,
}

impl Mounted {
	fn draw(&mut self) -> Result<()> {
		let scene = self.renderer.scene()?;
		self.surface.replace(&scene)?;
		debug!(
			"drew {} nodes, {} links at {}x{}",
			scene.nodes.len(),
			scene.links.len(),
			scene.width,
			scene.height
		);
		Ok(())
	}

	fn redraw(&mut self, width: f64) -> Result<()> {
		self.renderer.reinitialize(width);
		self.draw()
	}
}

#[component]
pub fn RelationGraph(
	document: GraphDocument,
	#[prop(default = RendererConfig::default())] config: RendererConfig,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));
	let debounce: Rc<RefCell<ResizeDebounce<i32>>> = Rc::new(RefCell::new(ResizeDebounce::new()));
	let settle_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let container_id = config.container_id.clone();

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		if mounted.borrow().is_some() {
			return;
		}
		let container: Element = container.into();
		let Some(window) = web_sys::window() else {
			error!("no window; graph not rendered");
			return;
		};

		let surface = SvgSurface::new(container);
		let renderer = ViewportRenderer::new(document.clone(), config.clone(), surface.container_width());
		let mut initial = Mounted { renderer, surface };
		if let Err(e) = initial.draw() {
			error!("initial render failed: {e}");
		}
		*mounted.borrow_mut() = Some(initial);

		let (mounted_settle, debounce_settle) = (mounted.clone(), debounce.clone());
		*settle_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(width) = debounce_settle.borrow_mut().fire() else {
				return;
			};
			info!("Resize End");
			if let Some(ref mut m) = *mounted_settle.borrow_mut() {
				if let Err(e) = m.redraw(width) {
					error!("redraw at width {width} failed: {e}");
				}
			}
		}));

		let (mounted_resize, settle_resize, window_resize) = (mounted.clone(), settle_cb.clone(), window.clone());
		let debounce_resize = debounce.clone();
		let delay = config.resize_debounce_ms as i32;
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(width) = mounted_resize.borrow().as_ref().map(|m| m.surface.container_width()) else {
				return;
			};
			let Some(handle) = arm_settle(&window_resize, &settle_resize, delay) else {
				return;
			};
			if let Some(stale) = debounce_resize.borrow_mut().signal(width, handle) {
				window_resize.clear_timeout_with_handle(stale);
			}
		}));
		// Listener and timer closures live as long as the page.
		if let Some(ref cb) = *resize_cb.borrow() {
			if let Err(e) = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref()) {
				error!("failed to listen for resize: {e:?}");
			}
		}
	});

	view! { <div id=container_id node_ref=container_ref class="relation-graph" /> }
}

/// Arms a settle timer, returning its handle.
fn arm_settle(window: &Window, settle_cb: &RefCell<Option<Closure<dyn FnMut()>>>, delay: i32) -> Option<i32> {
	let cb = settle_cb.borrow();
	let cb = cb.as_ref()?;
	window
		.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay)
		.map_err(|e| error!("failed to schedule resize settle: {e:?}"))
		.ok()
}
