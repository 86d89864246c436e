use web_sys::{Document, Element};

use super::error::{GraphError, Result};
use super::scene::{Circle, LinkLine, NodeGlyph, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// The `<svg>` currently attached under the container, if any.
pub struct SvgSurface {
	container: Element,
	svg: Option<Element>,
}

impl SvgSurface {
	pub fn new(container: Element) -> Self {
		Self {
			container,
			svg: None,
		}
	}

	pub fn container_width(&self) -> f64 {
		self.container.client_width() as f64
	}

	/// Drops the previous surface and draws `scene` onto a new one.
	pub fn replace(&mut self, scene: &Scene) -> Result<()> {
		if let Some(old) = self.svg.take() {
			old.remove();
		}
		let document = self
			.container
			.owner_document()
			.ok_or_else(|| GraphError::MissingContainer(self.container.id()))?;

		let svg = create(&document, "svg")?;
		svg.set_attribute("xmlns", SVG_NS)?;
		set_num(&svg, "width", scene.width)?;
		set_num(&svg, "height", scene.height)?;
		self.container.append_child(&svg)?;
		self.svg = Some(svg.clone());

		draw_links(&document, &svg, &scene.links)?;
		draw_nodes(&document, &svg, &scene.nodes)
	}
}

fn create(document: &Document, tag: &str) -> Result<Element> {
	Ok(document.create_element_ns(Some(SVG_NS), tag)?)
}

fn append(document: &Document, parent: &Element, tag: &str) -> Result<Element> {
	let el = create(document, tag)?;
	parent.append_child(&el)?;
	Ok(el)
}

fn set_num(el: &Element, name: &str, value: f64) -> Result<()> {
	Ok(el.set_attribute(name, &value.to_string())?)
}

fn set_circle(el: &Element, circle: &Circle) -> Result<()> {
	set_num(el, "cx", circle.cx)?;
	set_num(el, "cy", circle.cy)?;
	set_num(el, "r", circle.r)
}

fn draw_links(document: &Document, svg: &Element, links: &[LinkLine]) -> Result<()> {
	let group = append(document, svg, "g")?;
	group.set_attribute("class", "links")?;
	for line in links {
		let el = append(document, &group, "line")?;
		el.set_attribute("class", "link")?;
		set_num(&el, "x1", line.x1)?;
		set_num(&el, "y1", line.y1)?;
		set_num(&el, "x2", line.x2)?;
		set_num(&el, "y2", line.y2)?;
		el.set_attribute("style", "stroke: black")?;
	}
	Ok(())
}

fn draw_nodes(document: &Document, svg: &Element, nodes: &[NodeGlyph]) -> Result<()> {
	let group = append(document, svg, "g")?;
	group.set_attribute("class", "nodes")?;
	for glyph in nodes {
		let anchor = append(document, &group, "a")?;
		anchor.set_attribute("target", "_blank")?;
		anchor.set_attribute_ns(Some(XLINK_NS), "xlink:href", &glyph.url)?;

		let node = append(document, &anchor, "g")?;
		node.set_attribute("class", "node")?;
		node.set_attribute(
			"style",
			&format!("transform-origin: {}px {}px", glyph.circle.cx, glyph.circle.cy),
		)?;

		let circle = append(document, &node, "circle")?;
		set_circle(&circle, &glyph.circle)?;
		circle.set_attribute("fill", "white")?;
		circle.set_attribute("style", "stroke: black")?;

		let text = append(document, &node, "text")?;
		set_num(&text, "x", glyph.label_x)?;
		set_num(&text, "y", glyph.label_y)?;
		text.set_attribute("stroke", "black")?;
		text.set_attribute("text-anchor", "middle")?;
		text.set_text_content(Some(&glyph.label));

		let clip = append(document, &node, "clipPath")?;
		clip.set_attribute("id", &glyph.clip_id)?;
		set_circle(&append(document, &clip, "circle")?, &glyph.clip)?;

		let image = append(document, &node, "image")?;
		set_num(&image, "x", glyph.image_x)?;
		set_num(&image, "y", glyph.image_y)?;
		set_num(&image, "width", glyph.image_size)?;
		set_num(&image, "height", glyph.image_size)?;
		image.set_attribute_ns(Some(XLINK_NS), "xlink:href", &glyph.image_href)?;
		image.set_attribute("clip-path", &format!("url(#{})", glyph.clip_id))?;
	}
	Ok(())
}
