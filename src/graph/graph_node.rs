/// Node rendering: circle glyph with a centered name label.

use crate::core::config;
use crate::core::types::{Color, Node};
use crate::platform::renderer::Renderer;

pub struct GraphNodeRenderer;

impl GraphNodeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, renderer: &dyn Renderer, node: &Node, highlight: bool) {
        let fill = if highlight {
            config::NODE_FILL_HIGHLIGHT
        } else {
            config::NODE_FILL
        };

        renderer.fill_circle(
            node.x,
            node.y,
            config::NODE_RADIUS,
            Color::from_hex(fill, 1.0),
        );
        renderer.stroke_circle(
            node.x,
            node.y,
            config::NODE_RADIUS,
            Color::from_hex(config::NODE_BORDER, 1.0),
            config::NODE_BORDER_WIDTH,
        );
        renderer.draw_text_centered(
            node.x,
            node.y + config::NODE_LABEL_BASELINE,
            &node.id,
            config::NODE_FONT_SIZE,
            Color::from_hex(config::TEXT_COLOR, 1.0),
        );
    }
}

impl Default for GraphNodeRenderer {
    fn default() -> Self {
        Self::new()
    }
}
