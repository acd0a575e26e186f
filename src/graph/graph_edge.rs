/// Directed edge rendering: arrow shaft, head, and mode-dependent label.

use crate::core::config;
use crate::core::types::{Color, Edge, LabelMode, Node, Vec2};
use crate::platform::renderer::Renderer;
use std::f64::consts::PI;

pub struct GraphEdgeRenderer;

impl GraphEdgeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render an edge between two nodes.
    pub fn render(
        &self,
        renderer: &dyn Renderer,
        edge: &Edge,
        from: &Node,
        to: &Node,
        mode: LabelMode,
        color: Color,
        line_width: f64,
    ) {
        self.draw_arrow(renderer, from, to, color, line_width);

        let label = edge_label(edge, mode);
        if !label.is_empty() {
            let mid = (Vec2::new(from.x, from.y) + Vec2::new(to.x, to.y)) * 0.5;
            renderer.draw_text(
                mid.x + config::LABEL_OFFSET_X,
                mid.y + config::LABEL_OFFSET_Y,
                &label,
                config::EDGE_FONT_SIZE,
                Color::from_hex(config::TEXT_COLOR, 1.0),
            );
        }
    }

    /// Shaft from circle boundary to circle boundary, head corners rotated
    /// +-30 degrees off the shaft direction.
    fn draw_arrow(
        &self,
        renderer: &dyn Renderer,
        from: &Node,
        to: &Node,
        color: Color,
        line_width: f64,
    ) {
        let angle = (to.y - from.y).atan2(to.x - from.x);
        let offset = Vec2::new(
            config::NODE_RADIUS * angle.cos(),
            config::NODE_RADIUS * angle.sin(),
        );

        let start = Vec2::new(from.x, from.y) + offset;
        let end = Vec2::new(to.x, to.y) - offset;

        renderer.draw_line(start, end, color, line_width);

        let left = Vec2::new(
            end.x - config::ARROW_HEAD_LEN * (angle - PI / 6.0).cos(),
            end.y - config::ARROW_HEAD_LEN * (angle - PI / 6.0).sin(),
        );
        let right = Vec2::new(
            end.x - config::ARROW_HEAD_LEN * (angle + PI / 6.0).cos(),
            end.y - config::ARROW_HEAD_LEN * (angle + PI / 6.0).sin(),
        );
        renderer.fill_triangle(end, left, right, color);
    }
}

impl Default for GraphEdgeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Label text for an edge under the given mode. A missing field renders as
/// the empty string; Dual requires both fields.
pub fn edge_label(edge: &Edge, mode: LabelMode) -> String {
    let fmt = |v: Option<i64>| v.map(|v| v.to_string()).unwrap_or_default();

    match mode {
        LabelMode::Cost => fmt(edge.cost),
        LabelMode::Capacity => fmt(edge.capacity),
        LabelMode::Weight => fmt(edge.weight),
        LabelMode::Dual => match (edge.cost, edge.capacity) {
            (Some(cost), Some(capacity)) => format!("{} | {}", cost, capacity),
            _ => String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_selects_active_field() {
        let edge = Edge::flow("A", "B", 4, 3);
        assert_eq!(edge_label(&edge, LabelMode::Cost), "4");
        assert_eq!(edge_label(&edge, LabelMode::Capacity), "3");
        assert_eq!(edge_label(&edge, LabelMode::Dual), "4 | 3");
    }

    #[test]
    fn test_label_weight_mode() {
        let edge = Edge::weighted("A", "B", 5);
        assert_eq!(edge_label(&edge, LabelMode::Weight), "5");
    }

    #[test]
    fn test_label_missing_field_is_empty() {
        let weighted = Edge::weighted("A", "B", 5);
        assert_eq!(edge_label(&weighted, LabelMode::Cost), "");
        assert_eq!(edge_label(&weighted, LabelMode::Capacity), "");
        assert_eq!(edge_label(&weighted, LabelMode::Dual), "");

        let flow = Edge::flow("A", "B", 4, 3);
        assert_eq!(edge_label(&flow, LabelMode::Weight), "");
    }
}
