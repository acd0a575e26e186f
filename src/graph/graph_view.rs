/// Graph view: active label mode, run sequencing, and frame rendering.
///
/// One run per algorithm mode. Each run sets the label mode, supersedes any
/// in-flight playback via a fresh generation token, resolves the backend id
/// paths to display names, and publishes its summary line immediately; the
/// playback then reveals the run's paths one edge per step.

use crate::backend::results::{BackendSnapshot, NodeNames};
use crate::core::config;
use crate::core::types::{Color, KeyEvent, LabelMode, RouteGraph};
use crate::graph::animation::Playback;
use crate::graph::graph_edge::GraphEdgeRenderer;
use crate::graph::graph_node::GraphNodeRenderer;
use crate::platform::renderer::Renderer;

pub struct GraphView {
    graph: RouteGraph,
    names: NodeNames,
    snapshot: Option<BackendSnapshot>,

    // Run state
    mode: LabelMode,
    generation: u64,
    playback: Option<Playback>,
    summary: Option<String>,

    // Renderers
    node_renderer: GraphNodeRenderer,
    edge_renderer: GraphEdgeRenderer,
}

impl GraphView {
    pub fn new(names: NodeNames) -> Self {
        Self {
            graph: RouteGraph::default(),
            names,
            snapshot: None,
            mode: LabelMode::Cost,
            generation: 0,
            playback: None,
            summary: None,
            node_renderer: GraphNodeRenderer::new(),
            edge_renderer: GraphEdgeRenderer::new(),
        }
    }

    /// Swap in a new graph, centered on the surface. An in-flight run refers
    /// to the old layout, so it is superseded.
    pub fn set_graph(&mut self, graph: RouteGraph) {
        self.graph = graph;
        self.graph
            .center(config::SURFACE_W as f64, config::SURFACE_H as f64);
        self.generation += 1;
        self.playback = None;
    }

    pub fn set_snapshot(&mut self, snapshot: BackendSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn handle_key(&mut self, e: &KeyEvent) {
        if !e.pressed {
            return;
        }

        match e.keycode {
            // 1: shortest path
            10 => self.run_shortest_path(),
            // 2: max flow
            11 => self.run_max_flow(),
            // 3: min-cost flow
            12 => self.run_min_cost_flow(),
            _ => {}
        }
    }

    pub fn run_shortest_path(&mut self) {
        self.mode = LabelMode::Cost;
        let result = match self.snapshot.as_ref().and_then(|s| s.dijkstra.as_ref()) {
            Some(r) => r,
            None => return,
        };

        let summary = format!("Shortest path cost = {}", result.cost);
        let id_paths = vec![result.path.clone()];
        self.start_run(id_paths, config::HIGHLIGHT_SHORTEST, summary);
    }

    pub fn run_max_flow(&mut self) {
        self.mode = LabelMode::Capacity;
        let result = match self.snapshot.as_ref().and_then(|s| s.dinic.as_ref()) {
            Some(r) => r,
            None => return,
        };

        let summary = format!("Maximum flow = {}", result.max_flow);
        let id_paths = result.paths.clone();
        self.start_run(id_paths, config::HIGHLIGHT_FLOW, summary);
    }

    pub fn run_min_cost_flow(&mut self) {
        self.mode = LabelMode::Dual;
        let result = match self.snapshot.as_ref().and_then(|s| s.mcmf.as_ref()) {
            Some(r) => r,
            None => return,
        };

        let summary = format!("Total min cost = {}", result.total_cost);
        let id_paths: Vec<Vec<u32>> = result.paths.iter().map(|p| p.nodes.clone()).collect();
        self.start_run(id_paths, config::HIGHLIGHT_MINCOST, summary);
    }

    /// Steps shared by every mode run: supersede the previous run, resolve
    /// the backend id paths, start playback, publish the summary. An unknown
    /// id fails the run before anything is animated or published.
    fn start_run(&mut self, id_paths: Vec<Vec<u32>>, color_hex: u32, summary: String) {
        self.generation += 1;
        self.playback = None;

        let mut paths = Vec::with_capacity(id_paths.len());
        for ids in &id_paths {
            match self.names.resolve_path(ids) {
                Ok(path) => paths.push(path),
                Err(e) => {
                    log::error!("run aborted: {}", e);
                    return;
                }
            }
        }

        log::info!("{}", summary);
        self.playback = Some(Playback::new(
            paths,
            Color::from_hex(color_hex, 1.0),
            self.generation,
        ));
        self.summary = Some(summary);
    }

    pub fn update(&mut self, dt_ms: f64) {
        let result = match self.playback.as_mut() {
            Some(playback) => playback.tick(dt_ms, &self.graph, self.generation),
            None => return,
        };

        if let Err(e) = result {
            log::error!("animation aborted: {}", e);
            self.playback = None;
        }
    }

    pub fn render(&self, renderer: &dyn Renderer, width: f64, height: f64) {
        // Full clear; every frame is a complete redraw.
        renderer.fill_rect(
            0.0,
            0.0,
            width,
            height,
            Color::from_hex(config::BG_COLOR, 1.0),
        );

        let playback = self.playback.as_ref();
        let default_color = Color::from_hex(config::EDGE_DEFAULT, 1.0);
        let highlight_color = playback.map(|p| p.color()).unwrap_or(default_color);

        // Edges first so node circles occlude arrow overdraw.
        for edge in self.graph.edges() {
            let from = match self.graph.find_node(&edge.from) {
                Some(n) => n,
                None => continue,
            };
            let to = match self.graph.find_node(&edge.to) {
                Some(n) => n,
                None => continue,
            };

            let active = playback
                .map(|p| {
                    p.revealed_edges()
                        .iter()
                        .any(|k| k.from == edge.from && k.to == edge.to)
                })
                .unwrap_or(false);
            let (color, line_width) = if active {
                (highlight_color, config::EDGE_WIDTH_HIGHLIGHT)
            } else {
                (default_color, config::EDGE_WIDTH)
            };

            self.edge_renderer
                .render(renderer, edge, from, to, self.mode, color, line_width);
        }

        for node in self.graph.nodes() {
            let highlight = playback
                .map(|p| p.highlight_nodes().iter().any(|id| id == &node.id))
                .unwrap_or(false);
            self.node_renderer.render(renderer, node, highlight);
        }

        if let Some(summary) = &self.summary {
            renderer.draw_text(
                16.0,
                28.0,
                summary,
                config::SUMMARY_FONT_SIZE,
                Color::from_hex(config::SUMMARY_COLOR, 1.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::results::{
        FlowPath, MaxFlowResult, MinCostFlowResult, ShortestPathResult,
    };
    use crate::core::types::{Edge, Node, Vec2};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingRenderer {
        rects: Cell<usize>,
        lines: Cell<usize>,
        triangles: Cell<usize>,
        fill_circles: Cell<usize>,
        stroke_circles: Cell<usize>,
        texts: RefCell<Vec<String>>,
        centered_texts: RefCell<Vec<String>>,
    }

    impl Renderer for RecordingRenderer {
        fn begin_frame(&mut self, _width: i32, _height: i32) {}
        fn end_frame(&mut self) {}

        fn fill_rect(&self, _x: f64, _y: f64, _w: f64, _h: f64, _color: Color) {
            self.rects.set(self.rects.get() + 1);
        }

        fn draw_line(&self, _a: Vec2, _b: Vec2, _color: Color, _line_width: f64) {
            self.lines.set(self.lines.get() + 1);
        }

        fn fill_triangle(&self, _a: Vec2, _b: Vec2, _c: Vec2, _color: Color) {
            self.triangles.set(self.triangles.get() + 1);
        }

        fn fill_circle(&self, _cx: f64, _cy: f64, _radius: f64, _color: Color) {
            self.fill_circles.set(self.fill_circles.get() + 1);
        }

        fn stroke_circle(&self, _cx: f64, _cy: f64, _radius: f64, _color: Color, _lw: f64) {
            self.stroke_circles.set(self.stroke_circles.get() + 1);
        }

        fn draw_text(&self, _x: f64, _y: f64, text: &str, _size: f64, _color: Color) {
            self.texts.borrow_mut().push(text.to_string());
        }

        fn draw_text_centered(&self, _x: f64, _y: f64, text: &str, _size: f64, _color: Color) {
            self.centered_texts.borrow_mut().push(text.to_string());
        }
    }

    fn triangle_view() -> GraphView {
        let graph = RouteGraph::new(
            vec![
                Node::new("A", 0.0, 0.0),
                Node::new("B", 100.0, 0.0),
                Node::new("C", 50.0, 100.0),
            ],
            vec![
                Edge::flow("A", "B", 1, 2),
                Edge::flow("B", "C", 3, 4),
                Edge::flow("A", "C", 5, 6),
            ],
        )
        .unwrap();

        let mut view = GraphView::new(NodeNames::new(&[(0, "A"), (1, "B"), (2, "C")]));
        view.set_graph(graph);
        view
    }

    fn revealed(view: &GraphView) -> Vec<(String, String)> {
        view.playback
            .as_ref()
            .map(|p| {
                p.revealed_edges()
                    .iter()
                    .map(|k| (k.from.clone(), k.to.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_run_without_snapshot_has_no_side_effects() {
        let mut view = triangle_view();
        view.run_shortest_path();

        assert_eq!(view.mode, LabelMode::Cost);
        assert!(view.playback.is_none());
        assert!(view.summary.is_none());
    }

    #[test]
    fn test_run_without_mode_section_is_noop() {
        let mut view = triangle_view();
        view.set_snapshot(BackendSnapshot::default());
        view.run_max_flow();

        assert_eq!(view.mode, LabelMode::Capacity);
        assert!(view.playback.is_none());
        assert!(view.summary.is_none());
    }

    #[test]
    fn test_run_publishes_summary_before_animation_completes() {
        let mut view = triangle_view();
        view.set_snapshot(BackendSnapshot {
            dijkstra: Some(ShortestPathResult {
                path: vec![0, 1, 2],
                cost: 4,
            }),
            ..Default::default()
        });

        view.run_shortest_path();

        assert_eq!(view.summary(), Some("Shortest path cost = 4"));
        assert!(view.playback.is_some());
        assert!(revealed(&view).is_empty());
    }

    #[test]
    fn test_shortest_path_animates_in_path_order() {
        let mut view = triangle_view();
        view.set_snapshot(BackendSnapshot {
            dijkstra: Some(ShortestPathResult {
                path: vec![0, 1, 2],
                cost: 4,
            }),
            ..Default::default()
        });

        view.run_shortest_path();
        view.update(0.0);
        assert_eq!(revealed(&view), vec![("A".to_string(), "B".to_string())]);

        view.update(config::STEP_MS);
        assert_eq!(
            revealed(&view),
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string()),
            ]
        );
    }

    #[test]
    fn test_new_run_supersedes_previous() {
        let mut view = triangle_view();
        view.set_snapshot(BackendSnapshot {
            dijkstra: Some(ShortestPathResult {
                path: vec![0, 1, 2],
                cost: 4,
            }),
            dinic: Some(MaxFlowResult {
                paths: vec![vec![0, 2]],
                max_flow: 6,
            }),
            ..Default::default()
        });

        view.run_shortest_path();
        view.update(0.0);
        let generation_a = view.generation;

        view.run_max_flow();
        assert_eq!(view.generation, generation_a + 1);
        view.update(0.0);

        // Nothing from run A survives; the screen belongs to run B.
        assert_eq!(revealed(&view), vec![("A".to_string(), "C".to_string())]);
        assert_eq!(view.summary(), Some("Maximum flow = 6"));
        assert_eq!(view.mode, LabelMode::Capacity);
    }

    #[test]
    fn test_min_cost_flow_plays_paths_sequentially() {
        let mut view = triangle_view();
        view.set_snapshot(BackendSnapshot {
            mcmf: Some(MinCostFlowResult {
                paths: vec![
                    FlowPath { nodes: vec![0, 1] },
                    FlowPath { nodes: vec![1, 2] },
                ],
                total_cost: 9,
            }),
            ..Default::default()
        });

        view.run_min_cost_flow();
        assert_eq!(view.mode, LabelMode::Dual);
        assert_eq!(view.summary(), Some("Total min cost = 9"));

        view.update(0.0);
        assert_eq!(revealed(&view), vec![("A".to_string(), "B".to_string())]);

        view.update(config::STEP_MS);
        let playback = view.playback.as_ref().unwrap();
        assert_eq!(playback.completed_paths(), 1);
        assert_eq!(revealed(&view), vec![("B".to_string(), "C".to_string())]);
    }

    #[test]
    fn test_unknown_backend_id_aborts_run_without_summary() {
        let mut view = triangle_view();
        view.set_snapshot(BackendSnapshot {
            dijkstra: Some(ShortestPathResult {
                path: vec![0, 99],
                cost: 1,
            }),
            ..Default::default()
        });

        view.run_shortest_path();

        assert!(view.playback.is_none());
        assert!(view.summary.is_none());
    }

    #[test]
    fn test_missing_path_edge_fails_the_run() {
        let mut view = triangle_view();
        // B -> A exists in no dataset edge.
        view.set_snapshot(BackendSnapshot {
            dijkstra: Some(ShortestPathResult {
                path: vec![0, 1, 0],
                cost: 2,
            }),
            ..Default::default()
        });

        view.run_shortest_path();
        view.update(0.0);
        assert!(view.playback.is_some());

        view.update(config::STEP_MS);
        assert!(view.playback.is_none());
    }

    #[test]
    fn test_render_shape_matches_graph() {
        let view = triangle_view();
        let renderer = RecordingRenderer::default();
        view.render(&renderer, 200.0, 200.0);

        // Background + one shaft/head per edge + one filled/stroked circle
        // and centered label per node; no summary yet.
        assert_eq!(renderer.rects.get(), 1);
        assert_eq!(renderer.lines.get(), 3);
        assert_eq!(renderer.triangles.get(), 3);
        assert_eq!(renderer.fill_circles.get(), 3);
        assert_eq!(renderer.stroke_circles.get(), 3);
        assert_eq!(
            *renderer.centered_texts.borrow(),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
        assert!(renderer
            .texts
            .borrow()
            .iter()
            .all(|t| !t.contains("cost")));
    }

    #[test]
    fn test_render_draws_summary_after_run() {
        let mut view = triangle_view();
        view.set_snapshot(BackendSnapshot {
            dijkstra: Some(ShortestPathResult {
                path: vec![0, 1],
                cost: 1,
            }),
            ..Default::default()
        });
        view.run_shortest_path();

        let renderer = RecordingRenderer::default();
        view.render(&renderer, 200.0, 200.0);
        assert!(renderer
            .texts
            .borrow()
            .iter()
            .any(|t| t == "Shortest path cost = 1"));
    }
}
