use routeviz::backend::{dataset, results};
use routeviz::core::config;
use routeviz::core::types::RouteGraph;
use routeviz::graph::graph_view::GraphView;
use routeviz::platform::renderer::Renderer;
use routeviz::platform::renderer_cairo::RendererCairo;
use routeviz::platform::window_x11::WindowX11;
use std::path::Path;
use std::time::Instant;

struct Args {
    data_path: String,
}

fn parse_args() -> Args {
    let mut args = Args {
        data_path: "data.json".to_string(),
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--data" if i + 1 < argv.len() => {
                i += 1;
                args.data_path = argv[i].clone();
            }
            _ => {}
        }
        i += 1;
    }

    args
}

fn main() {
    env_logger::init();

    let args = parse_args();

    let graph = match RouteGraph::new(dataset::default_nodes(), dataset::default_edges()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("invalid built-in route map: {}", e);
            std::process::exit(1);
        }
    };

    let mut view = GraphView::new(dataset::node_names());
    view.set_graph(graph);

    // One fetch at startup; a failure leaves the snapshot absent and every
    // mode run a no-op until restart.
    match results::load_snapshot(Path::new(&args.data_path)) {
        Ok(snapshot) => view.set_snapshot(snapshot),
        Err(e) => log::error!("failed to load backend data: {}", e),
    }

    // Create window
    let mut window = WindowX11::new();
    if !window.create(config::SURFACE_W, config::SURFACE_H, "Route Viz") {
        eprintln!("Failed to create X11 window");
        std::process::exit(1);
    }

    // Create renderer
    let cr = match window.create_cairo_context() {
        Some(cr) => cr,
        None => {
            eprintln!("Failed to create Cairo context");
            std::process::exit(1);
        }
    };
    let mut renderer = RendererCairo::new(cr);

    println!("1: shortest path   2: max flow   3: min-cost flow   Ctrl+Q: quit");

    let mut last_time = Instant::now();

    // Main loop
    'main: loop {
        if !window.poll_events() {
            break;
        }

        for event in window.take_key_events() {
            // Ctrl+Q: quit
            if event.pressed && event.ctrl && event.keycode == 24 {
                break 'main;
            }
            view.handle_key(&event);
        }

        // Delta time
        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f64() * 1000.0;
        last_time = now;

        view.update(dt);

        // Render
        if let Some(cr) = window.create_cairo_context() {
            renderer.set_context(cr);
        }

        renderer.begin_frame(window.width(), window.height());
        view.render(&renderer, window.width() as f64, window.height() as f64);
        renderer.end_frame();

        window.flush();

        // Cap at ~60fps
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}
