/// Built-in route map: cities of the eastern Mediterranean trade network,
/// with per-road cost and capacity. The backend indexes the same cities by
/// number; `node_names` is that fixed id-to-name table.

use crate::backend::results::NodeNames;
use crate::core::types::{Edge, Node};

pub fn default_nodes() -> Vec<Node> {
    vec![
        Node::new("Cairo", 60.0, 260.0),
        Node::new("Damietta", 160.0, 80.0),
        Node::new("Arish", 160.0, 360.0),
        Node::new("Acre", 300.0, 100.0),
        Node::new("Gaza", 300.0, 460.0),
        Node::new("Sidon", 450.0, 1.0),
        Node::new("Jerusalem", 450.0, 460.0),
        Node::new("Tripoli", 670.0, 1.0),
        Node::new("Damascus", 640.0, 300.0),
        Node::new("Homs", 790.0, 70.0),
        Node::new("Hamah", 780.0, 440.0),
        Node::new("Aleppo", 880.0, 260.0),
    ]
}

pub fn default_edges() -> Vec<Edge> {
    vec![
        Edge::flow("Cairo", "Damietta", 2, 5),
        Edge::flow("Cairo", "Arish", 6, 6),
        Edge::flow("Cairo", "Acre", 9, 2),
        Edge::flow("Damietta", "Arish", 6, 4),
        Edge::flow("Damietta", "Gaza", 7, 3),
        Edge::flow("Damietta", "Acre", 9, 2),
        Edge::flow("Arish", "Gaza", 2, 6),
        Edge::flow("Arish", "Jerusalem", 6, 3),
        Edge::flow("Arish", "Acre", 7, 1),
        Edge::flow("Arish", "Damascus", 10, 1),
        Edge::flow("Gaza", "Jerusalem", 5, 6),
        Edge::flow("Gaza", "Acre", 6, 3),
        Edge::flow("Jerusalem", "Acre", 3, 5),
        Edge::flow("Jerusalem", "Sidon", 7, 2),
        Edge::flow("Jerusalem", "Damascus", 6, 4),
        Edge::flow("Jerusalem", "Aleppo", 12, 2),
        Edge::flow("Acre", "Sidon", 3, 6),
        Edge::flow("Acre", "Tripoli", 4, 4),
        Edge::flow("Acre", "Damascus", 8, 1),
        Edge::flow("Sidon", "Tripoli", 2, 6),
        Edge::flow("Sidon", "Homs", 6, 2),
        Edge::flow("Sidon", "Damascus", 7, 2),
        Edge::flow("Tripoli", "Homs", 4, 5),
        Edge::flow("Tripoli", "Hamah", 5, 2),
        Edge::flow("Tripoli", "Aleppo", 6, 2),
        Edge::flow("Homs", "Hamah", 2, 6),
        Edge::flow("Homs", "Damascus", 4, 3),
        Edge::flow("Homs", "Aleppo", 5, 3),
        Edge::flow("Hamah", "Damascus", 3, 3),
        Edge::flow("Hamah", "Aleppo", 4, 6),
        Edge::flow("Damascus", "Homs", 4, 1),
        Edge::flow("Damascus", "Hamah", 3, 2),
        Edge::flow("Damascus", "Aleppo", 2, 5),
    ]
}

pub fn node_names() -> NodeNames {
    NodeNames::new(&[
        (0, "Cairo"),
        (1, "Damietta"),
        (2, "Arish"),
        (3, "Gaza"),
        (4, "Jerusalem"),
        (5, "Acre"),
        (6, "Sidon"),
        (7, "Tripoli"),
        (8, "Homs"),
        (9, "Hamah"),
        (10, "Damascus"),
        (11, "Aleppo"),
    ])
}
