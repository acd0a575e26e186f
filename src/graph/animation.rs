/// Timed playback of highlighted paths over the route graph.
///
/// One `Playback` covers one run: an ordered list of paths revealed edge by
/// edge at a fixed cadence, all under the generation token captured when the
/// run started. The frame loop drives it with delta-time; there are no
/// self-rescheduling callbacks.

use crate::core::config;
use crate::core::types::{Color, EdgeKey, RouteGraph};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("no edge between consecutive path nodes {from} -> {to}")]
    MissingEdge { from: String, to: String },
}

/// Outcome of one playback tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No step was due.
    Idle,
    /// At least one edge was revealed.
    Advanced,
    /// Every path has completed.
    Finished,
    /// A newer run owns the screen; nothing was revealed or completed.
    Cancelled,
}

pub struct Playback {
    paths: Vec<Vec<String>>,
    color: Color,
    generation: u64,

    // Cursor state: which path, and how far into it.
    current: usize,
    cursor: usize,
    revealed: Vec<EdgeKey>,

    elapsed: f64,
    finished: bool,
    completed_paths: usize,
}

impl Playback {
    pub fn new(paths: Vec<Vec<String>>, color: Color, generation: u64) -> Self {
        Self {
            paths,
            color,
            generation,
            current: 0,
            cursor: 0,
            revealed: Vec::new(),
            // The first step is due on the first tick.
            elapsed: config::STEP_MS,
            finished: false,
            completed_paths: 0,
        }
    }

    /// Advance the playback clock. The generation check runs before anything
    /// else: a superseded playback neither reveals nor completes.
    pub fn tick(
        &mut self,
        dt_ms: f64,
        graph: &RouteGraph,
        current_generation: u64,
    ) -> Result<Tick, PlaybackError> {
        if self.generation != current_generation {
            return Ok(Tick::Cancelled);
        }
        if self.finished {
            return Ok(Tick::Idle);
        }

        self.elapsed += dt_ms;
        let mut advanced = false;
        while self.elapsed >= config::STEP_MS {
            self.elapsed -= config::STEP_MS;
            if !self.step(graph)? {
                self.finished = true;
                return Ok(Tick::Finished);
            }
            advanced = true;
        }

        Ok(if advanced { Tick::Advanced } else { Tick::Idle })
    }

    /// Reveal the next edge of the current path, crossing path boundaries as
    /// they complete. Returns false once every path has completed.
    fn step(&mut self, graph: &RouteGraph) -> Result<bool, PlaybackError> {
        loop {
            let path = match self.paths.get(self.current) {
                Some(p) => p,
                None => return Ok(false),
            };
            if self.cursor + 1 < path.len() {
                break;
            }

            // Current path is done; its completion fires exactly once. The
            // reveal state resets only when another path follows, so the
            // final frame keeps its highlights.
            self.completed_paths += 1;
            self.current += 1;
            if self.current < self.paths.len() {
                self.cursor = 0;
                self.revealed.clear();
            } else {
                return Ok(false);
            }
        }

        let path = &self.paths[self.current];
        let from = &path[self.cursor];
        let to = &path[self.cursor + 1];
        match graph.find_edge(from, to) {
            Some(edge) => self.revealed.push(edge.key()),
            None => {
                return Err(PlaybackError::MissingEdge {
                    from: from.clone(),
                    to: to.clone(),
                })
            }
        }
        self.cursor += 1;
        Ok(true)
    }

    /// Highlighted node ids for the current frame: the active path's prefix
    /// through the cursor. Empty until the path's first step has run.
    pub fn highlight_nodes(&self) -> &[String] {
        let idx = self.current.min(self.paths.len().saturating_sub(1));
        match self.paths.get(idx) {
            Some(path) if self.cursor > 0 => &path[..=self.cursor.min(path.len() - 1)],
            _ => &[],
        }
    }

    /// Revealed edges of the active path, in reveal order.
    pub fn revealed_edges(&self) -> &[EdgeKey] {
        &self.revealed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of per-path completions fired so far.
    pub fn completed_paths(&self) -> usize {
        self.completed_paths
    }
}
