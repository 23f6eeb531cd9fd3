use std::time::Duration;

use searchlab_core::Position;

use crate::maze::Maze;

/// Outcome of one grid search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells from start to goal inclusive, or `None` if the goal was not reached.
    pub path: Option<Vec<Position>>,
    /// Number of cells taken off the frontier and expanded.
    pub explored: usize,
    /// Wall time spent inside the search.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Whether a path to the goal was found.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, start and goal included (0 if none).
    pub fn len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Whether no path was found.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of unit steps along the path, or `None` if there is none.
    pub fn cost(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

/// Side-by-side run of both searches on the same maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub breadth: SearchResult,
    pub astar: SearchResult,
}

impl Comparison {
    /// How many fewer cells A* explored than BFS (negative if it explored more).
    pub fn saved(&self) -> i64 {
        self.breadth.explored as i64 - self.astar.explored as i64
    }

    /// Percentage of BFS's exploration that A* avoided.
    ///
    /// `None` when BFS explored nothing, which only happens for a search that
    /// never ran.
    pub fn efficiency(&self) -> Option<f64> {
        if self.breadth.explored == 0 {
            return None;
        }
        Some((1.0 - self.astar.explored as f64 / self.breadth.explored as f64) * 100.0)
    }

    /// Whether both searches agree on the path cost (or both found nothing).
    pub fn costs_agree(&self) -> bool {
        self.breadth.cost() == self.astar.cost()
    }
}

/// Run BFS and A* on `maze` and collect both results.
pub fn compare(maze: &Maze) -> Comparison {
    Comparison {
        breadth: maze.bfs(),
        astar: maze.astar(),
    }
}
