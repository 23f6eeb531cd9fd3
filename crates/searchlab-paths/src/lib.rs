//! Shortest-path search over static mazes.
//!
//! This crate compares an uninformed and an informed search on the same
//! 4-connected, unit-cost grid:
//!
//! - **BFS** level-order search ([`breadth_first`], [`Maze::bfs`])
//! - **A\*** guided by Manhattan distance ([`astar`], [`Maze::astar`])
//!
//! Both return a [`SearchResult`] holding the path, the number of explored
//! cells and the elapsed time; [`compare`] runs them side by side.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod bfs;
mod distance;
mod frontier;
mod maze;
mod path;
mod report;
mod traits;

pub use astar::astar;
pub use bfs::breadth_first;
pub use distance::manhattan;
pub use maze::{Algorithm, Legend, Maze, MazeError, Tile};
pub use path::reconstruct;
pub use report::{Comparison, SearchResult, compare};
pub use searchlab_core::{Position, Range};
pub use traits::{AstarPather, Pather};
