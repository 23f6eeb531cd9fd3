//! Static maze representation.
//!
//! A [`Maze`] is built once from a matrix of [`Tile`]s (or from text, see
//! [`Maze::parse`]) and is read-only afterwards. It answers the two queries
//! the searches need: whether a cell can be entered, and which cells are one
//! orthogonal step away.

use std::fmt;

use log::warn;
use searchlab_core::{Position, Range};

use crate::astar::astar;
use crate::bfs::breadth_first;
use crate::distance::manhattan;
use crate::report::SearchResult;
use crate::traits::{AstarPather, Pather};

/// One maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Free,
    Wall,
    Start,
    Goal,
}

/// Characters used by the text maze format.
///
/// Each row is one line; each character is one cell. `walls` and `floors`
/// may list several accepted characters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Legend {
    pub start: char,
    pub goal: char,
    pub walls: String,
    pub floors: String,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            start: 'R',
            goal: 'Q',
            walls: "#1".to_string(),
            floors: ".0".to_string(),
        }
    }
}

impl Legend {
    /// Map a character to its tile, or `None` if the legend does not know it.
    pub fn tile(&self, ch: char) -> Option<Tile> {
        if ch == self.start {
            Some(Tile::Start)
        } else if ch == self.goal {
            Some(Tile::Goal)
        } else if self.walls.contains(ch) {
            Some(Tile::Wall)
        } else if self.floors.contains(ch) {
            Some(Tile::Free)
        } else {
            None
        }
    }
}

/// Which shortest-path search to run on a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Uninformed breadth-first search.
    Breadth,
    /// A* guided by Manhattan distance.
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breadth => f.write_str("BFS"),
            Self::AStar => f.write_str("A*"),
        }
    }
}

/// An immutable rectangular maze with exactly one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Tile>,
    bounds: Range,
    start: Position,
    goal: Position,
}

impl Maze {
    /// Build a maze from rows of tiles.
    ///
    /// Fails if there are no rows, if the rows do not all have the same
    /// non-zero width, or if the start or goal marker is missing. When a
    /// marker appears more than once the first one in row-major order is
    /// used.
    pub fn new<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, MazeError> {
        let width = match rows.first() {
            Some(first) if !first.as_ref().is_empty() => first.as_ref().len(),
            _ => return Err(MazeError::Empty),
        };

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut goal = None;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MazeError::InconsistentWidth {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &tile) in row.iter().enumerate() {
                let pos = Position::new(r as i32, c as i32);
                let slot = match tile {
                    Tile::Start => &mut start,
                    Tile::Goal => &mut goal,
                    _ => {
                        tiles.push(tile);
                        continue;
                    }
                };
                if let Some(first) = *slot {
                    warn!("maze: duplicate {tile:?} at {pos}, keeping {first}");
                } else {
                    *slot = Some(pos);
                }
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            bounds: Range::with_size(rows.len() as i32, width as i32),
            start: start.ok_or(MazeError::MissingStart)?,
            goal: goal.ok_or(MazeError::MissingGoal)?,
        })
    }

    /// Parse a maze written with the default [`Legend`].
    ///
    /// ```
    /// use searchlab_paths::Maze;
    ///
    /// let maze = Maze::parse("R.#\n..Q").unwrap();
    /// assert_eq!(maze.rows(), 2);
    /// assert_eq!(maze.cols(), 3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        Self::parse_with(s, &Legend::default())
    }

    /// Parse a maze using a custom legend.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines.
    pub fn parse_with(s: &str, legend: &Legend) -> Result<Self, MazeError> {
        let mut rows = Vec::new();
        for (r, line) in s.trim().lines().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    legend.tile(ch).ok_or(MazeError::InvalidSymbol {
                        ch,
                        pos: Position::new(r as i32, c as i32),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::new(&rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// The rectangle `[0, rows) × [0, cols)`.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The tile at `pos`, or `None` outside the maze.
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.bounds.index(pos).map(|i| self.tiles[i])
    }

    /// Whether `pos` is inside the maze and not a wall.
    pub fn valid(&self, pos: Position) -> bool {
        matches!(self.tile(pos), Some(t) if t != Tile::Wall)
    }

    /// Valid cells one step away, in the order right, down, left, up.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut buf = Vec::with_capacity(4);
        Pather::neighbors(self, pos, &mut buf);
        buf
    }

    /// Run breadth-first search from start to goal.
    pub fn bfs(&self) -> SearchResult {
        breadth_first(self, self.start, self.goal)
    }

    /// Run A* from start to goal.
    pub fn astar(&self) -> SearchResult {
        astar(self, self.start, self.goal)
    }

    /// Run the chosen search from start to goal.
    pub fn solve(&self, algorithm: Algorithm) -> SearchResult {
        match algorithm {
            Algorithm::Breadth => self.bfs(),
            Algorithm::AStar => self.astar(),
        }
    }
}

impl Pather for Maze {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.valid(n)));
    }
}

impl AstarPather for Maze {
    fn estimate(&self, from: Position, to: Position) -> i32 {
        manhattan(from, to)
    }
}

/// Errors that can occur when building a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No rows, or a zero-width first row.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// No start marker.
    MissingStart,
    /// No goal marker.
    MissingGoal,
    /// A character not in the legend was found.
    InvalidSymbol { ch: char, pos: Position },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(f, "maze: row {row} has {found} cells, expected {expected}"),
            Self::MissingStart => f.write_str("maze: no start marker"),
            Self::MissingGoal => f.write_str("maze: no goal marker"),
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "maze contains invalid symbol \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MazeError {}
