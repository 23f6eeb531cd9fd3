//! Checkers game-tree search.
//!
//! An 8×8 board with single-hop mandatory captures and promotion, searched
//! two ways from the same evaluator:
//!
//! - **Minimax**, visiting every node to the depth limit ([`minimax`])
//! - **Alpha-beta**, the same search with pruning ([`alpha_beta`])
//!
//! At equal depth both report the same score; alpha-beta visits no more
//! nodes, and usually far fewer. Scores are absolute: positive favours
//! [`Side::White`], so White is the maximizing player.
//!
//! ```
//! use searchlab_checkers::{Board, Side, alpha_beta, minimax};
//!
//! let board = Board::new();
//! let full = minimax(&board, 3, true, Side::White);
//! let pruned = alpha_beta(&board, 3, true, Side::White);
//! assert_eq!(full.score, pruned.score);
//! assert!(pruned.nodes < full.nodes);
//! ```

mod alphabeta;
mod board;
mod engine;
mod eval;
mod minimax;
mod movegen;
mod piece;
mod search;

pub use alphabeta::{alpha_beta, alpha_beta_with};
pub use board::{Board, BoardError, SIZE, is_playable};
pub use engine::{Algorithm, Engine, EngineConfig};
pub use eval::{Evaluator, Material, evaluate};
pub use minimax::{minimax, minimax_with};
pub use movegen::Move;
pub use piece::{Piece, Side};
pub use search::SearchOutcome;
pub use searchlab_core::{Position, Range};
