//! Configurable front door to the game searches.

use log::debug;

use crate::alphabeta::alpha_beta_with;
use crate::board::Board;
use crate::eval::{Evaluator, Material};
use crate::minimax::minimax_with;
use crate::movegen::Move;
use crate::piece::Side;
use crate::search::SearchOutcome;

/// Which game-tree search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimax => f.write_str("minimax"),
            Self::AlphaBeta => f.write_str("alpha-beta"),
        }
    }
}

/// Search settings for an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Plies to look ahead.
    pub depth: u32,
    pub algorithm: Algorithm,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            algorithm: Algorithm::default(),
        }
    }
}

/// Picks moves for whichever side is to move on the board it is given.
///
/// White maximizes and Black minimizes, matching the sign convention of
/// [`Evaluator`].
#[derive(Debug, Clone)]
pub struct Engine<E = Material> {
    config: EngineConfig,
    eval: E,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            eval: Material,
        }
    }
}

impl<E: Evaluator> Engine<E> {
    pub fn with_evaluator(config: EngineConfig, eval: E) -> Self {
        Self { config, eval }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the configured search from `board.turn()`'s point of view.
    pub fn search(&self, board: &Board) -> SearchOutcome {
        let side = board.turn();
        let maximizing = side == Side::White;
        let EngineConfig { depth, algorithm } = self.config;
        debug!("engine: {algorithm} to depth {depth} for {side}");
        match algorithm {
            Algorithm::Minimax => minimax_with(&self.eval, board, depth, maximizing, side),
            Algorithm::AlphaBeta => alpha_beta_with(&self.eval, board, depth, maximizing, side),
        }
    }

    /// The move the configured search prefers, or `None` if the side to
    /// move is stuck (or the depth is 0).
    pub fn choose(&self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// Choose a move and play it.
    pub fn play(&self, board: &Board) -> Option<(Move, Board)> {
        let mv = self.choose(board)?;
        Some((mv, board.apply_move(&mv)))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_from_partial_json() {
        let config: EngineConfig = serde_json::from_str(r#"{"depth": 2}"#).unwrap();
        assert_eq!(config.depth, 2);
        assert_eq!(config.algorithm, Algorithm::AlphaBeta);

        let config: EngineConfig =
            serde_json::from_str(r#"{"depth": 3, "algorithm": "Minimax"}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::Minimax);
    }
}
