use searchlab_core::Position;

/// Minimal search interface — provides neighbor enumeration.
///
/// Every edge has cost 1; the order in which neighbors are appended is the
/// order in which searches expand them.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// Pather with a heuristic, as required by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the number of steps from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Position, to: Position) -> i32;
}
