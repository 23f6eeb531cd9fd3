use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use log::{debug, trace};
use searchlab_core::Position;

use crate::path::reconstruct;
use crate::report::SearchResult;
use crate::traits::Pather;

/// Breadth-first search from `start` to `goal`.
///
/// Cells are marked as seen when they are enqueued, so each cell enters the
/// queue at most once. The returned path has the fewest possible steps, and
/// the exploration order is fully determined by the pather's neighbor order.
pub fn breadth_first<P: Pather>(pather: &P, start: Position, goal: Position) -> SearchResult {
    let started = Instant::now();

    let mut queue = VecDeque::from([start]);
    // Doubles as the visited set: a cell is seen iff it has an entry.
    let mut parents: HashMap<Position, Option<Position>> = HashMap::from([(start, None)]);
    let mut explored = 0;
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = queue.pop_front() {
        explored += 1;
        trace!("bfs: exploring {current}");

        if current == goal {
            let path = reconstruct(&parents, goal);
            let elapsed = started.elapsed();
            debug!(
                "bfs: reached {goal} in {} steps, {explored} explored, {elapsed:?}",
                path.len() - 1
            );
            return SearchResult {
                path: Some(path),
                explored,
                elapsed,
            };
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &next in nbuf.iter() {
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, Some(current));
            queue.push_back(next);
        }
    }

    let elapsed = started.elapsed();
    debug!("bfs: no path to {goal}, {explored} explored, {elapsed:?}");
    SearchResult {
        path: None,
        explored,
        elapsed,
    }
}
