use std::collections::{HashMap, HashSet};
use std::time::Instant;

use log::{debug, trace};
use searchlab_core::Position;

use crate::frontier::OpenList;
use crate::path::reconstruct;
use crate::report::SearchResult;
use crate::traits::AstarPather;

/// A* search from `start` to `goal`, ordering candidates by `f = g + h`.
///
/// Equal `f` values pop in the order they were pushed. A cell may sit in the
/// open list several times with different `g`; only its first pop counts, the
/// rest are skipped as stale. With an admissible, consistent estimate the
/// returned path has the fewest possible steps.
pub fn astar<P: AstarPather>(pather: &P, start: Position, goal: Position) -> SearchResult {
    let started = Instant::now();

    let mut open: OpenList<(Position, i32)> = OpenList::new();
    open.push((start, 0), pather.estimate(start, goal));

    let mut closed: HashSet<Position> = HashSet::new();
    let mut parents: HashMap<Position, Option<Position>> = HashMap::from([(start, None)]);
    let mut g_score: HashMap<Position, i32> = HashMap::from([(start, 0)]);
    let mut explored = 0;
    let mut nbuf = Vec::with_capacity(4);

    // The first pop of a cell carries its lowest g: a lower g for the same
    // cell always means a lower f.
    while let Some(((current, g), f)) = open.pop() {
        if !closed.insert(current) {
            continue;
        }
        explored += 1;
        trace!(
            "astar: exploring {current} g={g} h={} f={f}",
            pather.estimate(current, goal)
        );

        if current == goal {
            let path = reconstruct(&parents, goal);
            let elapsed = started.elapsed();
            debug!(
                "astar: reached {goal} at cost {g}, {explored} explored, {} left open, {elapsed:?}",
                open.len()
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
            let tentative = g + 1;
            if g_score.get(&next).is_some_and(|&known| tentative >= known) {
                continue;
            }
            g_score.insert(next, tentative);
            parents.insert(next, Some(current));
            open.push((next, tentative), tentative + pather.estimate(next, goal));
        }
    }

    let elapsed = started.elapsed();
    debug!("astar: no path to {goal}, {explored} explored, {elapsed:?}");
    SearchResult {
        path: None,
        explored,
        elapsed,
    }
}
