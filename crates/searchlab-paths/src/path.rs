use std::collections::HashMap;
use std::hash::Hash;

/// Walk a predecessor map back from `goal` to the node whose parent is
/// `None`, and return the nodes in start-to-goal order.
///
/// Returns an empty path if `goal` was never recorded.
pub fn reconstruct<T: Copy + Eq + Hash>(parents: &HashMap<T, Option<T>>, goal: T) -> Vec<T> {
    let mut path = Vec::new();
    if !parents.contains_key(&goal) {
        return path;
    }
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchlab_core::Position;

    #[test]
    fn walks_back_to_the_root() {
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        let c = Position::new(1, 1);
        let parents = HashMap::from([(a, None), (b, Some(a)), (c, Some(b))]);
        assert_eq!(reconstruct(&parents, c), vec![a, b, c]);
        assert_eq!(reconstruct(&parents, b), vec![a, b]);
    }

    #[test]
    fn root_alone_is_a_single_node_path() {
        let parents = HashMap::from([(7u32, None)]);
        assert_eq!(reconstruct(&parents, 7), vec![7]);
    }

    #[test]
    fn unknown_goal_yields_empty_path() {
        let parents: HashMap<u32, Option<u32>> = HashMap::from([(1, None)]);
        assert!(reconstruct(&parents, 9).is_empty());
    }
}
