//! This module implements a breadth-first search in the style of
//! [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html),
//! but only reports the length of the shortest path and tests the goal predicate on
//! successors as they are discovered, so that the goal itself is never enqueued.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::collections::VecDeque;

use std::hash::Hash;

/// Returns the number of unit steps on a shortest path from `start` to the first node
/// satisfying `success`, or [None] if no such node can be reached.
///
/// Every node is visited at most once. Nodes are kept in an index map together with their
/// distance from the start; the frontier refers to them by index.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<usize>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    if success(start) {
        return Some(0);
    }
    let mut visited: FxIndexMap<N, usize> = FxIndexMap::default();
    visited.insert(start.clone(), 0);
    let mut to_see: VecDeque<usize> = VecDeque::new();
    to_see.push_back(0);
    while let Some(index) = to_see.pop_front() {
        let (successors, distance) = {
            let (node, &distance) = visited.get_index(index)?;
            (successors(node), distance)
        };
        for successor in successors {
            if let Vacant(e) = visited.entry(successor) {
                if success(e.key()) {
                    debug!(
                        "Goal discovered at distance {} after visiting {} nodes",
                        distance + 1,
                        e.index()
                    );
                    return Some(distance + 1);
                }
                let n = e.index();
                e.insert(distance + 1);
                to_see.push_back(n);
            }
        }
    }
    debug!("Frontier exhausted after visiting {} nodes", visited.len());
    None
}
