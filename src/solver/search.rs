use std::collections::VecDeque;
use std::hash::Hash;

use fnv::FnvHashSet;
use typed_arena::Arena;

use crate::config::Config;

use super::path::Path;
use super::stats::Stats;
use super::SolverErr;

/// A queued node stands for the whole path leading to it.
struct Node<'a, S, A> {
    state: S,
    action: Option<A>,
    prev: Option<&'a Node<'a, S, A>>,
    depth: usize,
}

/// Breadth-first search for the path with the fewest actions
/// from `start` to any state satisfying `is_goal`.
///
/// Returns `None` if no goal state is reachable. Doesn't terminate
/// in reasonable time if the reachable state space is huge.
pub fn search<S, A, Succ, It, Goal>(start: &S, successors: Succ, is_goal: Goal) -> Option<Path<S, A>>
where
    S: Clone + Eq + Hash,
    A: Clone,
    Succ: FnMut(&S) -> It,
    It: IntoIterator<Item = (S, A)>,
    Goal: Fn(&S) -> bool,
{
    let mut stats = Stats::new();
    match bfs(start, successors, is_goal, &Config::default(), &mut stats) {
        Ok(path) => path,
        Err(err) => unreachable!("search without a limit failed: {}", err),
    }
}

pub(crate) fn bfs<S, A, Succ, It, Goal>(
    start: &S,
    mut successors: Succ,
    is_goal: Goal,
    config: &Config,
    stats: &mut Stats,
) -> Result<Option<Path<S, A>>, SolverErr>
where
    S: Clone + Eq + Hash,
    A: Clone,
    Succ: FnMut(&S) -> It,
    It: IntoIterator<Item = (S, A)>,
    Goal: Fn(&S) -> bool,
{
    debug!("Search called");

    stats.add_created(0);
    if is_goal(start) {
        return Ok(Some(Path::new(start.clone())));
    }

    let arena = Arena::new();
    let mut explored = FnvHashSet::default();
    let mut to_visit = VecDeque::new();

    let root: &Node<'_, S, A> = arena.alloc(Node {
        state: start.clone(),
        action: None,
        prev: None,
        depth: 0,
    });
    explored.insert(&root.state);
    to_visit.push_back(root);

    while let Some(cur_node) = to_visit.pop_front() {
        if let Some(max) = config.max_states {
            if stats.total_visited() >= max {
                debug!("State limit {} reached", max);
                return Err(SolverErr::StateLimit(max));
            }
        }
        if stats.add_visited(cur_node.depth) {
            debug!("Visited new depth: {}", cur_node.depth);
            if config.print_status {
                println!("Visited new depth: {}", cur_node.depth);
                println!("{:?}", stats);
            }
        }

        let depth = cur_node.depth + 1;
        for (state, action) in successors(&cur_node.state) {
            // marked when created, not when visited,
            // so every state is queued at most once
            if explored.contains(&state) {
                stats.add_reached_duplicate(depth);
                continue;
            }

            let next_node: &Node<'_, S, A> = arena.alloc(Node {
                state,
                action: Some(action),
                prev: Some(cur_node),
                depth,
            });
            stats.add_created(depth);
            explored.insert(&next_node.state);

            if is_goal(&next_node.state) {
                debug!("Solved at depth {}, backtracking path", depth);
                return Ok(Some(backtrack_path(next_node)));
            }
            to_visit.push_back(next_node);
        }
    }

    debug!("Search space exhausted");
    Ok(None)
}

fn backtrack_path<S: Clone, A: Clone>(final_node: &Node<'_, S, A>) -> Path<S, A> {
    let mut nodes = Vec::new();
    let mut node = final_node;
    while let Some(prev) = node.prev {
        nodes.push(node);
        node = prev;
    }

    let mut path = Path::new(node.state.clone());
    for node in nodes.into_iter().rev() {
        if let Some(ref action) = node.action {
            path.push(action.clone(), node.state.clone());
        }
    }
    path
}
