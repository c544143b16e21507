//! Cycle-detecting topological sort over a name-keyed dependency map.

use crate::collections::IndexMap;
use crate::collections::IndexSet;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Sort the keys of a dependency map so that every key comes after the keys
/// it depends on.
///
/// `dependencies` maps each node to the set of nodes it depends on. Entries
/// of a dependency set that are not themselves keys do not participate:
/// whether they exist is someone else's question, not an ordering one.
///
/// On success the order contains every key exactly once, dependencies
/// first; keys with no ordering constraint between them keep their map
/// (declaration) order. On failure, every strongly connected component of
/// size greater than one, and every self-loop, is returned as a cycle;
/// cycles and their members are listed in declaration order.
pub fn topological_sort<N>(
    dependencies: &IndexMap<N, IndexSet<N>>,
) -> Result<Vec<N>, Vec<Vec<N>>>
where
    N: Clone + Eq + Hash,
{
    let n = dependencies.len();

    // Kahn's algorithm over declaration indices. The ready heap hands out
    // the smallest index first, so nodes with no ordering constraint
    // between them come out in declaration order.
    let mut pending = vec![0usize; n];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (index, deps) in dependencies.values().enumerate() {
        for dep in deps {
            if let Some(dep_index) = dependencies.get_index_of(dep) {
                pending[index] += 1;
                dependents[dep_index].push(index);
            }
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = (0..n)
        .filter(|&index| pending[index] == 0)
        .map(Reverse)
        .collect();
    let mut order = Vec::with_capacity(n);
    while let Some(Reverse(index)) = ready.pop() {
        let (node, _) = dependencies.get_index(index).unwrap();
        order.push(node.clone());
        for &dependent in &dependents[index] {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                ready.push(Reverse(dependent));
            }
        }
    }

    if order.len() == n {
        Ok(order)
    } else {
        Err(cycles(dependencies))
    }
}

/// Strongly connected components of size > 1, plus self-loops, via an
/// iterative Tarjan walk. Components come out normalized to declaration
/// order.
fn cycles<N>(dependencies: &IndexMap<N, IndexSet<N>>) -> Vec<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    let n = dependencies.len();
    let adjacency: Vec<Vec<usize>> = dependencies
        .values()
        .map(|deps| {
            deps.iter()
                .filter_map(|dep| dependencies.get_index_of(dep))
                .collect()
        })
        .collect();

    const UNVISITED: usize = usize::MAX;
    let mut discovery = vec![UNVISITED; n];
    let mut low_link = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut component_stack: Vec<usize> = Vec::new();
    let mut next_discovery = 0usize;
    let mut components: Vec<Vec<usize>> = Vec::new();

    // (node, index of the next edge to follow)
    let mut frames: Vec<(usize, usize)> = Vec::new();
    for start in 0..n {
        if discovery[start] != UNVISITED {
            continue;
        }
        frames.push((start, 0));
        while let Some(frame) = frames.last_mut() {
            let (node, edge) = *frame;
            if edge == 0 {
                discovery[node] = next_discovery;
                low_link[node] = next_discovery;
                next_discovery += 1;
                component_stack.push(node);
                on_stack[node] = true;
            }
            if edge < adjacency[node].len() {
                frame.1 += 1;
                let target = adjacency[node][edge];
                if discovery[target] == UNVISITED {
                    frames.push((target, 0));
                } else if on_stack[target] {
                    low_link[node] = low_link[node].min(discovery[target]);
                }
            } else {
                if low_link[node] == discovery[node] {
                    let mut component = Vec::new();
                    loop {
                        let member = component_stack.pop().unwrap();
                        on_stack[member] = false;
                        component.push(member);
                        if member == node {
                            break;
                        }
                    }
                    components.push(component);
                }
                frames.pop();
                if let Some(parent) = frames.last() {
                    low_link[parent.0] = low_link[parent.0].min(low_link[node]);
                }
            }
        }
    }

    let mut found: Vec<Vec<N>> = components
        .into_iter()
        .filter(|component| {
            component.len() > 1
                || adjacency[component[0]].contains(&component[0])
        })
        .map(|mut component| {
            component.sort_unstable();
            component
                .into_iter()
                .map(|index| {
                    let (node, _) = dependencies.get_index(index).unwrap();
                    node.clone()
                })
                .collect()
        })
        .collect();
    found.sort_by_key(|component| {
        dependencies
            .get_index_of(&component[0])
            .unwrap_or(usize::MAX)
    });
    found
}
