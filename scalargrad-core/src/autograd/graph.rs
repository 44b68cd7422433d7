use crate::scalar::Scalar;
use crate::scalar_data::NodeId;
use std::collections::HashSet;

/// Performs a topological sort of the computation graph ending at `root`.
///
/// Returns every node reachable from `root` exactly once, each node after all
/// of its parents; `root` is last. This is a depth-first postorder: parents
/// are visited in operand order before the node itself is emitted.
///
/// The visited set is keyed by [`NodeId`], so two distinct nodes carrying the
/// same value are both emitted, and a node reachable through several paths
/// (diamond) is emitted once.
///
/// The traversal uses an explicit stack instead of recursion. The graph is
/// acyclic by construction, so no cycle check is needed.
pub fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Scalar> = Vec::new();
    // (node, parents already pushed)
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let parents = node.parents();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for parent in parents.into_iter().rev() {
            if !visited.contains(&parent.id()) {
                stack.push((parent, false));
            }
        }
    }

    sorted_list
}
