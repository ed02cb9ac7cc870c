use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::binary_tree::BinaryTree;

/// Which child slot an edge points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A binary tree stored as an arena of graph nodes.
///
/// Every node weight is the stored value and every edge runs parent to
/// child, labelled with the slot it fills. All queries walk indices in a
/// loop, so tree depth is bounded by memory rather than stack.
#[derive(Debug, Clone, Default)]
pub struct TreeGraph {
    graph: DiGraph<i32, Side>,
    root: Option<NodeIndex>,
}

impl TreeGraph {
    /// Copies `tree` into a fresh arena.
    #[instrument(level = "trace", skip(tree))]
    pub fn from_tree(tree: &BinaryTree) -> Self {
        let mut graph = DiGraph::<i32, Side>::new();
        let mut root = None;
        let mut stack: Vec<(&BinaryTree, Option<(NodeIndex, Side)>)> = vec![(tree, None)];

        while let Some((subtree, parent)) = stack.pop() {
            match subtree {
                BinaryTree::Empty => {}
                BinaryTree::Node { value, left, right } => {
                    let index = graph.add_node(*value);
                    match parent {
                        None => root = Some(index),
                        Some((parent_index, side)) => {
                            graph.add_edge(parent_index, index, side);
                        }
                    }
                    stack.push((right.as_ref(), Some((index, Side::Right))));
                    stack.push((left.as_ref(), Some((index, Side::Left))));
                }
            }
        }

        debug!(nodes = graph.node_count(), "built tree graph");
        Self { graph, root }
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn value(&self, node: NodeIndex) -> i32 {
        self.graph[node]
    }

    /// The child of `node` in the given slot, if present.
    pub fn child(&self, node: NodeIndex, side: Side) -> Option<NodeIndex> {
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .find(|edge| *edge.weight() == side)
            .map(|edge| edge.target())
    }

    /// -1 for an empty graph, 0 for a lone root.
    pub fn height(&self) -> i32 {
        let mut deepest = -1;
        let mut stack: Vec<(NodeIndex, i32)> = self.root.map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in self.graph.neighbors(node) {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }

    /// Follows right links only, like [`BinaryTree::find_max_value`].
    pub fn find_max_value(&self) -> i32 {
        let Some(mut current) = self.root else {
            return i32::MIN;
        };
        while let Some(next) = self.child(current, Side::Right) {
            current = next;
        }
        self.graph[current]
    }

    /// Ordered descent, like [`BinaryTree::contains`].
    pub fn contains(&self, target: i32) -> bool {
        let mut current = self.root;
        while let Some(node) = current {
            let value = self.graph[node];
            if target == value {
                return true;
            }
            let side = if target < value { Side::Left } else { Side::Right };
            current = self.child(node, side);
        }
        false
    }

    /// Rebuilds the owned tree, children before parents.
    pub fn to_tree(&self) -> BinaryTree {
        let Some(root) = self.root else {
            return BinaryTree::Empty;
        };

        // Visiting node, right, left and reversing yields left, right, node.
        let mut post_order = Vec::with_capacity(self.graph.node_count());
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            post_order.push(node);
            stack.extend(self.child(node, Side::Left));
            stack.extend(self.child(node, Side::Right));
        }

        let mut built: HashMap<NodeIndex, BinaryTree> = HashMap::new();
        for &node in post_order.iter().rev() {
            let left = self.take_built(&mut built, node, Side::Left);
            let right = self.take_built(&mut built, node, Side::Right);
            built.insert(node, BinaryTree::node(self.graph[node], left, right));
        }
        built.remove(&root).unwrap_or_default()
    }

    fn take_built(
        &self,
        built: &mut HashMap<NodeIndex, BinaryTree>,
        node: NodeIndex,
        side: Side,
    ) -> BinaryTree {
        self.child(node, side)
            .and_then(|child| built.remove(&child))
            .unwrap_or_default()
    }

    /// Graphviz DOT text with edges labelled `Left` or `Right`.
    pub fn to_dot(&self) -> String {
        format!("{:?}", Dot::new(&self.graph))
    }
}

impl From<&BinaryTree> for TreeGraph {
    fn from(tree: &BinaryTree) -> Self {
        TreeGraph::from_tree(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_tree::sample_tree;

    #[test]
    fn test_sample_queries_match_owned_tree() {
        let tree = sample_tree();
        let graph = TreeGraph::from_tree(&tree);

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.height(), tree.height());
        assert_eq!(graph.find_max_value(), 15);
        for target in [2, 3, 5, 7, 10, 15, 16] {
            assert_eq!(
                graph.contains(target),
                tree.contains(target),
                "contains({}) should agree",
                target
            );
        }
    }

    #[test]
    fn test_children_by_side() {
        let graph = TreeGraph::from_tree(&sample_tree());
        let root = graph.root().unwrap();
        let left = graph.child(root, Side::Left).unwrap();
        let right = graph.child(root, Side::Right).unwrap();

        assert_eq!(graph.value(root), 10);
        assert_eq!(graph.value(left), 5);
        assert_eq!(graph.value(right), 15);
        assert_eq!(graph.child(right, Side::Left), None);
    }

    #[test]
    fn test_empty_graph() {
        let graph = TreeGraph::from_tree(&BinaryTree::Empty);
        assert!(graph.is_empty());
        assert_eq!(graph.height(), -1);
        assert_eq!(graph.find_max_value(), i32::MIN);
        assert!(!graph.contains(0));
        assert_eq!(graph.to_tree(), BinaryTree::Empty);
    }

    #[test]
    fn test_to_tree_round_trip() {
        let tree = BinaryTree::node(
            4,
            BinaryTree::node(2, BinaryTree::Empty, BinaryTree::leaf(3)),
            BinaryTree::node(8, BinaryTree::leaf(6), BinaryTree::Empty),
        );
        assert_eq!(TreeGraph::from(&tree).to_tree(), tree);
    }

    #[test]
    fn test_dot_labels_sides() {
        let dot = TreeGraph::from_tree(&sample_tree()).to_dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("Left"));
        assert!(dot.contains("Right"));
        assert!(dot.contains("15"));
    }
}
