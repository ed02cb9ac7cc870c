use std::fmt;
use std::mem;
use std::ops::Range;

use rand::Rng;
use tracing::{debug, instrument};

use crate::error::{TreeError, TreeResult};

/// A binary search tree of i32 values.
///
/// Children are exclusively owned, so a tree never aliases or cycles. Public
/// operations leave a tree untouched; `with_value` consumes it and hands back
/// the extended tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BinaryTree {
    #[default]
    Empty,
    Node {
        value: i32,
        left: Box<BinaryTree>,
        right: Box<BinaryTree>,
    },
}

impl BinaryTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        BinaryTree::Empty
    }

    pub fn leaf(value: i32) -> Self {
        BinaryTree::node(value, BinaryTree::Empty, BinaryTree::Empty)
    }

    pub fn node(value: i32, left: BinaryTree, right: BinaryTree) -> Self {
        BinaryTree::Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Builds a tree by inserting the values one by one. Values less than a
    /// node go left; values greater or equal go right.
    pub fn from_vec(values: Vec<i32>) -> Self {
        values.into_iter().fold(BinaryTree::new(), BinaryTree::with_value)
    }

    /// Builds a chain where every value is the right child of the previous
    /// one. The first value becomes the root.
    pub fn right_spine(values: Vec<i32>) -> Self {
        values
            .into_iter()
            .rev()
            .fold(BinaryTree::new(), |below, value| {
                BinaryTree::node(value, BinaryTree::Empty, below)
            })
    }

    /// Returns the tree extended with `new_value`.
    pub fn with_value(mut self, new_value: i32) -> Self {
        self.insert(new_value);
        self
    }

    fn insert(&mut self, new_value: i32) {
        let mut cursor = self;
        loop {
            match { cursor } {
                BinaryTree::Node { value, left, right } => {
                    cursor = if new_value < *value {
                        &mut **left
                    } else {
                        &mut **right
                    };
                }
                slot @ BinaryTree::Empty => {
                    *slot = BinaryTree::leaf(new_value);
                    return;
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            BinaryTree::Empty => true,
            BinaryTree::Node { .. } => false,
        }
    }

    /// The root value, if any.
    pub fn value(&self) -> Option<i32> {
        match self {
            BinaryTree::Empty => None,
            BinaryTree::Node { value, .. } => Some(*value),
        }
    }

    /// Height of the tree: -1 when empty, 0 for a single node.
    ///
    /// Recurses once per level; use [`BinaryTree::height_iterative`] for
    /// trees deeper than the stack allows.
    pub fn height(&self) -> i32 {
        match self {
            BinaryTree::Empty => -1,
            BinaryTree::Node { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Same result as [`BinaryTree::height`], computed with an explicit stack.
    #[instrument(level = "trace", skip(self))]
    pub fn height_iterative(&self) -> i32 {
        let mut deepest = -1;
        let mut stack = vec![(self, 0)];
        while let Some((tree, depth)) = stack.pop() {
            match tree {
                BinaryTree::Empty => {}
                BinaryTree::Node { left, right, .. } => {
                    deepest = deepest.max(depth);
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
            }
        }
        deepest
    }

    /// Largest value along the rightmost path.
    ///
    /// Only correct when the search order holds: left subtrees are never
    /// inspected. An empty tree yields `i32::MIN`, which callers must not
    /// mistake for a stored value.
    #[instrument(level = "trace", skip(self))]
    pub fn find_max_value(&self) -> i32 {
        let mut current = self;
        loop {
            match current {
                BinaryTree::Empty => return i32::MIN,
                BinaryTree::Node { value, right, .. } => match right.as_ref() {
                    BinaryTree::Empty => return *value,
                    next @ BinaryTree::Node { .. } => current = next,
                },
            }
        }
    }

    /// Searches for `target` by descending left or right on each comparison.
    ///
    /// Equality is checked first, then less-than; everything else goes
    /// right. A value placed off its ordered path is reported absent.
    #[instrument(level = "trace", skip(self))]
    pub fn contains(&self, target: i32) -> bool {
        let mut current = self;
        loop {
            match current {
                BinaryTree::Empty => return false,
                BinaryTree::Node { value, left, right } => {
                    if target == *value {
                        return true;
                    }
                    current = if target < *value {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            match tree {
                BinaryTree::Empty => {}
                BinaryTree::Node { left, right, .. } => {
                    count += 1;
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                }
            }
        }
        count
    }

    /// Returns the in-order traversal. For a valid search tree the values
    /// come out sorted.
    pub fn in_order(&self) -> Vec<i32> {
        let mut result = Vec::new();
        let mut pending: Vec<(i32, &BinaryTree)> = Vec::new();
        let mut current = self;
        loop {
            match current {
                BinaryTree::Node { value, left, right } => {
                    pending.push((*value, right.as_ref()));
                    current = left.as_ref();
                }
                BinaryTree::Empty => match pending.pop() {
                    None => return result,
                    Some((value, right)) => {
                        result.push(value);
                        current = right;
                    }
                },
            }
        }
    }

    /// Checks strict search order: every left descendant is smaller and
    /// every right descendant is larger than its ancestor.
    #[instrument(level = "trace", skip(self))]
    pub fn check_bst(&self) -> TreeResult<()> {
        let mut stack = vec![(self, None, None, 0)];
        while let Some((tree, lower, upper, depth)) = stack.pop() {
            match tree {
                BinaryTree::Empty => {}
                BinaryTree::Node { value, left, right } => {
                    let above = lower.map_or(true, |low| *value > low);
                    let below = upper.map_or(true, |high| *value < high);
                    if !(above && below) {
                        debug!(value, depth, "search order violated");
                        return Err(TreeError::OrderViolation {
                            value: *value,
                            depth,
                            lower,
                            upper,
                        });
                    }
                    stack.push((right.as_ref(), Some(*value), upper, depth + 1));
                    stack.push((left.as_ref(), lower, Some(*value), depth + 1));
                }
            }
        }
        Ok(())
    }

    pub fn is_bst(&self) -> bool {
        self.check_bst().is_ok()
    }

    /// Builds a search tree from `count` distinct values drawn from `range`,
    /// inserted in random order.
    #[instrument(level = "debug", skip(rng))]
    pub fn random_tree<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        range: Range<i32>,
    ) -> TreeResult<Self> {
        if range.is_empty() {
            return Err(TreeError::InvalidRange {
                low: range.start,
                high: range.end,
            });
        }
        let available = (i64::from(range.end) - i64::from(range.start)) as usize;
        if count > available {
            return Err(TreeError::NotEnoughValues {
                requested: count,
                available,
            });
        }
        let values: Vec<i32> = rand::seq::index::sample(rng, available, count)
            .into_iter()
            .map(|offset| (i64::from(range.start) + offset as i64) as i32)
            .collect();
        debug!(?values, "inserting sampled values");
        Ok(BinaryTree::from_vec(values))
    }
}

// Children are detached onto a heap stack so that dropping a deep chain does
// not recurse once per level.
impl Drop for BinaryTree {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut tree) = pending.pop() {
            detach_children(&mut tree, &mut pending);
        }
    }
}

fn detach_children(tree: &mut BinaryTree, pending: &mut Vec<BinaryTree>) {
    match tree {
        BinaryTree::Empty => {}
        BinaryTree::Node { left, right, .. } => {
            for child in [left, right] {
                match &mut **child {
                    BinaryTree::Empty => {}
                    subtree @ BinaryTree::Node { .. } => pending.push(mem::take(subtree)),
                }
            }
        }
    }
}

impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryTree::Empty => write!(f, "Empty"),
            BinaryTree::Node { value, left, right } => {
                write!(f, "Node({}, {}, {})", value, left, right)
            }
        }
    }
}

/// `Node(10, Node(5, Node(2), Node(7)), Node(15))`.
pub fn sample_tree() -> BinaryTree {
    BinaryTree::node(
        10,
        BinaryTree::node(5, BinaryTree::leaf(2), BinaryTree::leaf(7)),
        BinaryTree::leaf(15),
    )
}
