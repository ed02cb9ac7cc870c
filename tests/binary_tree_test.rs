use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::{fixture, rstest};
use sum_tree::logging::init_test_setup;
use sum_tree::{sample_tree, BinaryTree, TreeGraph};

#[fixture]
fn sample() -> BinaryTree {
    init_test_setup();
    sample_tree()
}

/// 20 is stored in the root's left subtree even though it is larger than 10.
#[fixture]
fn misordered() -> BinaryTree {
    BinaryTree::node(
        10,
        BinaryTree::node(5, BinaryTree::Empty, BinaryTree::leaf(20)),
        BinaryTree::leaf(15),
    )
}

#[rstest]
fn test_sample_scenario(sample: BinaryTree) {
    assert!(!sample.is_empty());
    assert_eq!(sample.height(), 2);
    assert_eq!(sample.find_max_value(), 15);
}

#[rstest]
#[case(15, true)]
#[case(7, true)]
#[case(2, true)]
#[case(10, true)]
#[case(3, false)]
#[case(16, false)]
#[case(i32::MIN, false)]
fn test_sample_contains(sample: BinaryTree, #[case] target: i32, #[case] expected: bool) {
    assert_eq!(sample.contains(target), expected, "contains({})", target);
}

#[rstest]
fn test_empty_tree_defaults() {
    let empty = BinaryTree::new();
    assert!(empty.is_empty());
    assert_eq!(empty.height(), -1);
    assert_eq!(empty.height_iterative(), -1);
    assert_eq!(empty.find_max_value(), i32::MIN);
    assert!(!empty.contains(0));
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.value(), None);
}

#[rstest]
#[case(i32::MIN)]
#[case(0)]
#[case(i32::MAX)]
fn test_single_node(#[case] value: i32) {
    let tree = BinaryTree::leaf(value);
    assert!(!tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.find_max_value(), value);
    assert!(tree.contains(value));
}

#[rstest]
fn test_height_recurrence(sample: BinaryTree) {
    match &sample {
        BinaryTree::Empty => panic!("sample tree should not be empty"),
        BinaryTree::Node { left, right, .. } => {
            assert_eq!(sample.height(), 1 + left.height().max(right.height()));
        }
    }
}

#[rstest]
fn test_misordered_tree_keeps_literal_answers(misordered: BinaryTree) {
    assert!(!misordered.is_bst());
    // The true maximum is 20, but it is off the rightmost path.
    assert_eq!(misordered.find_max_value(), 15);
    // Ordered descent goes right at the root and never sees 20.
    assert!(!misordered.contains(20));
    assert!(misordered.contains(5));
}

#[rstest]
fn test_max_ignores_larger_left_value() {
    let tree = BinaryTree::node(10, BinaryTree::leaf(30), BinaryTree::Empty);
    assert_eq!(tree.find_max_value(), 10);
}

#[rstest]
fn test_random_trees_are_valid_search_trees() {
    init_test_setup();
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let tree = BinaryTree::random_tree(&mut rng, 40, -50..50).unwrap();
        tree.check_bst().unwrap();

        let values = tree.in_order();
        assert_eq!(values.len(), 40);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));

        assert_eq!(tree.find_max_value(), *values.last().unwrap());
        assert_eq!(tree.height(), tree.height_iterative());
        for value in -55..55 {
            assert_eq!(tree.contains(value), values.contains(&value), "seed {} value {}", seed, value);
        }

        let graph = TreeGraph::from_tree(&tree);
        assert_eq!(graph.height(), tree.height());
        assert_eq!(graph.find_max_value(), tree.find_max_value());
        assert_eq!(graph.to_tree(), tree);
    }
}

#[rstest]
fn test_deep_spine_does_not_overflow() {
    let depth = 200_000;
    let spine = BinaryTree::right_spine((0..depth).collect());

    assert_eq!(spine.height_iterative(), depth - 1);
    assert_eq!(spine.find_max_value(), depth - 1);
    assert!(spine.contains(depth - 1));
    assert!(!spine.contains(depth));
    assert_eq!(spine.len(), depth as usize);

    let graph = TreeGraph::from_tree(&spine);
    assert_eq!(graph.height(), depth - 1);
    let rebuilt = graph.to_tree();
    assert_eq!(rebuilt.height_iterative(), depth - 1);
    drop(rebuilt);
    drop(spine);
}

#[rstest]
fn test_sorted_insert_builds_chain() {
    let tree = BinaryTree::from_vec((0..5_000).collect());
    assert_eq!(tree.height_iterative(), 4_999);
    assert!(tree.is_bst());
}
