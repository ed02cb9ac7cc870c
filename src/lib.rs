pub mod binary_tree;
pub mod cli;
pub mod error;
pub mod logging;
pub mod tree_graph;
pub mod unions;

pub use binary_tree::{sample_tree, BinaryTree};
pub use error::{TreeError, TreeResult};
pub use tree_graph::{Side, TreeGraph};
