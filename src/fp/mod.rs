pub mod builder;
pub mod mining;
pub mod tree;


pub use builder::{build_conditional_tree, build_fp_tree};
pub use mining::{mine_frequent_itemsets, FrequentItemset};
pub use tree::{FpNode, FpTree};
