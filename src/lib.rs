//! FP-Growth frequent-itemset mining and association-rule generation.
//!
//! The engine builds a compressed prefix tree (FP-tree) over a transaction
//! collection, mines frequent itemsets through recursive conditional-
//! pattern-base extraction without re-scanning raw transactions, and
//! derives antecedent → consequent rules scored with support, confidence,
//! and lift.

pub mod config;
pub mod error;
pub mod fp;
pub mod io;
pub mod rules;

pub use config::{MiningParams, SupportDenominator};
pub use error::{Error, Result};
pub use fp::{mine_frequent_itemsets, FrequentItemset};
pub use rules::{generate_rules, Rule};

/// An item identifier. Opaque to the engine beyond equality, ordering,
/// and hashing.
pub type Item = u64;

/// One transaction: a sequence of distinct items.
pub type Transaction = Vec<Item>;

/// Mines frequent itemsets and derives the association rules meeting the
/// confidence threshold.
pub fn mine_association_rules(
    transactions: &[Transaction],
    params: &MiningParams,
) -> Result<Vec<Rule>> {
    let itemsets = fp::mine_frequent_itemsets(transactions, params);
    rules::generate_rules(&itemsets, transactions, params)
}
