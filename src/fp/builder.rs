use std::collections::HashMap;

use tracing::debug;

use super::tree::FpTree;
use crate::config::MiningParams;
use crate::{Item, Transaction};

/// Builds the FP-tree for the full dataset. Returns the tree together with
/// the header order: surviving items and their global counts, frequency
/// descending, ties broken ascending on item id.
pub fn build_fp_tree(
    transactions: &[Transaction],
    params: &MiningParams,
) -> (FpTree, Vec<(Item, u64)>) {
    let min_count = params.min_count(transactions.len());

    let mut counts: HashMap<Item, u64> = HashMap::new();
    for transaction in transactions {
        for &item in transaction {
            *counts.entry(item).or_insert(0) += 1;
        }
    }

    let order = header_order(&counts, min_count);
    debug!(
        distinct_items = counts.len(),
        frequent_items = order.len(),
        min_count,
        "counted items"
    );

    let surviving: HashMap<Item, u64> = order.iter().copied().collect();
    let mut tree = FpTree::new();

    for transaction in transactions {
        let path = insertion_order(transaction, &surviving);
        if !path.is_empty() {
            tree.insert_path(&path, 1);
        }
    }

    (tree, order)
}

/// Builds a conditional FP-tree from a pattern base, each path weighted by
/// its originating node's count. Items are re-filtered and re-ordered by
/// the conditional counts.
pub fn build_conditional_tree(
    prefix_paths: &[(Vec<Item>, u64)],
    min_count: u64,
) -> (FpTree, Vec<(Item, u64)>) {
    let mut counts: HashMap<Item, u64> = HashMap::new();
    for (path, weight) in prefix_paths {
        for &item in path {
            *counts.entry(item).or_insert(0) += weight;
        }
    }

    let order = header_order(&counts, min_count);
    let surviving: HashMap<Item, u64> = order.iter().copied().collect();
    let mut tree = FpTree::new();

    for (path, weight) in prefix_paths {
        let kept = insertion_order(path, &surviving);
        if !kept.is_empty() {
            tree.insert_path(&kept, *weight);
        }
    }

    (tree, order)
}

/// Header-table order: frequency descending, ties ascending on item id.
fn header_order(counts: &HashMap<Item, u64>, min_count: u64) -> Vec<(Item, u64)> {
    let mut order: Vec<(Item, u64)> = counts
        .iter()
        .filter(|&(_, &count)| count >= min_count)
        .map(|(&item, &count)| (item, count))
        .collect();
    order.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    order
}

/// Per-transaction insertion order: frequency descending, ties broken
/// *descending* on item id. Deliberately not the header comparator.
fn insertion_order(items: &[Item], counts: &HashMap<Item, u64>) -> Vec<Item> {
    let mut kept: Vec<Item> = items
        .iter()
        .copied()
        .filter(|item| counts.contains_key(item))
        .collect();
    kept.sort_unstable_by(|a, b| counts[b].cmp(&counts[a]).then(b.cmp(a)));
    kept
}
