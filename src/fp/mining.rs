use tracing::debug;

use super::builder::{build_conditional_tree, build_fp_tree};
use super::tree::FpTree;
use crate::config::MiningParams;
use crate::{Item, Transaction};

/// A mined itemset: items in emission (prefix) order, plus its support
/// count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemset {
    pub items: Vec<Item>,
    pub count: u64,
}

/// Mines every frequent itemset from the transaction collection.
pub fn mine_frequent_itemsets(
    transactions: &[Transaction],
    params: &MiningParams,
) -> Vec<FrequentItemset> {
    let min_count = params.min_count(transactions.len());
    let (tree, order) = build_fp_tree(transactions, params);

    let mut itemsets = Vec::new();
    mine_recursive(&tree, &order, &[], min_count, &mut itemsets);
    debug!(itemsets = itemsets.len(), "mining complete");
    itemsets
}

/// Walks the header table least-frequent first, so each item is only ever
/// combined with items that precede it in the global ordering and every
/// itemset is emitted exactly once.
fn mine_recursive(
    tree: &FpTree,
    order: &[(Item, u64)],
    prefix: &[Item],
    min_count: u64,
    acc: &mut Vec<FrequentItemset>,
) {
    for &(item, _) in order.iter().rev() {
        let support = tree.item_count(item);

        let mut items = Vec::with_capacity(prefix.len() + 1);
        items.extend_from_slice(prefix);
        items.push(item);
        acc.push(FrequentItemset {
            items: items.clone(),
            count: support,
        });

        let pattern_base = tree.prefix_paths(item);
        if pattern_base.is_empty() {
            continue;
        }

        let (cond_tree, cond_order) = build_conditional_tree(&pattern_base, min_count);
        if !cond_order.is_empty() {
            mine_recursive(&cond_tree, &cond_order, &items, min_count, acc);
        }
    }
}
