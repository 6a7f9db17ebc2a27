use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::config::MiningParams;
use crate::error::{Error, Result};
use crate::fp::FrequentItemset;
use crate::{Item, Transaction};

/// An association rule. Antecedent and consequent partition a single
/// frequent itemset: both non-empty, disjoint, union equal to the itemset.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

/// Derives the association rules meeting the confidence threshold from the
/// mined itemsets.
///
/// Multi-item supports are first re-validated by exact subset counting
/// against the raw transactions; tree-derived counts are conditional-tree-
/// local. Single-item counts are exact by construction and kept as-is.
pub fn generate_rules(
    itemsets: &[FrequentItemset],
    transactions: &[Transaction],
    params: &MiningParams,
) -> Result<Vec<Rule>> {
    let num_transactions = transactions.len();
    if num_transactions == 0 {
        return Ok(Vec::new());
    }

    let mut validated: Vec<FrequentItemset> = Vec::with_capacity(itemsets.len());
    for itemset in itemsets {
        if itemset.items.len() <= 1 {
            validated.push(itemset.clone());
            continue;
        }
        let count = subset_count(&itemset.items, transactions);
        if count as f64 / num_transactions as f64 >= params.min_support {
            validated.push(FrequentItemset {
                items: itemset.items.clone(),
                count,
            });
        }
    }

    // Exact-match support lookup, keyed on the sorted item set.
    let mut support_index: HashMap<Vec<Item>, f64> = HashMap::with_capacity(validated.len());
    for itemset in &validated {
        support_index.insert(
            sorted_key(&itemset.items),
            itemset.count as f64 / num_transactions as f64,
        );
    }

    let mut rules = Vec::new();
    for itemset in &validated {
        if itemset.items.len() < 2 {
            continue;
        }
        let support = itemset.count as f64 / num_transactions as f64;

        for size in 1..itemset.items.len() {
            for antecedent in itemset.items.iter().copied().combinations(size) {
                let consequent: Vec<Item> = itemset
                    .items
                    .iter()
                    .copied()
                    .filter(|item| !antecedent.contains(item))
                    .collect();

                let antecedent_support = lookup_support(&support_index, &antecedent)?;
                let consequent_support = lookup_support(&support_index, &consequent)?;
                let confidence = support / antecedent_support;
                let lift = support / (antecedent_support * consequent_support);

                if confidence >= params.min_confidence {
                    rules.push(Rule {
                        antecedent,
                        consequent,
                        support,
                        confidence,
                        lift,
                    });
                }
            }
        }
    }

    debug!(
        itemsets = validated.len(),
        rules = rules.len(),
        "rule generation complete"
    );
    Ok(rules)
}

fn lookup_support(index: &HashMap<Vec<Item>, f64>, items: &[Item]) -> Result<f64> {
    index
        .get(&sorted_key(items))
        .copied()
        .ok_or_else(|| Error::InvalidSupport(items.to_vec()))
}

fn sorted_key(items: &[Item]) -> Vec<Item> {
    let mut key = items.to_vec();
    key.sort_unstable();
    key
}

/// Number of transactions containing every item of `items`.
pub(crate) fn subset_count(items: &[Item], transactions: &[Transaction]) -> u64 {
    transactions
        .iter()
        .filter(|transaction| items.iter().all(|item| transaction.contains(item)))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(min_support: f64, min_confidence: f64) -> MiningParams {
        MiningParams::new(min_support, min_confidence).unwrap()
    }

    fn itemset(items: &[Item], count: u64) -> FrequentItemset {
        FrequentItemset {
            items: items.to_vec(),
            count,
        }
    }

    #[test]
    fn scores_support_confidence_lift() {
        let transactions: Vec<Transaction> =
            vec![vec![1, 2, 3], vec![1, 2], vec![1, 2, 4], vec![1, 3]];
        let itemsets = vec![
            itemset(&[3], 2),
            itemset(&[3, 1], 2),
            itemset(&[2], 3),
            itemset(&[2, 1], 3),
            itemset(&[1], 4),
        ];

        let rules = generate_rules(&itemsets, &transactions, &params(0.5, 0.0)).unwrap();

        assert_eq!(rules.len(), 4);

        // {3,1}: [3] => [1]
        assert_eq!(rules[0].antecedent, vec![3]);
        assert_eq!(rules[0].consequent, vec![1]);
        assert!((rules[0].support - 0.5).abs() < 1e-12);
        assert!((rules[0].confidence - 1.0).abs() < 1e-12);
        assert!((rules[0].lift - 1.0).abs() < 1e-12);

        // {3,1}: [1] => [3]
        assert_eq!(rules[1].antecedent, vec![1]);
        assert_eq!(rules[1].consequent, vec![3]);
        assert!((rules[1].confidence - 0.5).abs() < 1e-12);
        assert!((rules[1].lift - 1.0).abs() < 1e-12);

        // {2,1}: [2] => [1] then [1] => [2]
        assert_eq!(rules[2].antecedent, vec![2]);
        assert!((rules[2].support - 0.75).abs() < 1e-12);
        assert!((rules[2].confidence - 1.0).abs() < 1e-12);
        assert_eq!(rules[3].antecedent, vec![1]);
        assert!((rules[3].confidence - 0.75).abs() < 1e-12);
    }

    #[test]
    fn confidence_threshold_filters_rules() {
        let transactions: Vec<Transaction> =
            vec![vec![1, 2, 3], vec![1, 2], vec![1, 2, 4], vec![1, 3]];
        let itemsets = vec![
            itemset(&[3], 2),
            itemset(&[3, 1], 2),
            itemset(&[2], 3),
            itemset(&[2, 1], 3),
            itemset(&[1], 4),
        ];

        let rules = generate_rules(&itemsets, &transactions, &params(0.5, 0.9)).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|rule| rule.confidence >= 0.9));
    }

    #[test]
    fn revalidation_drops_overcounted_itemsets() {
        // Tree-local count claims {1,2} is frequent; the raw transactions
        // disagree.
        let transactions: Vec<Transaction> = vec![vec![1], vec![2], vec![1], vec![2]];
        let itemsets = vec![itemset(&[1], 2), itemset(&[2], 2), itemset(&[2, 1], 2)];

        let rules = generate_rules(&itemsets, &transactions, &params(0.5, 0.0)).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn missing_subset_support_is_an_error() {
        let transactions: Vec<Transaction> = vec![vec![1, 2], vec![1, 2]];
        // {2,1} is present but its subset {2} is not in the list.
        let itemsets = vec![itemset(&[1], 2), itemset(&[2, 1], 2)];

        let err = generate_rules(&itemsets, &transactions, &params(0.5, 0.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidSupport(items) if items == vec![2]));
    }

    #[test]
    fn partition_law_holds_for_every_rule() {
        let transactions: Vec<Transaction> = vec![
            vec![1, 2, 3],
            vec![1, 2, 3],
            vec![1, 2],
            vec![2, 3],
        ];
        let itemsets = crate::fp::mine_frequent_itemsets(&transactions, &params(0.5, 0.0));
        let rules = generate_rules(&itemsets, &transactions, &params(0.5, 0.0)).unwrap();
        assert!(!rules.is_empty());

        for rule in &rules {
            assert!(!rule.antecedent.is_empty());
            assert!(!rule.consequent.is_empty());
            assert!(rule
                .antecedent
                .iter()
                .all(|item| !rule.consequent.contains(item)));

            let mut reunion = rule.antecedent.clone();
            reunion.extend_from_slice(&rule.consequent);
            reunion.sort_unstable();
            assert!(itemsets.iter().any(|itemset| {
                let mut items = itemset.items.clone();
                items.sort_unstable();
                items == reunion
            }));
        }
    }

    #[test]
    fn empty_input_yields_no_rules() {
        let rules = generate_rules(&[], &[], &params(0.5, 0.5)).unwrap();
        assert!(rules.is_empty());
    }
}
