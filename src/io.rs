//! External-collaborator layer: transaction loading and rule export. The
//! mining core never touches these.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::rules::Rule;
use crate::{Item, Transaction};

/// Reads the flat transaction format: one whitespace-separated
/// `<label> <transaction-id> <item-id>` triple per line. Transactions keep
/// first-seen order; items keep line order within a transaction. Blank
/// lines are skipped.
pub fn read_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    let reader = BufReader::new(File::open(path)?);

    let mut seen_order: Vec<u64> = Vec::new();
    let mut by_id: HashMap<u64, Transaction> = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(Error::Parse {
                line: idx + 1,
                msg: format!("expected 3 fields, got {}", fields.len()),
            });
        }

        let tx_id: u64 = fields[1].parse().map_err(|_| Error::Parse {
            line: idx + 1,
            msg: format!("invalid transaction id {:?}", fields[1]),
        })?;
        let item: Item = fields[2].parse().map_err(|_| Error::Parse {
            line: idx + 1,
            msg: format!("invalid item id {:?}", fields[2]),
        })?;

        by_id
            .entry(tx_id)
            .or_insert_with(|| {
                seen_order.push(tx_id);
                Vec::new()
            })
            .push(item);
    }

    Ok(seen_order
        .into_iter()
        .filter_map(|id| by_id.remove(&id))
        .collect())
}

/// Writes rules as CSV: `antecedent,consequent,support,confidence,lift`,
/// itemsets rendered as `[a, b]`, metrics rounded to two decimals.
pub fn write_rules_csv<P: AsRef<Path>>(rules: &[Rule], path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["antecedent", "consequent", "support", "confidence", "lift"])?;

    for rule in rules {
        writer.write_record([
            format_itemset(&rule.antecedent),
            format_itemset(&rule.consequent),
            format!("{:.2}", rule.support),
            format!("{:.2}", rule.confidence),
            format!("{:.2}", rule.lift),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn format_itemset(items: &[Item]) -> String {
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
