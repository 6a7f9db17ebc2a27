use std::collections::HashMap;

use crate::Item;

#[derive(Debug, Clone)]
pub struct FpNode {
    pub item: Option<Item>,
    pub count: u64,
    pub parent: Option<usize>,
    pub children: HashMap<Item, usize>,
}

impl FpNode {
    fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
        }
    }

    fn new_item(item: Item, count: u64, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
        }
    }
}

/// Prefix tree over filtered, ordered transactions. Nodes live in an arena
/// and address each other by index; `header` holds each item's node-link
/// chain (every node carrying that item, in creation order).
#[derive(Debug, Clone)]
pub struct FpTree {
    pub nodes: Vec<FpNode>,
    pub header: HashMap<Item, Vec<usize>>,
    pub root: usize,
}

impl Default for FpTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FpTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FpNode::new_root()],
            header: HashMap::new(),
            root: 0,
        }
    }

    /// Inserts one ordered item sequence, adding `weight` to every node on
    /// its path. Existing children are reused; new nodes are appended to
    /// their item's node-link chain.
    pub fn insert_path(&mut self, path: &[Item], weight: u64) {
        let mut current = self.root;

        for &item in path {
            if let Some(&child) = self.nodes[current].children.get(&item) {
                self.nodes[child].count += weight;
                current = child;
            } else {
                let child = self.nodes.len();
                self.nodes.push(FpNode::new_item(item, weight, current));
                self.nodes[current].children.insert(item, child);
                self.header.entry(item).or_default().push(child);
                current = child;
            }
        }
    }

    /// Total occurrences of `item`, summed over its node-link chain.
    pub fn item_count(&self, item: Item) -> u64 {
        self.header.get(&item).map_or(0, |chain| {
            chain.iter().map(|&idx| self.nodes[idx].count).sum()
        })
    }

    /// Conditional pattern base for `item`: for each node in its chain,
    /// the items on the path from the root down to (but excluding) the
    /// node, paired with the node's count. Nodes hanging directly off the
    /// root contribute nothing.
    pub fn prefix_paths(&self, item: Item) -> Vec<(Vec<Item>, u64)> {
        self.header.get(&item).map_or(Vec::new(), |chain| {
            chain
                .iter()
                .filter_map(|&idx| {
                    let mut path = Vec::new();
                    let mut current = self.nodes[idx].parent;

                    while let Some(i) = current {
                        if let Some(path_item) = self.nodes[i].item {
                            path.push(path_item);
                        }
                        current = self.nodes[i].parent;
                    }

                    path.reverse();
                    (!path.is_empty()).then_some((path, self.nodes[idx].count))
                })
                .collect()
        })
    }
}
