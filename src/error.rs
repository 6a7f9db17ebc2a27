use crate::Item;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Minimum support outside `(0, 1]`.
    #[error("minimum support must be in (0, 1], got {0}")]
    InvalidMinSupport(f64),

    /// Minimum confidence outside `[0, 1]`.
    #[error("minimum confidence must be in [0, 1], got {0}")]
    InvalidMinConfidence(f64),

    /// An antecedent or consequent had no recorded support during rule
    /// scoring. Unreachable for miner-produced input: every subset of a
    /// frequent itemset is itself frequent.
    #[error("no recorded support for itemset {0:?}")]
    InvalidSupport(Vec<Item>),

    /// Malformed line in a transaction file.
    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
