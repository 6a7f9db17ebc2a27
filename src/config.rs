use crate::error::{Error, Result};

/// Denominator used when turning a raw item count into a support fraction
/// during frequency filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportDenominator {
    /// Divide by the number of transactions (the conventional definition).
    TransactionCount,
    /// Divide by a fixed constant regardless of dataset size.
    Fixed(u64),
}

/// Validated mining parameters, threaded explicitly into every call.
#[derive(Debug, Clone, Copy)]
pub struct MiningParams {
    pub min_support: f64,
    pub min_confidence: f64,
    pub denominator: SupportDenominator,
}

impl MiningParams {
    /// Fails fast on threshold misconfiguration, before any tree is built.
    pub fn new(min_support: f64, min_confidence: f64) -> Result<Self> {
        if !(min_support > 0.0 && min_support <= 1.0) {
            return Err(Error::InvalidMinSupport(min_support));
        }
        if !(min_confidence >= 0.0 && min_confidence <= 1.0) {
            return Err(Error::InvalidMinConfidence(min_confidence));
        }
        Ok(Self {
            min_support,
            min_confidence,
            denominator: SupportDenominator::TransactionCount,
        })
    }

    pub fn with_denominator(mut self, denominator: SupportDenominator) -> Self {
        self.denominator = denominator;
        self
    }

    /// Smallest raw count that passes the minimum-support test.
    pub(crate) fn min_count(&self, num_transactions: usize) -> u64 {
        let denom = match self.denominator {
            SupportDenominator::TransactionCount => num_transactions as f64,
            SupportDenominator::Fixed(n) => n as f64,
        };
        (self.min_support * denom).ceil() as u64
    }
}
