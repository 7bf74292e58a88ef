// src/models/ledger.rs

use crate::models::Transaction;

/// Append-only record of every accepted trade. Never trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, tx: Transaction) {
        self.entries.push(tx);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    /// Oldest first, in recording order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Transaction> {
        self.entries.iter()
    }

    /// For the on-screen list.
    pub fn newest_first(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().rev()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.entries
    }
}

impl From<Vec<Transaction>> for TransactionLog {
    fn from(entries: Vec<Transaction>) -> Self {
        Self { entries }
    }
}
