//! Water transaction ledger.
//!
//! Entries are immutable and kept newest-first; the head entry's `balance` is
//! the authoritative current balance. Callers hand in pre-signed amounts (the
//! form boundary negates usage entries), the ledger only does the running sum.

use crate::models::{LedgerCounts, LedgerSummary, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFilter {
    All,
    Kind(TransactionKind),
}

impl LedgerFilter {
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        TransactionKind::parse(value).map(Self::Kind)
    }
}

#[derive(Debug, Clone)]
pub struct Ledger {
    initial_balance: i64,
    entries: Vec<Transaction>,
    next_id: u64,
}

impl Ledger {
    pub fn new(initial_balance: i64, entries: Vec<Transaction>) -> Self {
        let next_id = entries.len() as u64 + 1;
        Self {
            initial_balance,
            entries,
            next_id,
        }
    }

    /// Head balance, or the configured fallback when the ledger is empty.
    pub fn current_balance(&self) -> i64 {
        self.entries
            .first()
            .map(|entry| entry.balance)
            .unwrap_or(self.initial_balance)
    }

    /// Records a transaction with `amount` already signed and prepends it.
    /// An amount of 0 is allowed and leaves the balance unchanged.
    pub fn add(
        &mut self,
        date: String,
        kind: TransactionKind,
        amount: i64,
        description: String,
        category: String,
    ) -> &Transaction {
        let balance = self.current_balance() + amount;
        let id = self.next_id.to_string();
        self.next_id += 1;

        self.entries.insert(
            0,
            Transaction {
                id,
                date,
                kind,
                amount,
                description,
                category,
                balance,
            },
        );
        &self.entries[0]
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// Order-preserving filter; `All` returns the full collection.
    pub fn filtered(&self, filter: LedgerFilter) -> Vec<Transaction> {
        match filter {
            LedgerFilter::All => self.entries.clone(),
            LedgerFilter::Kind(kind) => self
                .entries
                .iter()
                .filter(|entry| entry.kind == kind)
                .cloned()
                .collect(),
        }
    }

    /// Signed totals for harvested/manual, absolute total for usage.
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            current_balance: self.current_balance(),
            total_harvested: self.total_for(TransactionKind::Harvested),
            total_used: self.total_for(TransactionKind::Usage).abs(),
            total_manual: self.total_for(TransactionKind::Manual),
        }
    }

    pub fn counts(&self) -> LedgerCounts {
        LedgerCounts {
            all: self.entries.len(),
            harvested: self.count_for(TransactionKind::Harvested),
            manual: self.count_for(TransactionKind::Manual),
            usage: self.count_for(TransactionKind::Usage),
            system: self.count_for(TransactionKind::System),
        }
    }

    pub fn speech(&self) -> String {
        let summary = self.summary();
        format!(
            "Your water transaction history shows {} liters harvested, {} liters used, and current balance of {} liters.",
            summary.total_harvested, summary.total_used, summary.current_balance
        )
    }

    fn total_for(&self, kind: TransactionKind) -> i64 {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.amount)
            .sum()
    }

    fn count_for(&self, kind: TransactionKind) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }
}
