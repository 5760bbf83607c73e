//! Sequence counter storage.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use facturo_core::{AccountId, DocumentKind};

/// One counter scope: numbers restart at 0001 for each account, kind and
/// calendar month.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SequenceScope {
    pub account_id: AccountId,
    pub kind: DocumentKind,
    pub year: i32,
    pub month: u32,
}

impl SequenceScope {
    pub fn for_date(account_id: AccountId, kind: DocumentKind, date: NaiveDate) -> Self {
        Self {
            account_id,
            kind,
            year: date.year(),
            month: date.month(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The 4-digit sequence space for a scope is used up.
    #[error("sequence exhausted for {kind:?} {year:04}-{month:02}")]
    Exhausted {
        kind: DocumentKind,
        year: i32,
        month: u32,
    },

    /// Upstream storage failed; propagated unchanged to the caller.
    #[error("sequence store failure: {0}")]
    Store(String),
}

/// Allocates the next sequence value for a scope.
///
/// Implementations must perform the reservation as a single atomic
/// read-modify-write: two concurrent calls for the same scope must never
/// observe the same current value. Counting existing rows and adding one is
/// explicitly not a valid implementation.
pub trait SequenceStore: Send + Sync {
    fn next_value(&self, scope: SequenceScope) -> Result<u32, SequenceError>;
}

/// In-memory counter store.
///
/// Intended for tests/dev; a production deployment backs the trait with a
/// transactional counter. The whole reservation happens under one write
/// guard, so allocations are strictly serialized per process.
#[derive(Debug, Default)]
pub struct InMemorySequenceStore {
    counters: RwLock<HashMap<SequenceScope, u32>>,
}

impl InMemorySequenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequenceStore for InMemorySequenceStore {
    fn next_value(&self, scope: SequenceScope) -> Result<u32, SequenceError> {
        let mut counters = self
            .counters
            .write()
            .map_err(|_| SequenceError::Store("lock poisoned".to_string()))?;

        let counter = counters.entry(scope).or_insert(0);
        if *counter >= 9999 {
            return Err(SequenceError::Exhausted {
                kind: scope.kind,
                year: scope.year,
                month: scope.month,
            });
        }
        *counter += 1;
        Ok(*counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> SequenceScope {
        SequenceScope::for_date(
            AccountId::new(),
            DocumentKind::Invoice,
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        )
    }

    #[test]
    fn counter_starts_at_one_and_increments() {
        let store = InMemorySequenceStore::new();
        let scope = scope();
        assert_eq!(store.next_value(scope).unwrap(), 1);
        assert_eq!(store.next_value(scope).unwrap(), 2);
        assert_eq!(store.next_value(scope).unwrap(), 3);
    }

    #[test]
    fn scopes_are_independent() {
        let store = InMemorySequenceStore::new();
        let account = AccountId::new();
        let jan = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let feb = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

        let inv_jan = SequenceScope::for_date(account, DocumentKind::Invoice, jan);
        let inv_feb = SequenceScope::for_date(account, DocumentKind::Invoice, feb);
        let quo_jan = SequenceScope::for_date(account, DocumentKind::Quote, jan);

        assert_eq!(store.next_value(inv_jan).unwrap(), 1);
        assert_eq!(store.next_value(inv_jan).unwrap(), 2);
        // A new month and a different kind both start over at 1.
        assert_eq!(store.next_value(inv_feb).unwrap(), 1);
        assert_eq!(store.next_value(quo_jan).unwrap(), 1);
    }

    #[test]
    fn exhausted_scope_reports_error() {
        let store = InMemorySequenceStore::new();
        let scope = scope();
        {
            let mut counters = store.counters.write().unwrap();
            counters.insert(scope, 9999);
        }
        assert!(matches!(
            store.next_value(scope),
            Err(SequenceError::Exhausted { .. })
        ));
    }
}
