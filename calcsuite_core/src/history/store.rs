//! # History Store
//!
//! Bounded, persisted, per-calculator logs of past results. Each of the
//! five calculators gets an independent log, newest entry first, capped at
//! [`HISTORY_CAPACITY`] entries; the oldest entry is silently evicted on
//! overflow.
//!
//! Persistence is write-through: every append and clear goes straight to
//! the injected [`Storage`] before returning. Persistence failures never
//! surface to the caller as errors; they are logged as warnings and the
//! in-memory result is still returned, so the current session keeps
//! working even when nothing can be saved.
//!
//! ## Example
//!
//! ```rust
//! use calcsuite_core::history::entries::{BmiRecord, CalculatorKind};
//! use calcsuite_core::history::storage::MemoryStorage;
//! use calcsuite_core::history::store::HistoryStore;
//!
//! let mut store = HistoryStore::new(MemoryStorage::new());
//!
//! let log = store.append(BmiRecord {
//!     bmi: "22.86".to_string(),
//!     weight: "70 kg".to_string(),
//!     height: "175 cm".to_string(),
//!     ..Default::default()
//! });
//! assert_eq!(log.len(), 1);
//!
//! store.clear(CalculatorKind::Bmi);
//! assert!(store.load::<BmiRecord>().is_empty());
//! ```

use chrono::Local;
use tracing::warn;
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::history::entries::{
    BmiRecord, CalculatorKind, CalorieRecord, CompoundRecord, CurrencyRecord, HistoryEntry,
    HistoryRecord, LoanRecord,
};
use crate::history::storage::Storage;

/// Maximum entries retained per calculator log
pub const HISTORY_CAPACITY: usize = 20;

/// Timestamp format for new entries
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// All five logs, loaded together for the combined history view.
#[derive(Debug, Clone, Default)]
pub struct AllHistory {
    pub bmi: Vec<HistoryEntry<BmiRecord>>,
    pub loan: Vec<HistoryEntry<LoanRecord>>,
    pub compound_interest: Vec<HistoryEntry<CompoundRecord>>,
    pub calorie: Vec<HistoryEntry<CalorieRecord>>,
    pub currency: Vec<HistoryEntry<CurrencyRecord>>,
}

impl AllHistory {
    /// Total entries across all five logs
    pub fn total_entries(&self) -> usize {
        self.bmi.len()
            + self.loan.len()
            + self.compound_interest.len()
            + self.calorie.len()
            + self.currency.len()
    }

    /// Whether every log is empty
    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }
}

/// Bounded, persisted calculation history over an injected storage
/// capability.
///
/// The store is the sole write path for history: entries get their id and
/// timestamp here and are immutable afterwards. One instance serves all
/// five logs; the record type parameter on each call picks the log.
#[derive(Debug)]
pub struct HistoryStore<S: Storage> {
    storage: S,
}

impl<S: Storage> HistoryStore<S> {
    /// Create a store over the given storage capability
    pub fn new(storage: S) -> Self {
        HistoryStore { storage }
    }

    /// Load the log for record type `R`, newest first.
    ///
    /// Absent or malformed persisted data degrades to an empty log;
    /// malformed data is logged as a warning, never propagated.
    pub fn load<R: HistoryRecord>(&self) -> Vec<HistoryEntry<R>> {
        let key = R::KIND.storage_key();
        match self.try_load::<R>(key) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key, error = %e, "history unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    fn try_load<R: HistoryRecord>(&self, key: &str) -> CalcResult<Vec<HistoryEntry<R>>> {
        match self.storage.read(key)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| CalcError::SerializationError {
                reason: e.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Append a record to its log and return the updated log.
    ///
    /// Synthesizes a unique id and timestamp, prepends the entry, truncates
    /// to [`HISTORY_CAPACITY`], and persists write-through. If persistence
    /// fails the updated log is still returned so the session's view stays
    /// consistent; the entry just will not survive a reload.
    pub fn append<R: HistoryRecord>(&mut self, record: R) -> Vec<HistoryEntry<R>> {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            record,
        };

        let mut entries = self.load::<R>();
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAPACITY);

        self.persist(R::KIND, &entries);
        entries
    }

    /// Clear the log for one calculator, removing its persisted state.
    pub fn clear(&mut self, kind: CalculatorKind) {
        let key = kind.storage_key();
        if let Err(e) = self.storage.remove(key) {
            warn!(key, error = %e, "failed to clear history");
        }
    }

    /// Clear all five logs.
    ///
    /// Each key is cleared independently, so a failure on one key leaves
    /// the others cleanly removed.
    pub fn clear_all(&mut self) {
        for kind in CalculatorKind::ALL {
            self.clear(kind);
        }
    }

    /// Load all five logs. A malformed or unreadable log for one key
    /// degrades to empty without affecting the others.
    pub fn load_all(&self) -> AllHistory {
        AllHistory {
            bmi: self.load(),
            loan: self.load(),
            compound_interest: self.load(),
            calorie: self.load(),
            currency: self.load(),
        }
    }

    fn persist<R: HistoryRecord>(&mut self, kind: CalculatorKind, entries: &[HistoryEntry<R>]) {
        let key = kind.storage_key();
        let json = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize history");
                return;
            }
        };
        if let Err(e) = self.storage.write(key, &json) {
            warn!(key, error = %e, "failed to persist history, entry kept in memory only");
        }
    }
}
