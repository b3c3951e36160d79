//! # Calculation History
//!
//! Generic bounded history over an injected storage capability:
//!
//! - [`storage`] - the `Storage` key-value trait plus file and in-memory
//!   implementations
//! - [`entries`] - per-calculator record types and the `HistoryEntry`
//!   wrapper that carries id and timestamp
//! - [`store`] - the `HistoryStore` itself: load, append, clear, with a
//!   20-entry cap per log

pub mod entries;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use entries::{
    BmiRecord, CalculatorKind, CalorieRecord, CompoundRecord, CurrencyRecord, HistoryEntry,
    HistoryRecord, LoanRecord,
};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{AllHistory, HistoryStore, HISTORY_CAPACITY};
