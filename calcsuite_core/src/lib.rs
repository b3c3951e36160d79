//! # calcsuite_core - Multi-Tool Calculator Engine
//!
//! `calcsuite_core` is the shared engine behind a suite of everyday
//! calculators: BMI, loan amortization, compound interest, calorie/BMR,
//! and currency conversion. Each tool combines a pure formula with a
//! bounded, persisted calculation history.
//!
//! ## Design Philosophy
//!
//! - **Pure formulas**: calculation functions take validated numeric input
//!   and return results, no side effects
//! - **Injected persistence**: history goes through a small `Storage`
//!   capability, swappable for an in-memory fake in tests
//! - **Graceful degradation**: bad input means no result, bad persisted
//!   data means an empty log; nothing in this crate has a fatal path
//! - **Frozen snapshots**: history stores pre-formatted display strings,
//!   so old entries never change when formatting does
//!
//! ## Quick Start
//!
//! ```rust
//! use calcsuite_core::forms::LoanForm;
//! use calcsuite_core::history::{HistoryStore, MemoryStorage};
//!
//! let mut store = HistoryStore::new(MemoryStorage::new());
//! let form = LoanForm::default();
//!
//! if let Some(result) = form.calculate(&mut store) {
//!     println!("Monthly payment: {:.2}", result.monthly_payment);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Pure formulas for the five tools
//! - [`forms`] - Per-tool orchestration over raw text input
//! - [`history`] - Bounded, persisted calculation history
//! - [`format`] - Display formatting for result snapshots
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod format;
pub mod forms;
pub mod history;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use history::{
    AllHistory, CalculatorKind, FileStorage, HistoryEntry, HistoryStore, MemoryStorage, Storage,
    HISTORY_CAPACITY,
};
