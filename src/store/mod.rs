//! Application state stores
//!
//! Two stores make up the state layer: [AppState] for UI flags and
//! [TransactionStore] for transactions, categories and the monthly budget.
//! Both are explicitly constructed with an injected [KeyValueStore]
//! backend rather than reaching for a global singleton, so callers decide
//! where state lives and tests run against [MemoryStore].
//!
//! [KeyValueStore]: crate::storage::KeyValueStore
//! [MemoryStore]: crate::storage::MemoryStore

pub mod app;
pub mod transactions;

pub use app::AppState;
pub use transactions::{NewCategory, NewTransaction, TransactionStore};
