//! Core data models for fintrack
//!
//! This module contains the data structures that represent the finance
//! tracking domain: transactions, categories, money amounts, and their ids.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{default_categories, Category, CategoryValidationError, DefaultCategory};
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
