//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store layer.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{FintrackError, FintrackResult};
use crate::models::TransactionKind;

/// Parse a transaction kind from CLI input
pub(crate) fn parse_kind(s: &str) -> FintrackResult<TransactionKind> {
    match s.to_lowercase().as_str() {
        "income" | "in" => Ok(TransactionKind::Income),
        "expense" | "out" => Ok(TransactionKind::Expense),
        other => Err(FintrackError::Validation(format!(
            "Unknown kind '{}' (expected 'income' or 'expense')",
            other
        ))),
    }
}
