//! Transaction display formatting
//!
//! Formats transactions as register rows for terminal display.

use crate::models::{Category, Transaction, TransactionKind};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, category: Option<&Category>) -> String {
    let sign = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    let category_display = match category {
        Some(c) => c.name.as_str(),
        None => "(uncategorized)",
    };

    let note_part = if txn.note.is_empty() {
        String::new()
    } else {
        format!("  {}", truncate(&txn.note, 30))
    };

    format!(
        "{} {:20} {}{:>11}{}",
        txn.date.format("%Y-%m-%d"),
        truncate(category_display, 20),
        sign,
        txn.amount.to_string(),
        note_part
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    category_for: impl Fn(&Transaction) -> Option<Category>,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:20} {:>12}\n",
        "Date", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for txn in transactions {
        let category = category_for(txn);
        output.push_str(&format_transaction_row(txn, category.as_ref()));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum display width
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
