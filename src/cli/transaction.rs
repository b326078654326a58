//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_transaction_register;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, TransactionId};
use crate::storage::KeyValueStore;
use crate::store::{NewTransaction, TransactionStore};

use super::parse_kind;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Kind: income or expense
        kind: String,
        /// Amount (e.g. "25" or "25.50")
        amount: String,
        /// Category id (e.g. "food")
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List all transactions
    List,

    /// Edit a transaction (full replace of the given fields)
    Edit {
        /// Transaction id
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category id
        #[arg(short, long)]
        category: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction id
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    store: &mut TransactionStore<S>,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            note,
        } => {
            let txn = store.add_transaction(NewTransaction {
                kind: parse_kind(&kind)?,
                amount: parse_amount(&amount)?,
                category_id: category.as_str().into(),
                date: parse_date(date.as_deref())?,
                note,
            })?;

            println!("Added {} transaction: {}", txn.kind, txn.amount);
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List => {
            let register = format_transaction_register(store.transactions(), |txn| {
                store.category_by_id(&txn.category_id).cloned()
            });
            print!("{}", register);
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            note,
        } => {
            let id = parse_id(&id)?;
            let mut txn = store
                .transaction_by_id(&id)
                .cloned()
                .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

            if let Some(amount) = amount {
                txn.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                txn.category_id = category.as_str().into();
            }
            if let Some(note) = note {
                txn.note = note;
            }

            store.update_transaction(txn)?;
            println!("Updated transaction {}", id);
        }

        TransactionCommands::Delete { id } => {
            let id = parse_id(&id)?;
            if store.delete_transaction(&id)? {
                println!("Deleted transaction {}", id);
            } else {
                println!("No transaction with id {}", id);
            }
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> FintrackResult<Money> {
    Money::parse(s).map_err(|e| FintrackError::Validation(e.to_string()))
}

fn parse_date(s: Option<&str>) -> FintrackResult<NaiveDate> {
    match s {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|e| FintrackError::Validation(format!("Invalid date '{}': {}", text, e))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn parse_id(s: &str) -> FintrackResult<TransactionId> {
    s.parse()
        .map_err(|_| FintrackError::Validation(format!("Invalid transaction id: {}", s)))
}
