//! Budget CLI commands

use clap::Subcommand;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Money;
use crate::storage::KeyValueStore;
use crate::store::TransactionStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Amount (e.g. "5000" or "5000.50")
        amount: String,
    },

    /// Show the monthly budget
    Show,
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    store: &mut TransactionStore<S>,
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let budget =
                Money::parse(&amount).map_err(|e| FintrackError::Validation(e.to_string()))?;
            store.set_budget(budget)?;
            println!("Monthly budget set to {}", budget);
        }

        BudgetCommands::Show => {
            println!("Monthly budget: {}", store.monthly_budget());
        }
    }

    Ok(())
}
