//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::CategoryId;
use crate::storage::KeyValueStore;
use crate::store::{NewCategory, TransactionStore};

use super::parse_kind;

/// Fallback display color for categories created without one
const DEFAULT_COLOR: &str = "#909399";

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Add a custom category
    Add {
        /// Category name
        name: String,
        /// Kind: income or expense
        #[arg(short, long)]
        kind: String,
        /// Display color (#rrggbb)
        #[arg(short, long, default_value = DEFAULT_COLOR)]
        color: String,
    },

    /// Show a category
    Show {
        /// Category id
        id: String,
    },

    /// Delete a category
    ///
    /// Transactions referencing the category are left untouched.
    Delete {
        /// Category id
        id: String,
    },
}

/// Handle a category command
pub fn handle_category_command<S: KeyValueStore>(
    store: &mut TransactionStore<S>,
    cmd: CategoryCommands,
) -> FintrackResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(store.categories()));
        }

        CategoryCommands::Add { name, kind, color } => {
            let category = store.add_category(NewCategory {
                name,
                kind: parse_kind(&kind)?,
                color,
            })?;

            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { id } => {
            let id = CategoryId::from(id);
            let category = store
                .category_by_id(&id)
                .ok_or_else(|| FintrackError::category_not_found(id.to_string()))?;

            println!("Category:  {}", category.name);
            println!("  ID:      {}", category.id);
            println!("  Kind:    {}", category.kind);
            println!("  Color:   {}", category.color);
        }

        CategoryCommands::Delete { id } => {
            let id = CategoryId::from(id);
            if store.delete_category(&id)? {
                println!("Deleted category {}", id);
            } else {
                println!("No category with id {}", id);
            }
        }
    }

    Ok(())
}
