use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_budget_command, handle_category_command, handle_transaction_command, BudgetCommands,
    CategoryCommands, TransactionCommands,
};
use fintrack::config::AppPaths;
use fintrack::display::format_summary;
use fintrack::routes::Route;
use fintrack::storage::FileStore;
use fintrack::store::{AppState, TransactionStore};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker",
    long_about = "fintrack keeps track of income and expense transactions, \
                  categories and a monthly budget, persisted under your local \
                  data directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show balance, totals and budget
    Summary,

    /// Toggle the dark mode preference
    Theme,

    /// List the navigable views
    Routes,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage
    let paths = AppPaths::new()?;
    paths.ensure_directories()?;
    let storage = FileStore::new(paths.store_dir());

    // Hydrate state
    let mut app = AppState::new(storage.clone());
    app.load()?;

    let mut store = TransactionStore::new(storage);
    store.load()?;

    match cli.command {
        Commands::Transaction(cmd) => {
            handle_transaction_command(&mut store, cmd)?;
        }
        Commands::Category(cmd) => {
            handle_category_command(&mut store, cmd)?;
        }
        Commands::Budget(cmd) => {
            handle_budget_command(&mut store, cmd)?;
        }
        Commands::Summary => {
            print!(
                "{}",
                format_summary(
                    store.total_balance(),
                    store.total_income(),
                    store.total_expense(),
                    store.monthly_budget(),
                )
            );
        }
        Commands::Theme => {
            let dark = app.toggle_theme()?;
            println!(
                "Dark mode {}",
                if dark { "enabled" } else { "disabled" }
            );
        }
        Commands::Routes => {
            for route in Route::all() {
                println!("{:14} {}", route.path(), route.title());
            }
        }
        Commands::Config => {
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Store directory: {}", paths.store_dir().display());
        }
    }

    Ok(())
}
