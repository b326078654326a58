//! The fixed storage keys
//!
//! Key names are part of the persisted wire format and must not change.

/// The theme preference flag, stored as `"true"`/`"false"` text.
pub const DARK_MODE: &str = "darkMode";
/// The transaction list, stored as a JSON array.
pub const TRANSACTIONS: &str = "transactions";
/// The category list, stored as a JSON array.
pub const CATEGORIES: &str = "categories";
/// The monthly budget, stored as plain decimal text.
pub const MONTHLY_BUDGET: &str = "monthlyBudget";
