//! Category model and the built-in default categories
//!
//! Categories are named groupings with a kind and a display color that
//! transactions are tagged with. Ten defaults are seeded at store creation;
//! their fixed ids are never duplicated or overwritten when persisted custom
//! categories are merged back in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionKind;

/// A named grouping that transactions are tagged with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier: fixed string for defaults, generated for custom categories
    pub id: CategoryId,

    /// Display label
    pub name: String,

    /// Whether this category applies to income or expense transactions
    pub kind: TransactionKind,

    /// Display hint, `#rrggbb`
    pub color: String,
}

impl Category {
    /// Create a new custom category with a generated id
    pub fn new(name: impl Into<String>, kind: TransactionKind, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::custom(),
            name: name.into(),
            kind,
            color: color.into(),
        }
    }

    /// Create a category with a specific id (used for the built-in defaults)
    pub fn with_id(
        id: CategoryId,
        name: impl Into<String>,
        kind: TransactionKind,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            color: color.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !self.color.starts_with('#') {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The ten built-in categories seeded into every store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Salary,
    Bonus,
    Investment,
    OtherIncome,
    Dining,
    Shopping,
    Transport,
    Entertainment,
    Utilities,
    OtherExpense,
}

impl DefaultCategory {
    /// Get all defaults in seed order
    pub fn all() -> &'static [Self] {
        &[
            Self::Salary,
            Self::Bonus,
            Self::Investment,
            Self::OtherIncome,
            Self::Dining,
            Self::Shopping,
            Self::Transport,
            Self::Entertainment,
            Self::Utilities,
            Self::OtherExpense,
        ]
    }

    /// The fixed id for this default
    pub fn id(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Bonus => "bonus",
            Self::Investment => "investment",
            Self::OtherIncome => "other-income",
            Self::Dining => "food",
            Self::Shopping => "shopping",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::OtherExpense => "other-expense",
        }
    }

    /// The display name for this default
    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Bonus => "Bonus",
            Self::Investment => "Investment",
            Self::OtherIncome => "Other Income",
            Self::Dining => "Dining",
            Self::Shopping => "Shopping",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::OtherExpense => "Other Expenses",
        }
    }

    /// The kind for this default
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Salary | Self::Bonus | Self::Investment | Self::OtherIncome => {
                TransactionKind::Income
            }
            _ => TransactionKind::Expense,
        }
    }

    /// The display color for this default
    pub fn color(&self) -> &'static str {
        match self {
            Self::Salary => "#67C23A",
            Self::Bonus => "#8BC34A",
            Self::Investment => "#4CAF50",
            Self::OtherIncome => "#2E7D32",
            Self::Dining => "#F56C6C",
            Self::Shopping => "#E91E63",
            Self::Transport => "#9C27B0",
            Self::Entertainment => "#673AB7",
            Self::Utilities => "#3F51B5",
            Self::OtherExpense => "#2196F3",
        }
    }

    /// Create a Category from this default
    pub fn to_category(&self) -> Category {
        Category::with_id(
            CategoryId::fixed(self.id()),
            self.name(),
            self.kind(),
            self.color(),
        )
    }
}

/// The seed category list for a fresh store, in display order
pub fn default_categories() -> Vec<Category> {
    DefaultCategory::all()
        .iter()
        .map(DefaultCategory::to_category)
        .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::InvalidColor(color) => {
                write!(f, "Category color must be a #rrggbb value (got '{}')", color)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
