//! Transaction store
//!
//! Holds the ordered transaction list, the category list (seeded with the
//! built-in defaults) and the monthly budget. Every mutating operation
//! synchronously re-persists the affected state through the injected
//! key-value backend; aggregates are recomputed in full on every read.

use chrono::Utc;
use std::collections::HashSet;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    default_categories, Category, CategoryId, Money, Transaction, TransactionId, TransactionKind,
};
use crate::storage::{keys, KeyValueStore};

/// The monthly budget a fresh store starts with
pub const DEFAULT_MONTHLY_BUDGET: Money = Money::from_cents(500_000);

/// Input for creating a new transaction; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category_id: CategoryId,
    pub date: chrono::NaiveDate,
    pub note: Option<String>,
}

/// Input for creating a new custom category; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub kind: TransactionKind,
    pub color: String,
}

/// The transaction, category and budget state of the application
#[derive(Debug)]
pub struct TransactionStore<S: KeyValueStore> {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    monthly_budget: Money,
    storage: S,
}

impl<S: KeyValueStore> TransactionStore<S> {
    /// Create a store seeded with the default categories and budget
    pub fn new(storage: S) -> Self {
        Self {
            transactions: Vec::new(),
            categories: default_categories(),
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            storage,
        }
    }

    // Accessors

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All categories: defaults first, then customs in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The monthly budget
    pub fn monthly_budget(&self) -> Money {
        self.monthly_budget
    }

    /// Look up a category by id
    pub fn category_by_id(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a transaction by id
    pub fn transaction_by_id(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    // Derived aggregates, recomputed in full on every read

    /// Sum of signed amounts: income positive, expense negative
    pub fn total_balance(&self) -> Money {
        self.transactions.iter().map(|t| t.signed_amount()).sum()
    }

    /// Sum of amounts over income transactions
    pub fn total_income(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of amounts over expense transactions
    pub fn total_expense(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum()
    }

    /// Income categories in list order
    pub fn income_categories(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.kind == TransactionKind::Income)
            .collect()
    }

    /// Expense categories in list order
    pub fn expense_categories(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.kind == TransactionKind::Expense)
            .collect()
    }

    // CRUD

    /// Add a transaction, assign it a fresh id, and persist
    pub fn add_transaction(&mut self, input: NewTransaction) -> FintrackResult<Transaction> {
        let mut txn = Transaction::new(input.kind, input.amount, input.category_id, input.date);
        if let Some(note) = input.note {
            txn.note = note;
        }

        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.transactions.push(txn.clone());
        self.save()?;

        Ok(txn)
    }

    /// Replace the transaction with the same id, preserving its position
    ///
    /// A missing id is a silent no-op: nothing is persisted and `Ok(false)`
    /// is returned.
    pub fn update_transaction(&mut self, mut txn: Transaction) -> FintrackResult<bool> {
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        match self.transactions.iter().position(|t| t.id == txn.id) {
            Some(index) => {
                txn.updated_at = Utc::now();
                self.transactions[index] = txn;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove all transactions with the given id and persist
    pub fn delete_transaction(&mut self, id: &TransactionId) -> FintrackResult<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);
        let removed = self.transactions.len() < before;
        self.save()?;
        Ok(removed)
    }

    /// Add a custom category with a generated id and persist
    pub fn add_category(&mut self, input: NewCategory) -> FintrackResult<Category> {
        let category = Category::new(input.name, input.kind, input.color);

        category
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.categories.push(category.clone());
        self.save()?;

        Ok(category)
    }

    /// Remove all categories with the given id and persist
    ///
    /// Transactions referencing the deleted category are left untouched;
    /// their category ids dangle.
    pub fn delete_category(&mut self, id: &CategoryId) -> FintrackResult<bool> {
        let before = self.categories.len();
        self.categories.retain(|c| &c.id != id);
        let removed = self.categories.len() < before;
        self.save()?;
        Ok(removed)
    }

    // Persistence

    /// Set the monthly budget and persist it under its own key
    pub fn set_budget(&mut self, budget: Money) -> FintrackResult<()> {
        if budget.is_negative() {
            return Err(FintrackError::Validation(format!(
                "Monthly budget cannot be negative (got {})",
                budget
            )));
        }

        self.monthly_budget = budget;
        self.storage
            .set(keys::MONTHLY_BUDGET, &budget.to_plain_string())?;
        Ok(())
    }

    /// Serialize the transaction and category lists to storage
    ///
    /// The two keys are written one after the other with no transactional
    /// grouping; a failure between the writes leaves them inconsistent.
    pub fn save(&self) -> FintrackResult<()> {
        let transactions = serde_json::to_string(&self.transactions)?;
        self.storage.set(keys::TRANSACTIONS, &transactions)?;

        let categories = serde_json::to_string(&self.categories)?;
        self.storage.set(keys::CATEGORIES, &categories)?;

        Ok(())
    }

    /// Hydrate state from storage
    ///
    /// Transactions are replaced wholesale. Persisted categories are merged:
    /// any whose id is not already present is appended, so the defaults are
    /// never overwritten and repeated loads are idempotent. The budget is
    /// overwritten if its key is present. Absent keys leave the in-memory
    /// defaults untouched; malformed text is an error propagated to the
    /// caller.
    pub fn load(&mut self) -> FintrackResult<()> {
        if let Some(text) = self.storage.get(keys::TRANSACTIONS)? {
            self.transactions = serde_json::from_str(&text)?;
        }

        if let Some(text) = self.storage.get(keys::CATEGORIES)? {
            let persisted: Vec<Category> = serde_json::from_str(&text)?;
            let known: HashSet<CategoryId> =
                self.categories.iter().map(|c| c.id.clone()).collect();

            for category in persisted {
                if !known.contains(&category.id) {
                    self.categories.push(category);
                }
            }
        }

        if let Some(text) = self.storage.get(keys::MONTHLY_BUDGET)? {
            self.monthly_budget = Money::parse(&text).map_err(|e| {
                FintrackError::Storage(format!("Invalid {} value: {}", keys::MONTHLY_BUDGET, e))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn new_txn(kind: TransactionKind, cents: i64, category: &str) -> NewTransaction {
        NewTransaction {
            kind,
            amount: Money::from_cents(cents),
            category_id: CategoryId::fixed(category),
            date: test_date(),
            note: None,
        }
    }

    fn create_test_store() -> (MemoryStore, TransactionStore<MemoryStore>) {
        let storage = MemoryStore::new();
        let store = TransactionStore::new(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_fresh_store_defaults() {
        let (_storage, store) = create_test_store();

        assert!(store.transactions().is_empty());
        assert_eq!(store.categories().len(), 10);
        assert_eq!(store.monthly_budget(), Money::from_cents(500_000));
        assert!(store.total_balance().is_zero());
    }

    #[test]
    fn test_add_transaction_assigns_unique_ids() {
        let (_storage, mut store) = create_test_store();

        let a = store
            .add_transaction(new_txn(TransactionKind::Income, 1000, "salary"))
            .unwrap();
        let b = store
            .add_transaction(new_txn(TransactionKind::Income, 1000, "salary"))
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.transactions().len(), 2);
    }

    #[test]
    fn test_add_transaction_preserves_insertion_order() {
        let (_storage, mut store) = create_test_store();

        for cents in [100, 200, 300] {
            store
                .add_transaction(new_txn(TransactionKind::Expense, cents, "food"))
                .unwrap();
        }

        let amounts: Vec<i64> = store
            .transactions()
            .iter()
            .map(|t| t.amount.cents())
            .collect();
        assert_eq!(amounts, vec![100, 200, 300]);
    }

    #[test]
    fn test_add_transaction_rejects_negative_amount() {
        let (storage, mut store) = create_test_store();

        let err = store
            .add_transaction(new_txn(TransactionKind::Expense, -100, "food"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.transactions().is_empty());
        assert!(storage.is_empty().unwrap());
    }

    #[test]
    fn test_totals() {
        let (_storage, mut store) = create_test_store();

        store
            .add_transaction(new_txn(TransactionKind::Income, 100_000, "salary"))
            .unwrap();
        store
            .add_transaction(new_txn(TransactionKind::Expense, 20_000, "food"))
            .unwrap();

        assert_eq!(store.total_income(), Money::from_cents(100_000));
        assert_eq!(store.total_expense(), Money::from_cents(20_000));
        assert_eq!(store.total_balance(), Money::from_cents(80_000));
    }

    #[test]
    fn test_balance_equals_sum_of_signed_amounts() {
        let (_storage, mut store) = create_test_store();

        let entries = [
            (TransactionKind::Income, 1250),
            (TransactionKind::Expense, 310),
            (TransactionKind::Income, 45),
            (TransactionKind::Expense, 999),
        ];
        for (kind, cents) in entries {
            store
                .add_transaction(new_txn(kind, cents, "other-income"))
                .unwrap();
        }

        let expected: i64 = store
            .transactions()
            .iter()
            .map(|t| t.signed_amount().cents())
            .sum();
        assert_eq!(store.total_balance().cents(), expected);
    }

    #[test]
    fn test_update_transaction_replaces_in_place() {
        let (_storage, mut store) = create_test_store();

        store
            .add_transaction(new_txn(TransactionKind::Expense, 100, "food"))
            .unwrap();
        let target = store
            .add_transaction(new_txn(TransactionKind::Expense, 200, "food"))
            .unwrap();
        store
            .add_transaction(new_txn(TransactionKind::Expense, 300, "food"))
            .unwrap();

        let mut updated = target.clone();
        updated.amount = Money::from_cents(2000);
        updated.note = "corrected".into();

        assert!(store.update_transaction(updated).unwrap());
        assert_eq!(store.transactions().len(), 3);

        // Position preserved, totals reflect only the updated amount
        assert_eq!(store.transactions()[1].amount.cents(), 2000);
        assert_eq!(store.transactions()[1].note, "corrected");
        assert_eq!(store.total_expense(), Money::from_cents(2400));
    }

    #[test]
    fn test_update_missing_transaction_is_silent_noop() {
        let (storage, mut store) = create_test_store();

        let phantom = Transaction::new(
            TransactionKind::Income,
            Money::from_cents(100),
            CategoryId::fixed("salary"),
            test_date(),
        );

        assert!(!store.update_transaction(phantom).unwrap());
        assert!(store.transactions().is_empty());
        // Nothing was persisted
        assert_eq!(storage.get(keys::TRANSACTIONS).unwrap(), None);
    }

    #[test]
    fn test_delete_transaction() {
        let (_storage, mut store) = create_test_store();

        let keep = store
            .add_transaction(new_txn(TransactionKind::Income, 1000, "salary"))
            .unwrap();
        let gone = store
            .add_transaction(new_txn(TransactionKind::Expense, 200, "food"))
            .unwrap();

        assert!(store.delete_transaction(&gone.id).unwrap());
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].id, keep.id);
        assert_eq!(store.total_balance(), Money::from_cents(1000));

        assert!(!store.delete_transaction(&gone.id).unwrap());
    }

    #[test]
    fn test_add_category() {
        let (_storage, mut store) = create_test_store();

        let category = store
            .add_category(NewCategory {
                name: "Pets".into(),
                kind: TransactionKind::Expense,
                color: "#FF9800".into(),
            })
            .unwrap();

        assert!(category.id.is_custom());
        assert_eq!(store.categories().len(), 11);
        assert_eq!(
            store.category_by_id(&category.id).map(|c| c.name.as_str()),
            Some("Pets")
        );
    }

    #[test]
    fn test_add_category_rejects_invalid_input() {
        let (_storage, mut store) = create_test_store();

        let err = store
            .add_category(NewCategory {
                name: "  ".into(),
                kind: TransactionKind::Expense,
                color: "#FF9800".into(),
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.categories().len(), 10);
    }

    #[test]
    fn test_delete_category_leaves_dangling_references() {
        let (_storage, mut store) = create_test_store();

        let food = CategoryId::fixed("food");
        let txn = store
            .add_transaction(new_txn(TransactionKind::Expense, 200, "food"))
            .unwrap();

        assert!(store.delete_category(&food).unwrap());
        assert!(store.category_by_id(&food).is_none());

        // The referencing transaction is untouched
        let survivor = store.transaction_by_id(&txn.id).unwrap();
        assert_eq!(survivor.category_id, food);
        assert_eq!(store.total_expense(), Money::from_cents(200));
    }

    #[test]
    fn test_category_views_filter_by_kind_in_order() {
        let (_storage, store) = create_test_store();

        let income: Vec<&str> = store
            .income_categories()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(income, vec!["salary", "bonus", "investment", "other-income"]);

        let expense = store.expense_categories();
        assert_eq!(expense.len(), 6);
        assert_eq!(expense[0].id.as_str(), "food");
    }

    #[test]
    fn test_set_budget_persists_as_plain_text() {
        let (storage, mut store) = create_test_store();

        store.set_budget(Money::from_cents(123_450)).unwrap();
        assert_eq!(store.monthly_budget(), Money::from_cents(123_450));
        assert_eq!(
            storage.get(keys::MONTHLY_BUDGET).unwrap().as_deref(),
            Some("1234.50")
        );
        // Budget writes bypass save(): the collection keys stay untouched
        assert_eq!(storage.get(keys::TRANSACTIONS).unwrap(), None);
    }

    #[test]
    fn test_set_budget_rejects_negative() {
        let (_storage, mut store) = create_test_store();

        let err = store.set_budget(Money::from_cents(-1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.monthly_budget(), DEFAULT_MONTHLY_BUDGET);
    }

    #[test]
    fn test_save_load_round_trips_transactions() {
        let (storage, mut store) = create_test_store();

        store
            .add_transaction(NewTransaction {
                kind: TransactionKind::Income,
                amount: Money::from_cents(100_000),
                category_id: CategoryId::fixed("salary"),
                date: test_date(),
                note: Some("January paycheck".into()),
            })
            .unwrap();
        store
            .add_transaction(new_txn(TransactionKind::Expense, 20_000, "food"))
            .unwrap();
        store.set_budget(Money::from_cents(300_000)).unwrap();

        let mut reloaded = TransactionStore::new(storage);
        reloaded.load().unwrap();

        assert_eq!(reloaded.transactions().len(), 2);
        assert_eq!(reloaded.transactions()[0].note, "January paycheck");
        assert_eq!(
            reloaded.transactions()[0].id,
            store.transactions()[0].id
        );
        assert_eq!(reloaded.total_balance(), Money::from_cents(80_000));
        assert_eq!(reloaded.monthly_budget(), Money::from_cents(300_000));
    }

    #[test]
    fn test_load_replaces_transactions_wholesale() {
        let (storage, mut store) = create_test_store();

        store
            .add_transaction(new_txn(TransactionKind::Income, 1000, "salary"))
            .unwrap();

        // A second store persists a different list under the same backend
        let mut other = TransactionStore::new(storage.clone());
        other
            .add_transaction(new_txn(TransactionKind::Expense, 500, "food"))
            .unwrap();

        // Loading overwrites, it does not merge
        store.load().unwrap();
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].kind, TransactionKind::Expense);
    }

    #[test]
    fn test_load_merges_custom_categories_without_duplicating_defaults() {
        let (storage, mut store) = create_test_store();

        let custom = store
            .add_category(NewCategory {
                name: "Pets".into(),
                kind: TransactionKind::Expense,
                color: "#FF9800".into(),
            })
            .unwrap();

        let mut reloaded = TransactionStore::new(storage);
        reloaded.load().unwrap();

        assert_eq!(reloaded.categories().len(), 11);
        // Defaults keep their seed positions; the custom lands at the end
        assert_eq!(reloaded.categories()[0].id.as_str(), "salary");
        assert_eq!(reloaded.categories()[10].id, custom.id);
    }

    #[test]
    fn test_category_merge_is_idempotent() {
        let (storage, mut store) = create_test_store();

        store
            .add_category(NewCategory {
                name: "Pets".into(),
                kind: TransactionKind::Expense,
                color: "#FF9800".into(),
            })
            .unwrap();

        let mut reloaded = TransactionStore::new(storage);
        reloaded.load().unwrap();
        reloaded.load().unwrap();

        assert_eq!(reloaded.categories().len(), 11);
    }

    #[test]
    fn test_load_with_empty_storage_keeps_defaults() {
        let (_storage, mut store) = create_test_store();

        store.load().unwrap();

        assert!(store.transactions().is_empty());
        assert_eq!(store.categories().len(), 10);
        assert_eq!(store.monthly_budget(), DEFAULT_MONTHLY_BUDGET);
    }

    #[test]
    fn test_load_propagates_parse_failure() {
        let storage = MemoryStore::new();
        storage.set(keys::TRANSACTIONS, "not json").unwrap();

        let mut store = TransactionStore::new(storage);
        assert!(matches!(
            store.load().unwrap_err(),
            FintrackError::Json(_)
        ));
    }

    #[test]
    fn test_load_propagates_bad_budget() {
        let storage = MemoryStore::new();
        storage.set(keys::MONTHLY_BUDGET, "plenty").unwrap();

        let mut store = TransactionStore::new(storage);
        assert!(matches!(
            store.load().unwrap_err(),
            FintrackError::Storage(_)
        ));
    }

    #[test]
    fn test_income_and_expense_example_totals() {
        let (_storage, mut store) = create_test_store();

        store
            .add_transaction(new_txn(TransactionKind::Income, 100_000, "salary"))
            .unwrap();
        store
            .add_transaction(new_txn(TransactionKind::Expense, 20_000, "food"))
            .unwrap();

        assert_eq!(store.total_income(), Money::from_dollars(1000));
        assert_eq!(store.total_expense(), Money::from_dollars(200));
        assert_eq!(store.total_balance(), Money::from_dollars(800));
    }
}
