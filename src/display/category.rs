//! Category display formatting

use crate::models::{Category, TransactionKind};

/// Format the category list grouped by kind
pub fn format_category_list(categories: &[Category]) -> String {
    let mut output = String::new();

    for (kind, heading) in [
        (TransactionKind::Income, "Income categories"),
        (TransactionKind::Expense, "Expense categories"),
    ] {
        output.push_str(heading);
        output.push('\n');

        for category in categories.iter().filter(|c| c.kind == kind) {
            output.push_str(&format!(
                "  {:20} {:8} {}\n",
                category.name, category.color, category.id
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;

    #[test]
    fn test_groups_by_kind() {
        let output = format_category_list(&default_categories());

        let income_pos = output.find("Income categories").unwrap();
        let expense_pos = output.find("Expense categories").unwrap();
        assert!(income_pos < expense_pos);

        let salary_pos = output.find("Salary").unwrap();
        assert!(salary_pos < expense_pos);
        assert!(output.find("Dining").unwrap() > expense_pos);
    }

    #[test]
    fn test_shows_ids_and_colors() {
        let output = format_category_list(&default_categories());
        assert!(output.contains("salary"));
        assert!(output.contains("#67C23A"));
    }
}
