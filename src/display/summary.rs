//! Summary display formatting

use crate::models::Money;

/// Format the derived totals and the monthly budget
pub fn format_summary(
    balance: Money,
    income: Money,
    expense: Money,
    monthly_budget: Money,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Balance:        {:>12}\n", balance.to_string()));
    output.push_str(&format!("Total income:   {:>12}\n", income.to_string()));
    output.push_str(&format!("Total expense:  {:>12}\n", expense.to_string()));
    output.push_str(&format!(
        "Monthly budget: {:>12}\n",
        monthly_budget.to_string()
    ));

    let remaining = monthly_budget - expense;
    output.push_str(&format!("Remaining:      {:>12}\n", remaining.to_string()));

    output
}
